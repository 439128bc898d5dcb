#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;
use crate::token::{BinOp, Paren, Token, UnOp};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter { ch: char, pos: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LexError::UnexpectedCharacter { ch, pos } => {
                write!(f, "unexpected character {:?} at position {}", ch, pos)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct MathTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    // a '-' seen while expecting an operand is a negation
    expect_operand: bool,
    skip_ws: bool,
    failed: bool,
}

impl<I: Iterator<Item = char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer {
            src: Scanner::new(source),
            expect_operand: true,
            skip_ws: false,
            failed: false,
        }
    }

    /// Treat whitespace as a token separator instead of an error.
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_ws = skip;
        self
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.skip_ws {
            helpers::skip_whitespace(&mut self.src);
        }
        if let Some(num) = helpers::scan_integer(&mut self.src) {
            self.expect_operand = false;
            Some(Ok(Token::Number(num)))
        } else if let Some(op) = helpers::scan_op(&mut self.src) {
            let token = match op {
                '(' => Token::Paren(Paren::Open),
                ')' => Token::Paren(Paren::Close),
                '-' if self.expect_operand => Token::UOp(UnOp::Neg),
                _ => match BinOp::from_char(op) {
                    Some(bop) => Token::BOp(bop),
                    None => return Some(Err(self.unexpected(op))),
                },
            };
            self.expect_operand = token != Token::Paren(Paren::Close);
            Some(Ok(token))
        } else if let Some(ch) = self.src.next() {
            Some(Err(self.unexpected(ch)))
        } else {
            None
        }
    }

    fn unexpected(&self, ch: char) -> LexError {
        LexError::UnexpectedCharacter { ch, pos: self.src.start() }
    }
}

impl<I: Iterator<Item = char>> Iterator for MathTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.get_token();
        self.failed = matches!(token, Some(Err(_)));
        token
    }
}

/// Split `input` into tokens, failing on the first character that is
/// neither a digit nor one of `+ - * / ^ ( )`; whitespace is an unexpected
/// character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    MathTokenizer::new(input.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
