use crate::error::Error;
use lexers::{Assoc, BinOp, Paren, Token};
use std::fmt;
use std::ops::Deref;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    UnmatchedOpenParen,
    UnmatchedCloseParen,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConvertError::UnmatchedOpenParen => write!(f, "unmatched opening parenthesis"),
            ConvertError::UnmatchedCloseParen => write!(f, "unmatched closing parenthesis"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Binding strength of a token on the operator stack.
///
/// Binary operators are ranked above an open parenthesis by their static
/// precedence. Negation outranks every binary operator, so the next binary
/// operator always pops it, while pushing a negation never pops anything
/// since it is right associative. Operands never reach the stack and rank
/// highest, which the infix printer relies on to never parenthesize them.
pub fn precedence(token: &Token) -> (usize, Assoc) {
    const NEG: usize = BinOp::Pow.precedence() as usize + 2;
    match *token {
        Token::Paren(Paren::Open) => (0, Assoc::Left), // keep at bottom
        Token::BOp(op) => (op.precedence() as usize + 1, op.assoc()),
        Token::UOp(_) => (NEG, Assoc::Right),
        Token::Number(_) | Token::Paren(Paren::Close) => (usize::MAX, Assoc::Left),
    }
}

/// A token queue in postfix order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] { &self.0 }
}

impl IntoIterator for RPNExpr {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, Error> {
        let infix = lexers::tokenize(expr)?;
        Ok(Self::parse(infix)?)
    }

    pub fn parse(infix: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ConvertError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in infix {
            match token {
                Token::Number(_) => out.push(token),
                Token::Paren(Paren::Open) => stack.push(token),
                Token::Paren(Paren::Close) => loop {
                    match stack.pop() {
                        Some(Token::Paren(Paren::Open)) => break,
                        Some(top) => out.push(top),
                        None => return Err(ConvertError::UnmatchedCloseParen),
                    }
                },
                Token::UOp(_) | Token::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while let Some(top) = stack.last() {
                        let (prec_lhs, _) = precedence(top);
                        if prec_lhs < prec_rhs
                            || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Right)
                        {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::Paren(Paren::Open) => return Err(ConvertError::UnmatchedOpenParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}

/// Rewrite an infix token sequence into postfix order.
pub fn convert(infix: Vec<Token>) -> Result<RPNExpr, ConvertError> {
    ShuntingParser::parse(infix)
}
