#![deny(warnings)]

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

// Operators sharing a precedence level must share associativity.
impl BinOp {
    pub const ALL: [BinOp; 5] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Pow];

    pub const fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 0,
            BinOp::Mul | BinOp::Div => 1,
            BinOp::Pow => 2,
        }
    }

    pub const fn assoc(self) -> Assoc {
        match self {
            BinOp::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    pub fn from_char(c: char) -> Option<BinOp> {
        BinOp::ALL.iter().copied().find(|op| op.symbol() == c)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnOp {
    Neg,
}

impl UnOp {
    /// Rendered apart from binary '-' so postfix dumps stay readable.
    pub const fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "(-)",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    Number(i64),
    BOp(BinOp),
    UOp(UnOp),
    Paren(Paren),
}

impl Token {
    /// Number of operands consumed when evaluated, None for parenthesis.
    pub fn arity(&self) -> Option<usize> {
        match *self {
            Token::Number(_) => Some(0),
            Token::UOp(_) => Some(1),
            Token::BOp(_) => Some(2),
            Token::Paren(_) => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(*self, Token::BOp(_) | Token::UOp(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Number(n) => write!(f, "{}", n),
            Token::BOp(op) => write!(f, "{}", op.symbol()),
            Token::UOp(op) => write!(f, "{}", op.symbol()),
            Token::Paren(Paren::Open) => write!(f, "("),
            Token::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
