mod scanner;
mod helpers;
mod token;
mod math_tokenizer;

pub use scanner::Scanner;
pub use token::{Assoc, BinOp, Paren, Token, UnOp};
pub use math_tokenizer::{tokenize, LexError, MathTokenizer};

pub use helpers::scan_integer;
pub use helpers::scan_op;
pub use helpers::skip_whitespace;

#[cfg(test)]
mod scanner_test;
