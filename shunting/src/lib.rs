extern crate lexers;

pub use lexers::{tokenize, Assoc, BinOp, LexError, MathTokenizer, Paren, Token, UnOp};

pub use parser::convert;
pub use parser::precedence;
pub use parser::ConvertError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::{evaluate, int_pow, EvalError};
pub use self::rpnprint::dump_queue;

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod rpneval_test;

mod error;
pub use error::Error;

/// Tokenize, convert and evaluate `expr` in one go.
pub fn eval_str(expr: &str) -> Result<i64, Error> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(rpn.eval()?)
}
