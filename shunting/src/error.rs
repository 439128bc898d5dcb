use crate::parser::ConvertError;
use crate::rpneval::EvalError;
use lexers::LexError;
use std::fmt;

/// Failure of any stage of the tokenize, convert, evaluate pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Convert(ConvertError),
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Lex(ref e) => write!(f, "Lex error: {}", e),
            Error::Convert(ref e) => write!(f, "Parse error: {}", e),
            Error::Eval(ref e) => write!(f, "Eval error: {}", e),
        }
    }
}

// Display already carries the stage error, so no source() chain.
impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self { Error::Lex(e) }
}

impl From<ConvertError> for Error {
    fn from(e: ConvertError) -> Self { Error::Convert(e) }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self { Error::Eval(e) }
}
