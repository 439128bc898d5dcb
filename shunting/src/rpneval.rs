use crate::parser::RPNExpr;
use lexers::{BinOp, Token, UnOp};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// An operator found fewer operands than its arity.
    StackUnderflow,
    /// Operands left over once every operator was applied.
    TrailingOperands,
    DivisionByZero,
    /// A token with no meaning in postfix (parenthesis).
    UnknownOperator(Token),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EvalError::StackUnderflow => write!(f, "stack empty, missing operand"),
            EvalError::TrailingOperands => write!(f, "remaining operands"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::UnknownOperator(ref token) => write!(f, "unknown operator '{}'", token),
        }
    }
}

impl std::error::Error for EvalError {}

impl RPNExpr {
    pub fn eval(&self) -> Result<i64, EvalError> {
        evaluate(&self.0)
    }
}

/// Run a postfix token sequence on a value stack.
///
/// Arithmetic wraps on overflow, division truncates toward zero.
pub fn evaluate(postfix: &[Token]) -> Result<i64, EvalError> {
    let mut operands = Vec::new();

    for token in postfix.iter() {
        match *token {
            Token::Number(num) => operands.push(num),
            Token::BOp(op) => {
                // right hand side sits on top
                let r = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let l = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(eval_binary(op, l, r)?);
            }
            Token::UOp(UnOp::Neg) => {
                let o = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(o.wrapping_neg());
            }
            Token::Paren(_) => return Err(EvalError::UnknownOperator(*token)),
        }
    }
    let result = operands.pop().ok_or(EvalError::StackUnderflow)?;
    if !operands.is_empty() {
        return Err(EvalError::TrailingOperands);
    }
    Ok(result)
}

fn eval_binary(op: BinOp, l: i64, r: i64) -> Result<i64, EvalError> {
    match op {
        BinOp::Add => Ok(l.wrapping_add(r)),
        BinOp::Sub => Ok(l.wrapping_sub(r)),
        BinOp::Mul => Ok(l.wrapping_mul(r)),
        BinOp::Div if r == 0 => Err(EvalError::DivisionByZero),
        BinOp::Div => Ok(l.wrapping_div(r)),
        BinOp::Pow => int_pow(l, r),
    }
}

/// `base` raised to `exp` by squaring.
///
/// Negative exponents give the truncated real result: only a base of 1 or
/// -1 survives, every other base collapses to 0, and 0 has no value.
pub fn int_pow(base: i64, exp: i64) -> Result<i64, EvalError> {
    if exp < 0 {
        return match base {
            0 => Err(EvalError::DivisionByZero),
            1 => Ok(1),
            -1 if exp % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Ok(0),
        };
    }
    let (mut base, mut exp, mut acc) = (base, exp as u64, 1i64);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        exp >>= 1;
        if exp > 0 {
            base = base.wrapping_mul(base);
        }
    }
    Ok(acc)
}
