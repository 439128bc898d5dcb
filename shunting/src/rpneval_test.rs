use crate::error::Error;
use crate::eval_str;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::{evaluate, int_pow, EvalError};
use lexers::{BinOp, Paren, Token, UnOp};

#[test]
fn test_eval1() {
    let expr = ShuntingParser::parse_str("2+3*4").unwrap();
    assert_eq!(expr.eval(), Ok(14));
    let expr = ShuntingParser::parse_str("(2+3)*4").unwrap();
    assert_eq!(expr.eval(), Ok(20));
}

#[test]
fn test_eval2() {
    assert_eq!(eval_str("2^3^2"), Ok(512));
    assert_eq!(eval_str("(2^3)^2"), Ok(64));
    assert_eq!(eval_str("8-3-2"), Ok(3));
    assert_eq!(eval_str("8-(3-2)"), Ok(7));
    assert_eq!(eval_str("100/10/5"), Ok(2));
}

#[test]
fn test_eval3() {
    assert_eq!(eval_str("-3+5"), Ok(2));
    assert_eq!(eval_str("4*-2"), Ok(-8));
    assert_eq!(eval_str("--3"), Ok(3));
    assert_eq!(eval_str("2---3"), Ok(-1));
    assert_eq!(eval_str("-(1-5)*2"), Ok(8));
    assert_eq!(eval_str("-2^2"), Ok(4));
}

#[test]
fn test_eval4() {
    // -(1-5)^2^3 = 4^8, so 4*2 / 65536 truncates to 0
    assert_eq!(eval_str("3+4*2/-(1-5)^2^3"), Ok(3));
    assert_eq!(eval_str("(10-4)*(3+2)^2-1"), Ok(149));
}

#[test]
fn division_truncates() {
    assert_eq!(eval_str("7/2"), Ok(3));
    assert_eq!(eval_str("-7/2"), Ok(-3));
    assert_eq!(eval_str("7/-2"), Ok(-3));
    assert_eq!(eval_str("-7/-2"), Ok(3));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_str("1/0"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(eval_str("5/(3-3)"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(eval_str("0^-1"), Err(Error::Eval(EvalError::DivisionByZero)));
}

#[test]
fn malformed_postfix() {
    assert_eq!(evaluate(&[Token::BOp(BinOp::Add)]), Err(EvalError::StackUnderflow));
    assert_eq!(evaluate(&[Token::Number(1), Token::BOp(BinOp::Sub)]),
               Err(EvalError::StackUnderflow));
    assert_eq!(evaluate(&[Token::UOp(UnOp::Neg)]), Err(EvalError::StackUnderflow));
    assert_eq!(evaluate(&[Token::Number(1), Token::Number(2)]),
               Err(EvalError::TrailingOperands));
    assert_eq!(evaluate(&[]), Err(EvalError::StackUnderflow));
    let paren = Token::Paren(Paren::Open);
    assert_eq!(evaluate(&[Token::Number(1), paren]), Err(EvalError::UnknownOperator(paren)));
}

#[test]
fn syntax_errors_surface_at_eval() {
    assert_eq!(eval_str("2+"), Err(Error::Eval(EvalError::StackUnderflow)));
    assert_eq!(eval_str("2 3"), Err(Error::Lex(lexers::LexError::UnexpectedCharacter {
        ch: ' ', pos: 1,
    })));
    assert_eq!(eval_str("(2)(3)"), Err(Error::Eval(EvalError::TrailingOperands)));
    assert_eq!(eval_str(""), Err(Error::Eval(EvalError::StackUnderflow)));
}

#[test]
fn eval_is_repeatable() {
    let expr = RPNExpr(vec![Token::Number(6), Token::Number(7), Token::BOp(BinOp::Mul)]);
    assert_eq!(expr.eval(), Ok(42));
    assert_eq!(expr.eval(), Ok(42));
}

#[test]
fn integer_power() {
    assert_eq!(int_pow(2, 0), Ok(1));
    assert_eq!(int_pow(0, 0), Ok(1));
    assert_eq!(int_pow(2, 10), Ok(1024));
    assert_eq!(int_pow(-3, 3), Ok(-27));
    assert_eq!(int_pow(10, 18), Ok(1_000_000_000_000_000_000));
    assert_eq!(int_pow(3, 39), Ok(4_052_555_153_018_976_267));
    assert_eq!(int_pow(2, -3), Ok(0));
    assert_eq!(int_pow(1, -3), Ok(1));
    assert_eq!(int_pow(-1, -3), Ok(-1));
    assert_eq!(int_pow(-1, -4), Ok(1));
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(eval_str("9223372036854775807+1"), Ok(i64::MIN));
    assert_eq!(eval_str("2^64"), Ok(0));
    assert_eq!(eval_str("2^63"), Ok(i64::MIN));
}
