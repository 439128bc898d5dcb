use crate::parser::{precedence, RPNExpr};
use lexers::{Assoc, Token, UnOp};
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a Token),
    Node(&'a Token, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the queue isn't a single well formed expression
    fn build_ast(&self) -> Option<AST<'_>> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match token.arity()? {
                0 => ops.push(AST::Leaf(token)),
                arity => {
                    let n = ops.len().checked_sub(arity)?;
                    let operands = ops.split_off(n);
                    ops.push(AST::Node(token, operands));
                }
            }
        }
        let root = ops.pop()?;
        if ops.is_empty() { Some(root) } else { None }
    }

    /// Render back to infix using as few parenthesis as precedence allows.
    pub fn to_infix(&self) -> Option<String> {
        self.build_ast().map(|ast| printer(&ast).0)
    }
}

fn printer(root: &AST) -> (String, (usize, Assoc)) {
    match root {
        AST::Leaf(token) => (format!("{}", token), precedence(token)),
        AST::Node(token, args) => match **token {
            Token::UOp(UnOp::Neg) => {
                let subtree = printer(&args[0]);
                let (prec, assoc) = precedence(token);
                if prec > (subtree.1).0 {
                    (format!("-({})", subtree.0), (prec, assoc))
                } else {
                    (format!("-{}", subtree.0), (prec, assoc))
                }
            }
            Token::BOp(op) => {
                let (lhs, rhs) = (printer(&args[0]), printer(&args[1]));
                let (prec, assoc) = precedence(token);

                let lh = if prec > (lhs.1).0 || (prec == (lhs.1).0 && assoc != Assoc::Left) {
                    format!("({})", lhs.0)
                } else {
                    lhs.0
                };
                let rh = if prec > (rhs.1).0 || (prec == (rhs.1).0 && assoc != Assoc::Right) {
                    format!("({})", rhs.0)
                } else {
                    rhs.0
                };
                (format!("{} {} {}", lh, op.symbol(), rh), (prec, assoc))
            }
            // build_ast only makes nodes out of operators
            Token::Number(_) | Token::Paren(_) => unreachable!(),
        },
    }
}

/// Space separated rendering of a token queue, for diagnostics only.
pub fn dump_queue(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect::<Vec<String>>().join(" ")
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", dump_queue(&self.0))
    }
}

///////////////////////////////////////////////////////////////////////////////
