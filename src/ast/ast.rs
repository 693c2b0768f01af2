use std::{fmt::Display, mem};

use super::expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr};

/// Expression
///
/// Every node owns its children, so a parsed expression is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    pub fn binary(op: char, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.into(),
            args,
        })
    }
}

// Long operator chains build trees as deep as the input is long, so children
// are released from a worklist instead of by recursive drops.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut expr) = pending.pop() {
            pending.append(&mut expr.take_children());
        }
    }
}

impl Expr {
    fn take_children(&mut self) -> Vec<Expr> {
        match self {
            Expr::Binary(binary) => vec![
                mem::replace(binary.lhs.as_mut(), Expr::number(0.0)),
                mem::replace(binary.rhs.as_mut(), Expr::number(0.0)),
            ],
            Expr::Call(call) => mem::take(&mut call.args),
            _ => vec![],
        }
    }
}

/// Prints the expression as an s-expression: `(+ 1 (* 2 3))`, `(call foo 1 x)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
            Expr::Binary(binary) => write!(f, "({} {} {})", binary.op, binary.lhs, binary.rhs),
            Expr::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for arg in &call.args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
