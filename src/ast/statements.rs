use std::fmt::Display;

use super::ast::Expr;

/// A function's name and parameter names, without a body.
///
/// Duplicate parameter names are accepted; rejecting them is left to whatever
/// consumes the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    /// The nameless, parameterless prototype wrapped around a bare expression.
    pub fn anonymous() -> Self {
        Prototype {
            name: String::new(),
            params: vec![],
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.params.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

/// One construct read by the top-level dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// `def name(params) body`
    Definition(Function),
    /// `extern name(params)`
    Extern(Prototype),
    /// A bare expression wrapped in an anonymous function.
    Expression(Function),
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) => {
                write!(f, "(def {} {})", function.prototype, function.body)
            }
            TopLevel::Extern(prototype) => write!(f, "(extern {})", prototype),
            TopLevel::Expression(function) => write!(f, "{}", function.body),
        }
    }
}
