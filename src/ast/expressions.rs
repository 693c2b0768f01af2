use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Variable Expression
/// Represents a bare reference to a named value, as opposed to a call.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: char,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// Call Expression
/// Represents a call of a named function with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
}
