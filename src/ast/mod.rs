/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` sum type and its s-expression printer
/// - expressions: The node structs each `Expr` variant wraps
/// - statements: Prototypes, functions and the top-level result type
pub mod ast;
pub mod expressions;
pub mod statements;
