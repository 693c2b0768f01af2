//! Lexical analysis module.
//!
//! This module contains the pull lexer that turns a character stream into
//! tokens, one per call. It handles:
//!
//! - Recognition of the `def` and `extern` keywords and of identifiers
//! - Permissive numeric literals made of digits and `.`
//! - `#` line comments and whitespace
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
