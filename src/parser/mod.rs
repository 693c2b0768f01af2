//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds expressions, prototypes and functions.
//! Binary expressions use operator-precedence climbing driven by a
//! per-parser precedence table. It handles:
//!
//! - Top-level dispatch over definitions, extern declarations and bare
//!   expressions, with one-token error recovery
//! - Expression parsing (binary ops, calls, variables, numbers, grouping)
//! - Prototype parsing for `def` and `extern`
//!
//! A `Parser` owns its lexer and all of its state. Only one parse session may
//! use a given parser at a time; independent inputs need independent parsers.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
