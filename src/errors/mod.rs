//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors the parser reports. It includes:
//!
//! - Error structures with source position information
//! - The two error variants: an unexpected token, and an incomplete construct
//!   wrapping the failure of a sub-parse
//! - Error formatting and suggestion tips

pub mod errors;
