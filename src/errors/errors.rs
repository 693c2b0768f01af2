use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// A syntax error together with the span of the token it was raised at.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    /// Shorthand for an `UnexpectedToken` error carrying one of the canonical messages.
    pub fn unexpected(message: &str, token: String, span: Span) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                message: String::from(message),
                token,
            },
            span,
        )
    }

    /// Marks this error as having been raised inside a sub-parse.
    ///
    /// The message and position are kept; only the error kind changes, and
    /// wrapping twice is a no-op.
    pub fn into_incomplete(self) -> Self {
        match self.internal_error {
            ErrorImpl::IncompleteConstruct { .. } => self,
            inner => Error {
                internal_error: ErrorImpl::IncompleteConstruct {
                    inner: Box::new(inner),
                },
                span: self.span,
            },
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The canonical human-readable message, e.g. `Expected ')' in prototype`.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::IncompleteConstruct { .. } => "IncompleteConstruct",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.internal_error.get_tip()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.internal_error {
            ErrorImpl::IncompleteConstruct { inner } => Some(inner.as_ref()),
            _ => None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{message}")]
    UnexpectedToken { message: String, token: String },
    #[error("{inner}")]
    IncompleteConstruct { inner: Box<ErrorImpl> },
}

impl ErrorImpl {
    fn get_tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::UnexpectedToken { message, token } => {
                ErrorTip::Suggestion(format!("{}, found `{}`", message, token))
            }
            ErrorImpl::IncompleteConstruct { inner } => inner.get_tip(),
        }
    }
}
