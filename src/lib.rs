#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

extern crate regex;

/// A location in the input, 1-based line and column.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The characters a token covers. `end` is the position just past the last character.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Returns the text of the line `position` points into, without its line terminator.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<String> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((position.line - 1) as usize)
        .map(|line| line.trim_end_matches('\r').to_string())
}


/// Prints the report built by [`format_error`] to stderr.
pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", format_error(error, source));
}

/// Builds a caret-style report for `error`.
///
/// When `source` is available the offending line is echoed with a marker under
/// the token that caused the failure.
pub fn format_error(error: &Error, source: Option<&str>) -> String {
    /*
        Error: UnexpectedToken (unexpected token `(`, ...)
        -> test.k:1:5
          |
        1 | def (
          | ----^
    */

    let span = error.get_span();
    let position = &span.start;
    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    report.push_str(&format!("-> {}\n", position));

    let Some(line_text) = source.and_then(|source| get_line_at_position(source, position)) else {
        return report;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    let width = if span.end.line == position.line && span.end.column > position.column {
        (span.end.column - position.column) as usize
    } else {
        1
    };

    report.push_str(&format!("{:>padding$} {:->arrows$}{}\n", "|", "^", "^".repeat(width - 1)));

    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
