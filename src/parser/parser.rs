//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, the top-level dispatch and the
//! whole-input `parse` entry point. Production functions live in `expr` and
//! `stmt` and take the parser by mutable reference.

use crate::{
    ast::statements::TopLevel,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token},
    Span,
};

use super::{
    expr::parse_top_level_expr,
    lookups::PrecedenceTable,
    stmt::{parse_definition, parse_extern},
};

/// How many parentheses and call argument lists may enclose one another.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Holds exactly one token of lookahead. The lookahead starts out as
/// `EndOfInput`; call [`Parser::advance`] once to prime it before parsing.
pub struct Parser<'a> {
    /// Source of tokens
    lexer: Lexer<'a>,
    /// The lookahead token
    current: Token,
    /// Where the lookahead token sits in the input
    current_span: Span,
    /// Binary operator precedences, fixed for the life of the parser
    precedence: PrecedenceTable,
    /// Parentheses and argument lists currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from
    /// * `precedence` - Binary operator table; use `PrecedenceTable::default()`
    ///   for the standard operators
    pub fn new(lexer: Lexer<'a>, precedence: PrecedenceTable) -> Self {
        Parser {
            lexer,
            current: Token::EndOfInput,
            current_span: Span::null(),
            precedence,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_span(&self) -> &Span {
        &self.current_span
    }

    /// Reads the next token into the lookahead and returns it.
    pub fn advance(&mut self) -> &Token {
        self.current = self.lexer.next_token();
        self.current_span = self.lexer.token_span().clone();
        &self.current
    }

    /// Builds an `UnexpectedToken` error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::unexpected(
            message,
            self.current.to_string(),
            self.current_span.clone(),
        )
    }

    /// Requires the current token to be `Symbol(symbol)` and advances past it.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) if the current token matches, otherwise an error carrying `message`.
    pub fn expect_symbol(&mut self, symbol: char, message: &str) -> Result<(), Error> {
        if !self.current.is_symbol(symbol) {
            return Err(self.unexpected(message));
        }

        self.advance();
        Ok(())
    }

    /// Precedence of the current token, `-1` unless it is a known binary operator.
    pub fn get_token_precedence(&self) -> i32 {
        self.precedence.get_token_precedence(&self.current)
    }

    pub fn get_precedence_table(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails at the current token once [`MAX_NESTING_DEPTH`] levels are open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected("Expression nested too deeply"));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    /// Parses the next top-level construct.
    ///
    /// Skips `;` empty statements and returns `None` at end of input. When a
    /// construct fails, the token the failure was detected at is skipped
    /// before the error is returned, so calling again resumes after it.
    pub fn parse_top_level(&mut self) -> Option<Result<TopLevel, Error>> {
        loop {
            let result = match self.current_token() {
                Token::EndOfInput => return None,
                Token::Symbol(';') => {
                    self.advance();
                    continue;
                }
                Token::Def => parse_definition(self).map(TopLevel::Definition),
                Token::Extern => parse_extern(self).map(TopLevel::Extern),
                _ => parse_top_level_expr(self).map(TopLevel::Expression),
            };

            if result.is_err() {
                self.advance();
            }

            return Some(result);
        }
    }
}

/// Parses all of `source` with the default operator table.
///
/// # Returns
///
/// A tuple containing:
/// - Every top-level construct that parsed, in input order
/// - Every error encountered, in input order
pub fn parse(source: &str, file: Option<String>) -> (Vec<TopLevel>, Vec<Error>) {
    parse_with_precedence(source, file, PrecedenceTable::default())
}

/// Parses all of `source` with a caller-supplied operator table.
pub fn parse_with_precedence(
    source: &str,
    file: Option<String>,
    precedence: PrecedenceTable,
) -> (Vec<TopLevel>, Vec<Error>) {
    let mut parser = Parser::new(Lexer::from_source(source, file), precedence);
    parser.advance();

    let mut body = vec![];
    let mut errors = vec![];

    while let Some(result) = parser.parse_top_level() {
        match result {
            Ok(top_level) => body.push(top_level),
            Err(error) => errors.push(error),
        }
    }

    (body, errors)
}
