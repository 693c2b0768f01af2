use std::{iter::Fuse, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span};

use super::tokens::{Token, RESERVED_LOOKUP};

lazy_static! {
    // Longest prefix strtod would accept from a run of digits and dots.
    static ref NUMERAL_PREFIX: Regex = Regex::new(r"^[0-9]*(\.[0-9]*)?").unwrap();
}

type CharSource<'a> = Fuse<Box<dyn Iterator<Item = char> + 'a>>;

/// Pull lexer over a character stream.
///
/// Holds one buffered character between calls to [`Lexer::next_token`]. A
/// lexer is not reentrant: to lex several inputs at once, create one lexer per
/// input.
pub struct Lexer<'a> {
    source: CharSource<'a>,
    /// The character most recently read but not yet consumed. `None` once the
    /// source is exhausted.
    last_char: Option<char>,
    line: u32,
    column: u32,
    file: Rc<String>,
    token_span: Span,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer reading from any character iterator.
    ///
    /// `file` names the input in error positions and defaults to `shell`.
    pub fn new<I>(source: I, file: Option<String>) -> Lexer<'a>
    where
        I: Iterator<Item = char> + 'a,
    {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let source: Box<dyn Iterator<Item = char> + 'a> = Box::new(source);

        Lexer {
            source: source.fuse(),
            // A space, so the first call performs a real read before classifying.
            last_char: Some(' '),
            line: 1,
            column: 0,
            token_span: Span {
                start: Position::new(1, 0, Rc::clone(&file_name)),
                end: Position::new(1, 0, Rc::clone(&file_name)),
            },
            file: file_name,
        }
    }

    pub fn from_source(source: &'a str, file: Option<String>) -> Lexer<'a> {
        Lexer::new(source.chars(), file)
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Span of the token returned by the most recent call to `next_token`.
    pub fn token_span(&self) -> &Span {
        &self.token_span
    }

    /// Produces the next token. Once the input is exhausted every call returns
    /// `Token::EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.last_char, Some(c) if is_space(c)) {
                self.read_char();
            }

            let start = self.get_position();

            let token = match self.last_char {
                None => Token::EndOfInput,
                Some(c) if c.is_ascii_alphabetic() => self.lex_identifier(c),
                Some(c) if c.is_ascii_digit() || c == '.' => self.lex_number(c),
                Some('#') => {
                    self.skip_comment();
                    continue;
                }
                Some(c) => {
                    self.read_char();
                    Token::Symbol(c)
                }
            };

            self.token_span = Span {
                start,
                end: self.get_position(),
            };

            return token;
        }
    }

    fn get_position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    fn read_char(&mut self) {
        if self.last_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.last_char = self.source.next();
    }

    fn lex_identifier(&mut self, first: char) -> Token {
        let mut identifier = String::from(first);
        self.read_char();

        while let Some(c) = self.last_char.filter(char::is_ascii_alphanumeric) {
            identifier.push(c);
            self.read_char();
        }

        match RESERVED_LOOKUP.get(identifier.as_str()) {
            Some(keyword) => keyword.clone(),
            None => Token::Identifier(identifier),
        }
    }

    fn lex_number(&mut self, first: char) -> Token {
        let mut numeral = String::from(first);
        self.read_char();

        while let Some(c) = self.last_char.filter(|c| c.is_ascii_digit() || *c == '.') {
            numeral.push(c);
            self.read_char();
        }

        Token::Number(parse_numeral(&numeral))
    }

    fn skip_comment(&mut self) {
        loop {
            self.read_char();
            match self.last_char {
                None | Some('\n') | Some('\r') => break,
                _ => {}
            }
        }
    }
}

/// C `isspace`: also covers vertical tab, which `char::is_ascii_whitespace` does not.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Converts a run of digits and dots the way `strtod` does.
///
/// Only the leading `digits [. digits]` part counts, anything after a second
/// dot is ignored, and a run with no digits in that prefix is `0.0`.
pub fn parse_numeral(numeral: &str) -> f64 {
    let prefix = NUMERAL_PREFIX
        .find(numeral)
        .map(|matched| matched.as_str())
        .unwrap_or("");

    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return 0.0;
    }

    prefix.parse().unwrap_or(0.0)
}

/// Lexes all of `source`, including the final `Token::EndOfInput`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<(Token, Span)> {
    let mut lexer = Lexer::from_source(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let at_end = token == Token::EndOfInput;
        tokens.push((token, lexer.token_span().clone()));

        if at_end {
            return tokens;
        }
    }
}
