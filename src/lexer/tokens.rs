use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("def", Token::Def);
        map.insert("extern", Token::Extern);
        map
    };
}

/// A single lexical unit.
///
/// Keywords and token classes are their own variants, so no ordinary
/// character can be confused with them.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    EndOfInput,
    Def,
    Extern,
    Identifier(String),
    Number(f64),
    /// Any other single character: operators, parentheses, `,` and `;`.
    Symbol(char),
}

impl Token {
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Token::Symbol(symbol) if *symbol == c)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::EndOfInput => write!(f, "end of input"),
            Token::Def => write!(f, "def"),
            Token::Extern => write!(f, "extern"),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Number(value) => write!(f, "{}", value),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}
