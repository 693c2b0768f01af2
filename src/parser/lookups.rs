use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::Token;

/// Precedence reported for anything that is not a binary operator.
pub const NO_PRECEDENCE: i32 = -1;

lazy_static! {
    static ref DEFAULT_BINOP_PRECEDENCE: BPLookup = {
        let mut map = HashMap::new();
        map.insert('<', 10);
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 40);
        map
    };
}

pub type BPLookup = HashMap<char, i32>;

/// Binding strength of each binary operator character; higher binds tighter.
///
/// The table is moved into a [`Parser`](super::parser::Parser) when it is
/// created and is read-only from then on, so new operators have to be added
/// before parsing starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    binding_power_lookup: BPLookup,
}

impl Default for PrecedenceTable {
    /// `<` 10, `+` 20, `-` 20, `*` 40.
    fn default() -> Self {
        PrecedenceTable {
            binding_power_lookup: DEFAULT_BINOP_PRECEDENCE.clone(),
        }
    }
}

impl PrecedenceTable {
    pub fn empty() -> Self {
        PrecedenceTable {
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Registers `op` as a binary operator, returning its previous precedence.
    pub fn insert(&mut self, op: char, precedence: i32) -> Option<i32> {
        self.binding_power_lookup.insert(op, precedence)
    }

    /// Precedence of `op`, or [`NO_PRECEDENCE`] when `op` is not a usable operator.
    ///
    /// Non-ASCII characters and entries that are not strictly positive count as
    /// absent.
    pub fn get(&self, op: char) -> i32 {
        if !op.is_ascii() {
            return NO_PRECEDENCE;
        }

        match self.binding_power_lookup.get(&op) {
            Some(&precedence) if precedence > 0 => precedence,
            _ => NO_PRECEDENCE,
        }
    }

    pub fn get_token_precedence(&self, token: &Token) -> i32 {
        match token {
            Token::Symbol(op) => self.get(*op),
            _ => NO_PRECEDENCE,
        }
    }
}
