//! Token type definitions

use crate::error::ParseTokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a token. Only the kind takes part in stacking and scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Tree,
    House,
    Water,
    Mountain,
    Field,
    Brown,
}

impl TokenType {
    /// All token types, in display order
    pub const ALL: [TokenType; 6] = [
        TokenType::Tree,
        TokenType::House,
        TokenType::Water,
        TokenType::Mountain,
        TokenType::Field,
        TokenType::Brown,
    ];

    /// Types that may be dropped on bare ground by the random filler
    pub const GROUND: [TokenType; 5] = [
        TokenType::Water,
        TokenType::Tree,
        TokenType::Mountain,
        TokenType::Field,
        TokenType::House,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenType::Tree => "tree",
            TokenType::House => "house",
            TokenType::Water => "water",
            TokenType::Mountain => "mountain",
            TokenType::Field => "field",
            TokenType::Brown => "brown",
        }
    }

    /// Default display color
    pub fn color(self) -> &'static str {
        match self {
            TokenType::Tree => "#228B22",
            TokenType::House => "#CD853F",
            TokenType::Water => "#4682B4",
            TokenType::Mountain => "#708090",
            TokenType::Field => "#DAA520",
            TokenType::Brown => "#8B4513",
        }
    }

    /// Single-bit mask, used for small type sets
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenType {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        TokenType::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ParseTokenError(s.to_string()))
    }
}

/// A physical token. `id` and `color` are carried for the caller; rules ignore them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub color: String,
}

impl Token {
    pub fn new(kind: TokenType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            color: kind.color().to_string(),
        }
    }

    /// Token whose id is the type name
    pub fn of(kind: TokenType) -> Self {
        Self::new(kind, kind.name())
    }
}

impl From<TokenType> for Token {
    fn from(kind: TokenType) -> Self {
        Token::of(kind)
    }
}
