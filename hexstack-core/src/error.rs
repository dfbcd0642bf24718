//! Error types

use crate::board::Hex;
use crate::tokens::TokenType;

/// Why a placement was refused. The grid is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell {0} is not on the board")]
    OffBoard(Hex),

    #[error("cannot place {token} on {hex}: stack height {height}, top {top:?}")]
    IllegalStack {
        token: TokenType,
        hex: Hex,
        height: usize,
        top: Option<TokenType>,
    },
}

/// Unknown token type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token type: {0}")]
pub struct ParseTokenError(pub String);
