//! HEXSTACK Core - Stacking rules and scoring
//!
//! This crate provides the rules engine for the hex tile-stacking game:
//! - Board geometry (23-cell hex board with axial coordinates)
//! - Token types and stacking legality
//! - Grid state with rule-checked placement
//! - Connected regions per token type
//! - Scoring (rivers, fields, mountains, forests, houses)
//! - JSON board files

pub mod board;
pub mod error;
pub mod tokens;
pub mod placement;
pub mod grid;
pub mod regions;
pub mod scoring;
pub mod snapshot;

// Re-exports for convenient access
pub use board::{Hex, PixelCoord, BOARD_CELLS, BOARD_LAYOUT, DIRECTIONS};
pub use error::{ParseTokenError, PlacementError};
pub use tokens::{Token, TokenType};
pub use placement::{can_place, can_place_token, MAX_STACK_HEIGHT};
pub use grid::{Cell, Grid, GridStats};
pub use regions::{find_connected_groups, Region};
pub use scoring::{
    calculate_points, calculate_points_with, score_breakdown, ScoreBreakdown, ScoreTerms,
};
pub use snapshot::{BoardSnapshot, CellSnapshot};
