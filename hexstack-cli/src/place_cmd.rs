//! Place command - put one token on a board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_or_empty(), apply_placement(), save_board()
//! - Level 3: scoring via score_cmd
//! - Level 4: argument definitions

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use hexstack_core::{BoardSnapshot, Grid, Hex, PlacementError, Token, TokenType};

use crate::score_cmd;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlaceArgs {
    /// Board JSON file (empty board if omitted)
    #[arg(long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Target column
    #[arg(long, allow_negative_numbers = true)]
    pub q: i8,

    /// Target row
    #[arg(long, allow_negative_numbers = true)]
    pub r: i8,

    /// Token type: tree, house, water, mountain, field or brown
    #[arg(long)]
    pub token: TokenType,

    /// Token id (defaults to the type name)
    #[arg(long)]
    pub id: Option<String>,

    /// Write the updated board here
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output the new score as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run place command
///
/// 1. Load the board (or start empty)
/// 2. Apply the placement; a rejected move is an error
/// 3. Save the board if requested
/// 4. Report the new score
pub fn run(args: PlaceArgs) -> Result<()> {
    let (name, mut grid) = load_or_empty(&args)?;

    let hex = Hex::new(args.q, args.r);
    let token = match &args.id {
        Some(id) => Token::new(args.token, id.as_str()),
        None => Token::of(args.token),
    };

    apply_placement(&mut grid, hex, token)
        .with_context(|| format!("Cannot place {} at {}", args.token, hex))?;

    tracing::info!("Placed {} at {}", args.token, hex);

    if let Some(path) = &args.output {
        save_board(&name, &grid, path)?;
    }

    let report = score_cmd::build_report(&name, &grid, score_cmd::select_terms(false));
    score_cmd::report_results(&report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_or_empty(args: &PlaceArgs) -> Result<(String, Grid)> {
    match &args.board {
        Some(path) => {
            let (snapshot, grid) = crate::load_board(path)?;
            Ok((snapshot.name, grid))
        }
        None => Ok(("unnamed".to_string(), Grid::new())),
    }
}

/// Place `token` at `hex`, leaving `grid` untouched on rejection
pub(crate) fn apply_placement(grid: &mut Grid, hex: Hex, token: Token) -> Result<(), PlacementError> {
    if let Err(err) = grid.place_token(hex, token) {
        tracing::warn!("{}", err);
        return Err(err);
    }
    Ok(())
}

fn save_board(name: &str, grid: &Grid, path: &Path) -> Result<()> {
    BoardSnapshot::from_grid(name, grid).save(path)?;
    tracing::info!("Saved board to {}", path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_legal_placement() {
        let mut grid = Grid::new();
        apply_placement(&mut grid, Hex::new(0, 0), Token::of(TokenType::Brown)).unwrap();
        apply_placement(&mut grid, Hex::new(0, 0), Token::of(TokenType::Tree)).unwrap();
        assert_eq!(grid.cell(Hex::new(0, 0)).unwrap().height(), 2);
    }

    #[test]
    fn test_apply_rejected_placement() {
        let mut grid = Grid::new();
        apply_placement(&mut grid, Hex::new(0, 0), Token::of(TokenType::Water)).unwrap();

        let err = apply_placement(&mut grid, Hex::new(0, 0), Token::of(TokenType::Tree)).unwrap_err();
        assert!(matches!(err, PlacementError::IllegalStack { .. }));

        let err = apply_placement(&mut grid, Hex::new(3, 3), Token::of(TokenType::Tree)).unwrap_err();
        assert_eq!(err, PlacementError::OffBoard(Hex::new(3, 3)));

        assert_eq!(grid.stats().total_tokens, 1);
    }
}
