//! Board scoring

use crate::grid::{Cell, Grid};
use crate::regions::find_connected_groups;
use crate::tokens::TokenType;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// River points by length, up to six cells
const WATER_POINTS: [u32; 7] = [0, 0, 2, 5, 8, 11, 15];

/// Extra river points per cell beyond six
const WATER_POINTS_PER_EXTRA_CELL: u32 = 4;

/// Smallest field or mountain region that scores
const MIN_SCORING_GROUP: usize = 2;

const FIELD_GROUP_POINTS: u32 = 5;

/// Mountain cell points by number of mountain tokens in the cell
const MOUNTAIN_POINTS: [u32; 4] = [0, 1, 3, 7];

/// Tree points by number of brown tokens under it
const FOREST_POINTS: [u32; 3] = [1, 3, 7];

/// Distinct neighbor types a house needs to score
const HOUSE_MIN_NEIGHBOR_TYPES: u32 = 3;

const HOUSE_POINTS: u32 = 5;

// ============================================================================
// TYPES
// ============================================================================

/// Which terms count toward the total
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTerms {
    pub water: bool,
    pub field: bool,
    pub mountain: bool,
    pub forest: bool,
    pub house: bool,
}

impl ScoreTerms {
    pub const ALL: ScoreTerms = ScoreTerms {
        water: true,
        field: true,
        mountain: true,
        forest: true,
        house: true,
    };

    /// Water, field and mountain only (the earlier three-term total)
    pub const LEGACY: ScoreTerms = ScoreTerms {
        water: true,
        field: true,
        mountain: true,
        forest: false,
        house: false,
    };
}

impl Default for ScoreTerms {
    fn default() -> Self {
        Self::ALL
    }
}

/// Points per term
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub water: u32,
    pub field: u32,
    pub mountain: u32,
    pub forest: u32,
    pub house: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.total_with(ScoreTerms::ALL)
    }

    pub fn total_with(&self, terms: ScoreTerms) -> u32 {
        [
            (terms.water, self.water),
            (terms.field, self.field),
            (terms.mountain, self.mountain),
            (terms.forest, self.forest),
            (terms.house, self.house),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, points)| points)
        .sum()
    }
}

// ============================================================================
// TOTALS
// ============================================================================

/// Total score over all five terms
pub fn calculate_points(grid: &Grid) -> u32 {
    score_breakdown(grid).total()
}

/// Total score over the selected terms
pub fn calculate_points_with(grid: &Grid, terms: ScoreTerms) -> u32 {
    score_breakdown(grid).total_with(terms)
}

pub fn score_breakdown(grid: &Grid) -> ScoreBreakdown {
    ScoreBreakdown {
        water: water_points(grid),
        field: field_points(grid),
        mountain: mountain_points(grid),
        forest: forest_points(grid),
        house: house_points(grid),
    }
}

// ============================================================================
// TERMS
// ============================================================================

/// Points for a river of `len` cells
pub fn water_points_for_length(len: usize) -> u32 {
    match WATER_POINTS.get(len) {
        Some(&points) => points,
        None => {
            let extra = (len - (WATER_POINTS.len() - 1)) as u32;
            WATER_POINTS[WATER_POINTS.len() - 1] + WATER_POINTS_PER_EXTRA_CELL * extra
        }
    }
}

/// Only the longest river scores
pub fn water_points(grid: &Grid) -> u32 {
    let groups = find_connected_groups(grid, TokenType::Water);
    let longest = groups.iter().map(Vec::len).max().unwrap_or(0);
    let points = water_points_for_length(longest);

    if !groups.is_empty() {
        tracing::debug!(
            "Water: {} group(s), longest {} -> {} points",
            groups.len(),
            longest,
            points
        );
    }
    points
}

/// Flat points for every field region of two or more cells
pub fn field_points(grid: &Grid) -> u32 {
    let groups = find_connected_groups(grid, TokenType::Field);
    let scoring = groups.iter().filter(|g| g.len() >= MIN_SCORING_GROUP).count() as u32;
    let points = scoring * FIELD_GROUP_POINTS;

    if !groups.is_empty() {
        tracing::debug!(
            "Field: {} group(s), {} scoring -> {} points",
            groups.len(),
            scoring,
            points
        );
    }
    points
}

/// Each cell of a mountain range (two or more cells) scores by its own height
pub fn mountain_points(grid: &Grid) -> u32 {
    let points: u32 = find_connected_groups(grid, TokenType::Mountain)
        .iter()
        .filter(|g| g.len() >= MIN_SCORING_GROUP)
        .flatten()
        .map(|cell| mountain_cell_points(cell))
        .sum();

    tracing::debug!("Mountain: {} points", points);
    points
}

fn mountain_cell_points(cell: &Cell) -> u32 {
    let height = cell.count(TokenType::Mountain).min(MOUNTAIN_POINTS.len() - 1);
    MOUNTAIN_POINTS[height]
}

/// Each tree scores by the brown tokens beneath it in its own cell
pub fn forest_points(grid: &Grid) -> u32 {
    let points: u32 = grid
        .cells()
        .filter(|cell| cell.contains(TokenType::Tree))
        .map(|cell| {
            let browns = cell.count(TokenType::Brown).min(FOREST_POINTS.len() - 1);
            FOREST_POINTS[browns]
        })
        .sum();

    tracing::debug!("Forest: {} points", points);
    points
}

/// Each house scores if its neighbors hold enough distinct token types
pub fn house_points(grid: &Grid) -> u32 {
    let points = grid
        .cells()
        .filter(|cell| cell.contains(TokenType::House))
        .filter(|cell| neighbor_type_count(grid, cell) >= HOUSE_MIN_NEIGHBOR_TYPES)
        .count() as u32
        * HOUSE_POINTS;

    tracing::debug!("House: {} points", points);
    points
}

/// Distinct token types anywhere in the stacks around `cell`
fn neighbor_type_count(grid: &Grid, cell: &Cell) -> u32 {
    grid.neighbors(cell.hex())
        .flat_map(Cell::tokens)
        .fold(0u8, |seen, token| seen | token.kind.bit())
        .count_ones()
}
