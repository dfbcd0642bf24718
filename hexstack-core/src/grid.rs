//! Grid state: per-cell token stacks and placement

use crate::board::{Hex, BOARD_LAYOUT};
use crate::error::PlacementError;
use crate::placement::can_place;
use crate::regions::find_connected_groups;
use crate::tokens::{Token, TokenType};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// CELL
// ============================================================================

/// One board cell and its stack (bottom to top)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    hex: Hex,
    tokens: Vec<Token>,
}

impl Cell {
    fn new(hex: Hex) -> Self {
        Self {
            hex,
            tokens: Vec::new(),
        }
    }

    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// Stack, bottom first
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn height(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn top(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// True if any token in the stack has this type
    pub fn contains(&self, kind: TokenType) -> bool {
        self.tokens.iter().any(|t| t.kind == kind)
    }

    /// Number of tokens of this type in the stack
    pub fn count(&self, kind: TokenType) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}

// ============================================================================
// GRID
// ============================================================================

/// Board state (clone to snapshot)
///
/// The set of cells is fixed at construction. Stacks only grow through
/// [`Grid::place_token`], which enforces the stacking rules.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Cell coordinates in canonical scan order
    layout: Vec<Hex>,
    cells: FxHashMap<Hex, Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty standard 23-cell board
    pub fn new() -> Self {
        Self::with_layout(BOARD_LAYOUT.iter().copied())
    }

    /// Empty board over an arbitrary set of cells. Duplicates are ignored.
    pub fn with_layout(layout: impl IntoIterator<Item = Hex>) -> Self {
        let mut order = Vec::new();
        let mut cells = FxHashMap::default();
        for hex in layout {
            if cells.insert(hex, Cell::new(hex)).is_none() {
                order.push(hex);
            }
        }
        Self {
            layout: order,
            cells,
        }
    }

    /// Standard board built from placements applied in order
    pub fn from_placements<I, T>(placements: I) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = (Hex, T)>,
        T: Into<Token>,
    {
        let mut grid = Self::new();
        for (hex, token) in placements {
            grid.place_token(hex, token.into())?;
        }
        Ok(grid)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Cell coordinates in scan order
    pub fn layout(&self) -> &[Hex] {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    pub fn cell(&self, hex: Hex) -> Option<&Cell> {
        self.cells.get(&hex)
    }

    /// Stack at `hex`, or `None` off the board
    pub fn stack(&self, hex: Hex) -> Option<&[Token]> {
        self.cells.get(&hex).map(Cell::tokens)
    }

    /// Cells in scan order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.layout.iter().filter_map(move |hex| self.cells.get(hex))
    }

    /// On-board neighbors of `hex`
    pub fn neighbors(&self, hex: Hex) -> impl Iterator<Item = &Cell> + '_ {
        hex.neighbors()
            .into_iter()
            .filter_map(move |n| self.cells.get(&n))
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Would a token of `kind` be legal at `hex`?
    pub fn can_place(&self, hex: Hex, kind: TokenType) -> bool {
        self.stack(hex).is_some_and(|stack| can_place(kind, stack))
    }

    /// Put `token` on top of the stack at `hex`
    pub fn place_token(&mut self, hex: Hex, token: Token) -> Result<(), PlacementError> {
        let cell = self.cells.get_mut(&hex).ok_or_else(|| {
            tracing::debug!("Rejected {} at {}: off board", token.kind, hex);
            PlacementError::OffBoard(hex)
        })?;

        if !can_place(token.kind, &cell.tokens) {
            tracing::debug!(
                "Rejected {} at {}: height {}",
                token.kind,
                hex,
                cell.height()
            );
            return Err(PlacementError::IllegalStack {
                token: token.kind,
                hex,
                height: cell.height(),
                top: cell.top().map(|t| t.kind),
            });
        }

        tracing::debug!("Placed {} at {} (height {})", token.kind, hex, cell.height() + 1);
        cell.tokens.push(token);
        Ok(())
    }

    /// Boolean form of [`Grid::place_token`]
    pub fn try_place(&mut self, hex: Hex, token: Token) -> bool {
        self.place_token(hex, token).is_ok()
    }

    /// Empty every stack
    pub fn clear(&mut self) {
        for cell in self.cells.values_mut() {
            cell.tokens.clear();
        }
    }

    /// Drop a random ground token on each empty cell with probability `density`.
    /// Returns the number of tokens placed.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;

        for hex in self.layout.clone() {
            if self.cells.get(&hex).map_or(true, |c| !c.is_empty()) {
                continue;
            }
            if rng.gen::<f64>() >= density {
                continue;
            }
            if let Some(&kind) = TokenType::GROUND.choose(rng) {
                let token = Token::new(kind, format!("random_{}_{}", hex.q, hex.r));
                if self.place_token(hex, token).is_ok() {
                    placed += 1;
                }
            }
        }

        placed
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    pub fn stats(&self) -> GridStats {
        let filled: Vec<&Cell> = self.cells().filter(|c| !c.is_empty()).collect();

        let mut token_counts = BTreeMap::new();
        for token in filled.iter().flat_map(|c| c.tokens()) {
            *token_counts.entry(token.kind).or_insert(0) += 1;
        }

        let total_tokens: usize = filled.iter().map(|c| c.height()).sum();
        let average = if filled.is_empty() {
            0.0
        } else {
            total_tokens as f32 / filled.len() as f32
        };

        GridStats {
            total_cells: self.len(),
            filled_cells: filled.len(),
            total_tokens,
            token_counts,
            stacked_cells: filled.iter().filter(|c| c.height() > 1).count(),
            max_stack_height: filled.iter().map(|c| c.height()).max().unwrap_or(0),
            average_stack_height: (average * 100.0).round() / 100.0,
        }
    }

    /// Text dump of every stack followed by the connected groups per type
    pub fn render(&self) -> String {
        let mut out = String::from("=== CELL DETAILS ===\n");

        for cell in self.cells() {
            let line = match cell.tokens() {
                [] => format!("{}: empty", cell.hex()),
                [only] => format!("{}: {}", cell.hex(), only.kind),
                stack => {
                    let names: Vec<&str> = stack.iter().map(|t| t.kind.name()).collect();
                    format!(
                        "{}: [{}] (height: {})",
                        cell.hex(),
                        names.join(" → "),
                        stack.len()
                    )
                }
            };
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str("\n=== CONNECTED GROUPS ===\n");
        for kind in TokenType::GROUND {
            let groups = find_connected_groups(self, kind);
            if groups.is_empty() {
                continue;
            }
            out.push_str(&format!("{}: {} group(s)\n", kind, groups.len()));
            for (i, group) in groups.iter().enumerate() {
                let coords: Vec<String> = group.iter().map(|c| c.hex().to_string()).collect();
                out.push_str(&format!(
                    "  Group {}: {} cells - {}\n",
                    i + 1,
                    group.len(),
                    coords.join(", ")
                ));
            }
        }

        out
    }
}

/// Summary counts for a grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridStats {
    pub total_cells: usize,
    pub filled_cells: usize,
    pub total_tokens: usize,
    pub token_counts: BTreeMap<TokenType, usize>,
    pub stacked_cells: usize,
    pub max_stack_height: usize,
    /// Mean height of non-empty stacks, two decimals
    pub average_stack_height: f32,
}
