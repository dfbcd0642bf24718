//! Board files - JSON snapshots of a grid's stacks

use crate::board::Hex;
use crate::grid::Grid;
use crate::tokens::{Token, TokenType};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One cell's stack, bottom first
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub q: i8,
    pub r: i8,
    pub tokens: Vec<TokenType>,
}

/// Named board. Cells not listed are empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub cells: Vec<CellSnapshot>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl BoardSnapshot {
    /// Capture the non-empty stacks of `grid`
    pub fn from_grid(name: &str, grid: &Grid) -> Self {
        let cells = grid
            .cells()
            .filter(|cell| !cell.is_empty())
            .map(|cell| CellSnapshot {
                q: cell.hex().q,
                r: cell.hex().r,
                tokens: cell.tokens().iter().map(|t| t.kind).collect(),
            })
            .collect();

        Self {
            name: name.to_string(),
            cells,
        }
    }

    /// Rebuild a standard grid, placing every token through the stacking rules
    pub fn to_grid(&self) -> anyhow::Result<Grid> {
        let mut grid = Grid::new();
        for cell in &self.cells {
            let hex = Hex::new(cell.q, cell.r);
            for (i, &kind) in cell.tokens.iter().enumerate() {
                let token = Token::new(kind, format!("{}_{}_{}_{}", kind, cell.q, cell.r, i));
                grid.place_token(hex, token)
                    .with_context(|| format!("Board '{}', token {} at {}", self.name, i + 1, hex))?;
            }
        }
        Ok(grid)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board file: {}", path.display()))?;
        Ok(snapshot)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write board file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlacementError;
    use crate::scoring::calculate_points;
    use TokenType::*;

    #[test]
    fn test_parse_board_json() {
        let json = r#"{
            "name": "river",
            "cells": [
                { "q": -2, "r": -1, "tokens": ["water"] },
                { "q": -2, "r": 0, "tokens": ["water"] },
                { "q": 0, "r": 0, "tokens": ["brown", "tree"] }
            ]
        }"#;
        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        let grid = snapshot.to_grid().unwrap();
        assert_eq!(calculate_points(&grid), 2 + 3);
        assert_eq!(grid.stack(Hex::new(0, 0)).unwrap()[0].id, "brown_0_0_0");
    }

    #[test]
    fn test_defaults() {
        let snapshot: BoardSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.name, "unnamed");
        assert!(snapshot.to_grid().unwrap().cells().all(|c| c.is_empty()));
    }

    #[test]
    fn test_unknown_token_type() {
        let json = r#"{ "cells": [ { "q": 0, "r": 0, "tokens": ["lava"] } ] }"#;
        assert!(serde_json::from_str::<BoardSnapshot>(json).is_err());
    }

    #[test]
    fn test_illegal_stack_rejected() {
        let snapshot = BoardSnapshot {
            name: "bad".into(),
            cells: vec![CellSnapshot {
                q: 0,
                r: 0,
                tokens: vec![Water, Tree],
            }],
        };
        let err = snapshot.to_grid().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlacementError>(),
            Some(PlacementError::IllegalStack { .. })
        ));
        assert!(format!("{:#}", err).contains("Board 'bad', token 2 at (0,0)"));
    }

    #[test]
    fn test_off_board_rejected() {
        let snapshot = BoardSnapshot {
            name: "bad".into(),
            cells: vec![CellSnapshot {
                q: 4,
                r: 4,
                tokens: vec![Field],
            }],
        };
        let err = snapshot.to_grid().unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlacementError>(),
            Some(&PlacementError::OffBoard(Hex::new(4, 4)))
        );
    }

    #[test]
    fn test_from_grid_keeps_stacks() {
        let grid = Grid::from_placements([
            (Hex::new(1, 1), Mountain),
            (Hex::new(1, 1), Mountain),
            (Hex::new(1, 1), House),
            (Hex::new(-2, 3), Field),
        ])
        .unwrap();
        let snapshot = BoardSnapshot::from_grid("peak", &grid);
        assert_eq!(snapshot.cells.len(), 2);
        // Scan order: column q = -2 comes first
        assert_eq!(snapshot.cells[0].tokens, [Field]);
        assert_eq!(snapshot.cells[1].tokens, [Mountain, Mountain, House]);

        let rebuilt = snapshot.to_grid().unwrap();
        assert_eq!(calculate_points(&rebuilt), calculate_points(&grid));
        assert_eq!(rebuilt.render(), grid.render());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("hexstack-snapshot-{}.json", std::process::id()));
        let grid = Grid::from_placements([(Hex::new(0, 0), Water), (Hex::new(1, 0), Water)]).unwrap();
        let snapshot = BoardSnapshot::from_grid("pair", &grid);

        snapshot.save(&path).unwrap();
        let loaded = BoardSnapshot::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BoardSnapshot::load(Path::new("/nonexistent/board.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read board file"));
    }
}
