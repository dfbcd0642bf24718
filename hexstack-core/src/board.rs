//! Hex board geometry with axial coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the standard board
pub const BOARD_CELLS: usize = 23;

/// Hex radius used for pixel projection
pub const HEX_SIZE: f32 = 50.0;

/// Pixel offset of the board center (q = 0, r = 0)
pub const BOARD_CENTER: PixelCoord = PixelCoord { x: 600.0, y: 300.0 };

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Check if this hex is one of the standard board cells
    pub fn is_on_board(&self) -> bool {
        BOARD_LAYOUT.contains(self)
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Hex {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        Hex::new(self.q + dq, self.r + dr)
    }

    /// All six neighbors in direction order. Some may lie off the board.
    pub fn neighbors(&self) -> [Hex; 6] {
        DIRECTIONS.map(|(dq, dr)| Hex::new(self.q + dq, self.r + dr))
    }

    /// Project the hex center to canvas pixels (flat-topped layout)
    pub fn to_pixel(&self) -> PixelCoord {
        let q = self.q as f32;
        let r = self.r as f32;
        let sqrt3 = 3.0f32.sqrt();
        PixelCoord {
            x: HEX_SIZE * (1.5 * q) + BOARD_CENTER.x,
            y: HEX_SIZE * (sqrt3 / 2.0 * q + sqrt3 * r) + BOARD_CENTER.y,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

/// Canvas position of a hex center
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelCoord {
    pub x: f32,
    pub y: f32,
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i8, i8); 6] = [
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // SE
];

/// The 23-cell board, column by column (5-4-5-4-5).
/// This order is the canonical iteration order for every grid scan.
pub static BOARD_LAYOUT: [Hex; BOARD_CELLS] = [
    // q = -2
    Hex::new(-2, -1), Hex::new(-2, 0), Hex::new(-2, 1), Hex::new(-2, 2), Hex::new(-2, 3),
    // q = -1
    Hex::new(-1, -1), Hex::new(-1, 0), Hex::new(-1, 1), Hex::new(-1, 2),
    // q = 0
    Hex::new(0, -2), Hex::new(0, -1), Hex::new(0, 0), Hex::new(0, 1), Hex::new(0, 2),
    // q = 1
    Hex::new(1, -2), Hex::new(1, -1), Hex::new(1, 0), Hex::new(1, 1),
    // q = 2
    Hex::new(2, -3), Hex::new(2, -2), Hex::new(2, -1), Hex::new(2, 0), Hex::new(2, 1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_layout_columns() {
        let mut columns: HashMap<i8, usize> = HashMap::new();
        for hex in BOARD_LAYOUT.iter() {
            *columns.entry(hex.q).or_default() += 1;
        }
        assert_eq!(columns[&-2], 5);
        assert_eq!(columns[&-1], 4);
        assert_eq!(columns[&0], 5);
        assert_eq!(columns[&1], 4);
        assert_eq!(columns[&2], 5);
    }

    #[test]
    fn test_layout_has_no_duplicates() {
        for (i, a) in BOARD_LAYOUT.iter().enumerate() {
            for b in &BOARD_LAYOUT[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_on_board() {
        assert!(Hex::new(0, 0).is_on_board());
        assert!(Hex::new(-2, 3).is_on_board());
        assert!(Hex::new(2, -3).is_on_board());
        assert!(!Hex::new(-2, -2).is_on_board());
        assert!(!Hex::new(3, 0).is_on_board());
    }

    #[test]
    fn test_neighbors_order() {
        let n = Hex::new(0, 0).neighbors();
        assert_eq!(
            n,
            [
                Hex::new(1, 0),
                Hex::new(1, -1),
                Hex::new(0, -1),
                Hex::new(-1, 0),
                Hex::new(-1, 1),
                Hex::new(0, 1),
            ]
        );
        assert_eq!(Hex::new(0, 0).neighbor(3), Hex::new(-1, 0));
        assert_eq!(Hex::new(0, 0).neighbor(9), Hex::new(-1, 0));
    }

    #[test]
    fn test_neighborhood_is_symmetric() {
        for hex in BOARD_LAYOUT.iter() {
            for n in hex.neighbors() {
                assert!(n.neighbors().contains(hex));
            }
        }
    }

    #[test]
    fn test_pixel_projection() {
        let center = Hex::new(0, 0).to_pixel();
        assert_eq!(center, BOARD_CENTER);

        let east = Hex::new(1, 0).to_pixel();
        assert!((east.x - 675.0).abs() < 1e-3);
        assert!((east.y - (300.0 + 25.0 * 3.0f32.sqrt())).abs() < 1e-3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hex::new(-2, 3).to_string(), "(-2,3)");
    }
}
