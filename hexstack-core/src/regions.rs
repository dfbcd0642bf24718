//! Connected regions of cells sharing a token type

use crate::board::Hex;
use crate::grid::{Cell, Grid};
use crate::tokens::TokenType;
use rustc_hash::FxHashSet;

/// Cells of one region, in discovery order
pub type Region<'a> = Vec<&'a Cell>;

/// Partition the cells holding `kind` (anywhere in the stack) into maximal
/// hex-connected regions.
///
/// Regions come out in scan order of their first cell. Within a region cells
/// are in depth-first pre-order, neighbors taken in direction order.
pub fn find_connected_groups(grid: &Grid, kind: TokenType) -> Vec<Region<'_>> {
    let mut visited: FxHashSet<Hex> = FxHashSet::default();
    let mut groups = Vec::new();

    for &start in grid.layout() {
        if visited.contains(&start) {
            continue;
        }
        match grid.cell(start) {
            Some(cell) if cell.contains(kind) => {}
            _ => continue,
        }

        groups.push(explore(grid, start, kind, &mut visited));
    }

    groups
}

/// Depth-first walk from `start` with an explicit stack
fn explore<'a>(
    grid: &'a Grid,
    start: Hex,
    kind: TokenType,
    visited: &mut FxHashSet<Hex>,
) -> Region<'a> {
    let mut region = Vec::new();
    let mut pending = vec![start];

    while let Some(hex) = pending.pop() {
        if visited.contains(&hex) {
            continue;
        }
        let cell = match grid.cell(hex) {
            Some(cell) if cell.contains(kind) => cell,
            _ => continue,
        };

        visited.insert(hex);
        region.push(cell);

        // Reversed so the first direction is explored first
        for n in hex.neighbors().into_iter().rev() {
            if !visited.contains(&n) {
                pending.push(n);
            }
        }
    }

    region
}
