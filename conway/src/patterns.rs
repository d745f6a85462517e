// patterns.rs - The stamped seed pattern and deterministic random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::GridBuffer;

/// A fixed set of alive cells, as (row, col) offsets from an anchor.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

/// Five-cell glider travelling down and to the right.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Sets every cell of `pattern` alive, anchored at (row, col) and wrapped
/// toroidally. Other cells are untouched.
pub(crate) fn stamp(grid: &mut GridBuffer, pattern: &Pattern, row: u32, col: u32) {
    let (width, height) = (grid.width() as u64, grid.height() as u64);
    for &(d_row, d_col) in pattern.cells {
        let r = ((row as u64 + d_row as u64) % height) as u32;
        let c = ((col as u64 + d_col as u64) % width) as u32;
        let idx = grid.index(r, c);
        grid.set(idx, true);
    }
}

/// Overwrites every cell with a pseudo-random state (~1/3 alive) derived
/// from `seed`. Same seed, same grid.
pub(crate) fn fill_random(grid: &mut GridBuffer, seed: u64) {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    for idx in 0..grid.len() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        grid.set(idx, (state >> 33) % 3 == 0);
    }
}
