//! Moore neighborhood counting with a fixed (non-wrapping) boundary.
//!
//! Positions outside the grid are permanently dead. Edge cells therefore see
//! fewer neighbors than interior ones: corners examine 3, other edge cells 5.

use super::{ALIVE, Grid};

/// Offsets of the 8 compass neighbors: NW, N, NE, E, SE, S, SW, W.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Resolve a neighbor position, or `None` if it falls off the grid.
#[inline]
fn neighbor_at(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    (dx, dy): (isize, isize),
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < width && ny < height).then_some((nx, ny))
}

/// Count live neighbors of (x, y), in `[0, 8]`.
#[inline]
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = (grid.width(), grid.height());
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&offset| neighbor_at(width, height, x, y, offset))
        .filter(|&(nx, ny)| grid.get(nx, ny) == ALIVE)
        .count() as u8
}

/// Number of in-range neighbor positions for (x, y).
pub fn examined_neighbors(width: usize, height: usize, x: usize, y: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&offset| neighbor_at(width, height, x, y, offset))
        .count()
}
