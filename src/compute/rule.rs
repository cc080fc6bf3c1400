//! Transition rule for Conway's Game of Life (B3/S23).

use super::{ALIVE, DEAD};

/// Next state of a cell given its current state and live-neighbor count.
///
/// - A live cell survives with 2 or 3 neighbors, otherwise dies.
/// - A dead cell is born with exactly 3 neighbors.
#[inline]
pub fn next_state(current: u8, neighbors: u8) -> u8 {
    match (current, neighbors) {
        (ALIVE, 2 | 3) => ALIVE,
        (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}
