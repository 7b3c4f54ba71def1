//! The B3/S23 transition rule.

use conway_core::Cell;

/// Next state of a cell from its current state and living-neighbour count.
///
/// - alive with 2 or 3 living neighbours: survives;
/// - dead with exactly 3: born;
/// - anything else: dead.
pub fn rule(current: Cell, living: u8) -> Cell {
    match (current, living) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // survival
        (Cell::Dead, 3) => Cell::Alive,                     // birth
        _ => Cell::Dead,                                    // death or stays dead
    }
}
