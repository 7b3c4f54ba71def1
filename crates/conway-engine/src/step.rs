//! Generation stepping.
//!
//! Every cell of the successor is computed from the unmodified prior board:
//! [`Board::rebuild`] writes into a fresh buffer while the input is only
//! borrowed, so no neighbour can be overwritten before it is read.

use conway_core::{Board, CellAddr};
use conway_space::{Torus, MOORE_OFFSETS};

use crate::rule::rule;

/// Number of living cells among the 8 Moore neighbours of `addr`, with
/// both coordinates wrapped as `(coord + offset + N) mod N`.
///
/// Always in `0..=8`. On 1×1 and 2×2 boards the same cell may be counted
/// more than once, once per offset that lands on it.
///
/// # Panics
///
/// Panics if `addr` lies outside the board.
pub fn living_neighbours(board: &Board, addr: CellAddr) -> u8 {
    let torus = Torus::of(board);
    assert!(torus.contains(addr), "cell {addr} is outside the board");
    count_living(board, &torus, addr)
}

/// `torus` is always `Torus::of(board)`; callers build it once per board.
fn count_living(board: &Board, torus: &Torus, addr: CellAddr) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| board[torus.offset(addr, dx, dy)].is_alive())
        .count() as u8
}

/// Advance `board` exactly one generation.
///
/// Total and pure: the same input always yields the same output, the input
/// is never modified, and the result has the same dimension.
///
/// ```
/// use conway_core::{Board, CellAddr};
/// use conway_engine::advance;
///
/// let lone = Board::from_alive(100, [CellAddr::new(50, 50)]).unwrap();
/// assert!(advance(&lone).is_extinct());
/// ```
pub fn advance(board: &Board) -> Board {
    let torus = Torus::of(board);
    board.rebuild(|addr| rule(board[addr], count_living(board, &torus, addr)))
}

/// Advance `board` by `generations` steps. Zero returns a copy.
pub fn advance_n(board: &Board, generations: u32) -> Board {
    let mut current = board.clone();
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}
