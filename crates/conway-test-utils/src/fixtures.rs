//! Reusable board fixtures.
//!
//! Pattern cells are `(dx, dy)` offsets from an origin. Placement wraps on
//! the torus, so a pattern stamped near an edge continues on the far side.

use conway_core::{Board, BoardError, CellAddr};
use conway_space::Torus;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A named set of live cells relative to an origin.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// 2×2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator, horizontal phase. Its centre is `(1, 0)`.
pub const BLINKER_H: Pattern = Pattern {
    name: "Blinker (horizontal)",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Vertical phase of [`BLINKER_H`] placed at the same origin.
pub const BLINKER_V: Pattern = Pattern {
    name: "Blinker (vertical)",
    cells: &[(1, -1), (1, 0), (1, 1)],
};

/// Moves one cell diagonally (+x, +y) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Three cells of a 2×2 square; the missing corner `(1, 1)` has exactly
/// three living neighbours.
pub const L_TROMINO: Pattern = Pattern {
    name: "L-tromino",
    cells: &[(0, 0), (1, 0), (0, 1)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER_H, BLINKER_V, GLIDER, L_TROMINO];

impl Pattern {
    /// Absolute addresses of this pattern at `origin` on `torus`.
    pub fn addrs(&self, torus: &Torus, origin: CellAddr) -> Vec<CellAddr> {
        self.cells
            .iter()
            .map(|&(dx, dy)| torus.offset(origin, dx, dy))
            .collect()
    }

    /// A `dim`×`dim` board holding only this pattern at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not a valid board dimension.
    pub fn place(&self, dim: u32, origin: (u32, u32)) -> Board {
        let torus = Torus::new(dim).expect("fixture dimension must be valid");
        Board::from_alive(dim, self.addrs(&torus, origin.into()))
            .expect("wrapped addresses are always on the board")
    }
}

/// A `dim`×`dim` board with exactly the listed `(x, y)` cells alive.
///
/// # Panics
///
/// Panics on an invalid dimension or an address outside the board.
pub fn board(dim: u32, alive: &[(u32, u32)]) -> Board {
    Board::from_alive(dim, alive.iter().map(|&xy| CellAddr::from(xy)))
        .expect("fixture cells must be on the board")
}

/// Read a plaintext board: one line per row, `#` or `O` alive, anything
/// else dead.
///
/// Surrounding whitespace on each line and blank leading or trailing lines
/// are ignored, so boards can be written as indented raw strings. The
/// result must be square.
pub fn parse_plaintext(text: &str) -> Result<Board, BoardError> {
    let rows: Vec<Vec<bool>> = text
        .trim()
        .lines()
        .map(|line| line.trim().chars().map(|c| c == '#' || c == 'O').collect())
        .collect();
    Board::from_rows(rows)
}

/// A random `dim`×`dim` board where each cell is alive with roughly
/// `density_percent`% probability. Same seed, same board.
pub fn soup(dim: u32, seed: u64, density_percent: u32) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = dim as usize;
    let rows = (0..n)
        .map(|_| (0..n).map(|_| rng.next_u32() % 100 < density_percent).collect())
        .collect();
    Board::from_rows(rows).expect("soup dimension must be valid")
}

/// Translate a board by `(dx, dy)` on its torus.
pub fn shift(board: &Board, dx: i32, dy: i32) -> Board {
    let torus = Torus::of(board);
    board.rebuild(|addr| board[torus.offset(addr, -dx, -dy)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_across_corner() {
        let b = BLOCK.place(10, (9, 9));
        let alive: Vec<_> = b.alive_cells().collect();
        assert_eq!(
            alive,
            vec![
                CellAddr::new(0, 0),
                CellAddr::new(9, 0),
                CellAddr::new(0, 9),
                CellAddr::new(9, 9),
            ]
        );
    }

    #[test]
    fn plaintext_reads_indented_rows() {
        let b = parse_plaintext(
            "
            ...
            ###
            ...
            ",
        )
        .unwrap();
        assert_eq!(b, BLINKER_H.place(3, (0, 1)));
    }

    #[test]
    fn plaintext_must_be_square() {
        assert!(parse_plaintext("..\n..\n..").is_err());
    }

    #[test]
    fn soup_is_seeded() {
        assert_eq!(soup(32, 7, 30), soup(32, 7, 30));
        assert_ne!(soup(32, 7, 30), soup(32, 8, 30));
        assert!(soup(32, 1, 0).is_extinct());
        assert_eq!(soup(32, 1, 100).population(), 32 * 32);
    }

    #[test]
    fn shift_moves_cells_with_wrap() {
        let b = board(5, &[(4, 4)]);
        assert_eq!(shift(&b, 1, 2), board(5, &[(0, 1)]));
    }
}
