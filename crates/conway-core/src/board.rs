//! The square board and its wire representation.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize, Serializer};

use crate::addr::CellAddr;
use crate::cell::Cell;
use crate::error::BoardError;

/// Dimension served when nothing else is configured.
pub const DEFAULT_DIM: u32 = 100;

/// Largest supported dimension.
///
/// Neighbour offsets are signed, so each axis must fit in `i32`.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// A complete N×N grid of cell states at a single generation.
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * dim + x`. A `Board` has no mutating methods. Every constructor
/// checks the shape, and successors are built into a fresh buffer with
/// [`rebuild`](Self::rebuild).
///
/// # Wire format
///
/// Serializes as a JSON array of `dim` rows, each an array of `dim`
/// booleans (`rows[y][x]`). Deserialization rejects empty and non-square
/// grids:
///
/// ```
/// use conway_core::Board;
///
/// let board: Board = serde_json::from_str("[[false,true],[true,false]]").unwrap();
/// assert_eq!(board.dim(), 2);
/// assert_eq!(board.population(), 2);
///
/// assert!(serde_json::from_str::<Board>("[[false,true],[true]]").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>")]
pub struct Board {
    dim: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// An all-dead board of the given dimension.
    pub fn dead(dim: u32) -> Result<Self, BoardError> {
        check_dim(dim as usize)?;
        let n = dim as usize;
        Ok(Self {
            dim,
            cells: vec![Cell::Dead; n * n],
        })
    }

    /// Build a board from row-major rows of booleans (`rows[y][x]`).
    ///
    /// Fails if there are no rows or any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        let n = rows.len();
        check_dim(n)?;
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            cells.extend(values.into_iter().map(Cell::from));
        }
        Ok(Self {
            dim: n as u32,
            cells,
        })
    }

    /// A board of the given dimension with exactly the listed cells alive.
    ///
    /// Duplicate addresses are harmless; an address outside the board is
    /// an error.
    pub fn from_alive(
        dim: u32,
        alive: impl IntoIterator<Item = CellAddr>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::dead(dim)?;
        for addr in alive {
            let i = board
                .index_of(addr)
                .ok_or(BoardError::AddrOutOfBounds { addr, dim })?;
            board.cells[i] = Cell::Alive;
        }
        Ok(board)
    }

    /// Build a fresh board of the same dimension, cell by cell.
    ///
    /// `f` is called once per address in row-major order. `self` is only
    /// borrowed, so `f` always observes the unmodified prior board.
    pub fn rebuild(&self, mut f: impl FnMut(CellAddr) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.dim {
            for x in 0..self.dim {
                cells.push(f(CellAddr::new(x, y)));
            }
        }
        Self {
            dim: self.dim,
            cells,
        }
    }

    /// Side length of the board.
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Total number of cells (`dim * dim`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// State of the cell at `addr`, or `None` if it lies outside the board.
    pub fn cell(&self, addr: CellAddr) -> Option<Cell> {
        self.index_of(addr).map(|i| self.cells[i])
    }

    /// Rows in order, each a slice of `dim` cells.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.dim as usize)
    }

    /// Copy the board out as row-major booleans.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.is_alive()).collect())
            .collect()
    }

    /// Addresses of all living cells, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = CellAddr> + '_ {
        let dim = self.dim as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| CellAddr::new((i % dim) as u32, (i / dim) as u32))
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Returns `true` if no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    fn index_of(&self, addr: CellAddr) -> Option<usize> {
        if addr.x >= self.dim || addr.y >= self.dim {
            return None;
        }
        Some(addr.y as usize * self.dim as usize + addr.x as usize)
    }
}

fn check_dim(dim: usize) -> Result<(), BoardError> {
    if dim == 0 {
        return Err(BoardError::Empty);
    }
    if dim > MAX_DIM as usize {
        return Err(BoardError::DimensionTooLarge {
            value: dim,
            max: MAX_DIM,
        });
    }
    Ok(())
}

impl Index<CellAddr> for Board {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `addr` lies outside the board.
    fn index(&self, addr: CellAddr) -> &Cell {
        match self.index_of(addr) {
            Some(i) => &self.cells[i],
            None => {
                let dim = self.dim;
                panic!("cell {addr} is outside a {dim}x{dim} board")
            }
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Plaintext rendering: one line per row, `#` alive, `.` dead.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("dim", &self.dim)
            .field("population", &self.population())
            .finish()
    }
}
