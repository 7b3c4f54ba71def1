//! Cell addresses.

use std::fmt;

/// Address of a cell on a square board: `x` is the column, `y` the row.
///
/// Addresses are plain coordinates. Whether an address is inside a given
/// board is checked by the board (or topology) it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddr {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl CellAddr {
    /// Build an address from a column and a row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for CellAddr {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
