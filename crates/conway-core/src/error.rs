//! Shape errors for board construction and admission.

use crate::CellAddr;
use std::error::Error;
use std::fmt;

/// A grid that does not describe a valid square board.
///
/// Boards are never coerced into shape: a wrong-sized grid is rejected,
/// not truncated or padded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Required length (the number of rows).
        expected: usize,
        /// Actual length of the row.
        found: usize,
    },
    /// The requested dimension exceeds [`MAX_DIM`](crate::MAX_DIM).
    DimensionTooLarge {
        /// The requested dimension.
        value: usize,
        /// The largest supported dimension.
        max: u32,
    },
    /// A cell address lies outside the board.
    AddrOutOfBounds {
        /// The offending address.
        addr: CellAddr,
        /// Dimension of the board.
        dim: u32,
    },
    /// The board is square but not the size this consumer accepts.
    DimensionMismatch {
        /// Dimension the consumer accepts.
        expected: u32,
        /// Dimension of the supplied board.
        found: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board must have at least one row"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::DimensionTooLarge { value, max } => {
                write!(f, "board dimension {value} exceeds maximum of {max}")
            }
            Self::AddrOutOfBounds { addr, dim } => {
                write!(f, "cell {addr} is outside a {dim}x{dim} board")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "expected a {expected}x{expected} board, got {found}x{found}")
            }
        }
    }
}

impl Error for BoardError {}
