//! Error types for topology construction.

use std::fmt;

/// Errors arising from [`Torus`](crate::Torus) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a torus with zero cells.
    EmptySpace,
    /// The dimension exceeds [`MAX_DIM`](conway_core::MAX_DIM).
    DimensionTooLarge {
        /// The requested dimension.
        value: u32,
        /// The largest supported dimension.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "dimension {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
