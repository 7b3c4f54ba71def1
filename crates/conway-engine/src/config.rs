//! Board shape configuration and admission.
//!
//! [`BoardConfig`] fixes the dimension a consumer accepts.
//! [`validate()`](BoardConfig::validate) checks the configuration itself at
//! startup; [`admit()`](BoardConfig::admit) checks each decoded board
//! before it reaches [`advance`](crate::advance).

use std::error::Error;
use std::fmt;

use conway_core::{Board, BoardError, DEFAULT_DIM, MAX_DIM};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BoardConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Dimension is zero.
    EmptyBoard,
    /// Dimension exceeds [`MAX_DIM`].
    DimensionTooLarge {
        /// The configured dimension.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board dimension must be at least 1"),
            Self::DimensionTooLarge { value } => {
                write!(f, "board dimension {value} exceeds maximum of {MAX_DIM}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── BoardConfig ────────────────────────────────────────────────────

/// The board shape a service accepts: `dim`×`dim`, fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Side length. Default: [`DEFAULT_DIM`] (100).
    pub dim: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { dim: DEFAULT_DIM }
    }
}

impl BoardConfig {
    /// Validate the configured dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dim == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.dim > MAX_DIM {
            return Err(ConfigError::DimensionTooLarge { value: self.dim });
        }
        Ok(())
    }

    /// Accept `board` if it has the configured dimension.
    ///
    /// A board of any other size is rejected, never resized.
    pub fn admit(&self, board: Board) -> Result<Board, BoardError> {
        if board.dim() != self.dim {
            return Err(BoardError::DimensionMismatch {
                expected: self.dim,
                found: board.dim(),
            });
        }
        Ok(board)
    }
}
