//! Binary cell state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// State of a single cell.
///
/// On the wire a cell is a JSON boolean: `true` is [`Cell::Alive`],
/// `false` is [`Cell::Dead`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Dead,
    /// Occupied cell.
    Alive,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_alive())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Cell::from)
    }
}
