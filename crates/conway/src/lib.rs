//! Conway's Game of Life on a fixed-size, edge-wrapping board.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! conway sub-crates. For most users, adding `conway` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use conway::prelude::*;
//!
//! // A horizontal blinker on the default 100×100 board.
//! let h = Board::from_alive(
//!     DEFAULT_DIM,
//!     [CellAddr::new(49, 50), CellAddr::new(50, 50), CellAddr::new(51, 50)],
//! )
//! .unwrap();
//!
//! let v = advance(&h);
//! assert_eq!(v[CellAddr::new(50, 49)], Cell::Alive);
//! assert_eq!(v[CellAddr::new(49, 50)], Cell::Dead);
//! assert_eq!(advance(&v), h);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `conway-core` | `Board`, `Cell`, `CellAddr`, shape errors, wire format |
//! | [`space`] | `conway-space` | Toroidal topology and wraparound arithmetic |
//! | [`engine`] | `conway-engine` | The B3/S23 rule, neighbour counting, `advance`, shape admission |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Board, cell, and address types (`conway-core`).
///
/// A [`types::Board`] serializes as a JSON array of rows of booleans and
/// rejects non-square input on deserialization.
pub use conway_core as types;

/// Toroidal topology (`conway-space`).
///
/// [`space::Torus`] wraps coordinates and enumerates the 8 Moore neighbours.
pub use conway_space as space;

/// Generation stepping (`conway-engine`).
pub use conway_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use conway::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use conway_core::{Board, Cell, CellAddr, DEFAULT_DIM};

    // Errors
    pub use conway_core::BoardError;
    pub use conway_engine::ConfigError;

    // Space
    pub use conway_space::Torus;

    // Engine
    pub use conway_engine::{advance, advance_n, living_neighbours, rule, BoardConfig};
}
