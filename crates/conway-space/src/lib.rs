//! Toroidal grid topology.
//!
//! [`Torus`] describes a square N×N grid whose opposite edges are adjacent.
//! It owns the wraparound arithmetic and the 8-cell Moore neighbourhood that
//! the engine counts living neighbours over, plus canonical row-major
//! ordering of addresses.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;

pub use error::SpaceError;
pub use torus::{Torus, MOORE_OFFSETS};
