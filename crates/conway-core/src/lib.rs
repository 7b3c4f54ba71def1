//! Core types for the toroidal Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model every other crate in the workspace speaks: cell states, cell
//! addresses, the square [`Board`], and the shape errors raised when a board
//! is built from caller-supplied data.
//!
//! A [`Board`] is immutable once constructed. Successor generations are
//! produced as fresh values; see [`Board::rebuild`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod addr;
pub mod board;
pub mod cell;
pub mod error;

pub use addr::CellAddr;
pub use board::{Board, DEFAULT_DIM, MAX_DIM};
pub use cell::Cell;
pub use error::BoardError;
