//! The Board Engine: advancing a toroidal Game of Life board one generation.
//!
//! [`advance`] is a pure function from a [`Board`](conway_core::Board) to
//! its successor. It holds no state between calls, takes no locks, and
//! cannot fail, so any number of callers may run it concurrently on
//! independent boards.
//!
//! [`BoardConfig`] is the admission check a transport applies to decoded
//! input before handing it to the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod rule;
pub mod step;

pub use config::{BoardConfig, ConfigError};
pub use rule::rule;
pub use step::{advance, advance_n, living_neighbours};
