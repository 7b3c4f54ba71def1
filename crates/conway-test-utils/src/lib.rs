//! Test utilities for the conway workspace.
//!
//! Provides well-known [`Pattern`]s that can be stamped anywhere on a torus
//! (including across its edges), a plaintext board reader, a seeded random
//! [`soup`], and a toroidal [`shift`] for translation checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    board, parse_plaintext, shift, soup, Pattern, BLINKER_H, BLINKER_V, BLOCK, GLIDER, L_TROMINO,
    PATTERNS,
};
