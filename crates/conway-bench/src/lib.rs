//! Benchmark boards for the toroidal Game of Life engine.
//!
//! - [`reference_board`]: 100x100 (10K cells), the size the service serves
//! - [`stress_board`]: 316x316 (~100K cells)
//!
//! Both are seeded soups at [`SOUP_DENSITY`]% so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use conway::prelude::{Board, DEFAULT_DIM};
use conway_test_utils::soup;

/// Percentage of cells alive in a benchmark soup.
pub const SOUP_DENSITY: u32 = 35;

/// Side length of [`stress_board`].
pub const STRESS_DIM: u32 = 316;

/// A 100x100 random board.
pub fn reference_board(seed: u64) -> Board {
    soup(DEFAULT_DIM, seed, SOUP_DENSITY)
}

/// A 316x316 random board, ten times the cells of [`reference_board`].
pub fn stress_board(seed: u64) -> Board {
    soup(STRESS_DIM, seed, SOUP_DENSITY)
}
