//! Square N×N torus with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use conway_core::{Board, CellAddr, MAX_DIM};
use smallvec::SmallVec;

/// The 8 Moore offsets `(dx, dy)`, dx and dy in {-1, 0, 1}, excluding
/// `(0, 0)`, in lexicographic order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square grid whose opposite edges are adjacent.
///
/// Column `dim - 1` neighbours column 0 and row `dim - 1` neighbours row 0,
/// so there are no boundary cells: every address has exactly 8 neighbours.
/// On 1×1 and 2×2 grids some of those 8 coincide (with each other or with
/// the cell itself); they are still reported 8 times, once per offset.
///
/// ```
/// use conway_core::CellAddr;
/// use conway_space::Torus;
///
/// let t = Torus::new(100).unwrap();
/// let n = t.neighbours(CellAddr::new(0, 0));
/// assert_eq!(n.len(), 8);
/// assert!(n.contains(&CellAddr::new(99, 99)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    dim: u32,
}

impl Torus {
    /// Create a `dim`×`dim` torus.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `dim` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if it exceeds [`MAX_DIM`].
    pub fn new(dim: u32) -> Result<Self, SpaceError> {
        if dim == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if dim > MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                value: dim,
                max: MAX_DIM,
            });
        }
        Ok(Self { dim })
    }

    /// The torus a board lives on.
    ///
    /// Infallible: board construction already enforces `1..=MAX_DIM`.
    pub fn of(board: &Board) -> Self {
        Self { dim: board.dim() }
    }

    /// Side length.
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.dim as usize) * (self.dim as usize)
    }

    /// Returns `true` if `addr` lies on this torus.
    pub fn contains(&self, addr: CellAddr) -> bool {
        addr.x < self.dim && addr.y < self.dim
    }

    /// Wrap `coord + offset` onto `[0, dim)`.
    ///
    /// Equal to `(coord + offset + dim) mod dim` for in-range coordinates and
    /// unit offsets. Uses a Euclidean remainder, so the result is never
    /// negative whatever the sign of the intermediate sum.
    pub fn wrap(&self, coord: u32, offset: i32) -> u32 {
        let n = i64::from(self.dim);
        (i64::from(coord) + i64::from(offset)).rem_euclid(n) as u32
    }

    /// The address at `(dx, dy)` from `addr`, wrapped on both axes.
    pub fn offset(&self, addr: CellAddr, dx: i32, dy: i32) -> CellAddr {
        CellAddr::new(self.wrap(addr.x, dx), self.wrap(addr.y, dy))
    }

    /// The 8 Moore neighbours of `addr`, in [`MOORE_OFFSETS`] order.
    pub fn neighbours(&self, addr: CellAddr) -> SmallVec<[CellAddr; 8]> {
        MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.offset(addr, dx, dy))
            .collect()
    }

    /// Position of `addr` in row-major canonical order.
    pub fn rank(&self, addr: CellAddr) -> Option<usize> {
        if !self.contains(addr) {
            return None;
        }
        Some(addr.y as usize * self.dim as usize + addr.x as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn addr(&self, rank: usize) -> Option<CellAddr> {
        if rank >= self.cell_count() {
            return None;
        }
        let dim = self.dim as usize;
        Some(CellAddr::new((rank % dim) as u32, (rank / dim) as u32))
    }

    /// All addresses in row-major order: `(0,0), (1,0), ..., (dim-1, dim-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = CellAddr> {
        let dim = self.dim;
        (0..dim).flat_map(move |y| (0..dim).map(move |x| CellAddr::new(x, y)))
    }
}
