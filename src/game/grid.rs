use rand::Rng;
use std::fmt;
use std::num::NonZeroU16;

/// A position on the board, measured in cells from the top-left corner
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of the board.  The board wraps around on all four edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(super) width: u16,
    pub(super) height: u16,
}

impl Grid {
    pub(crate) fn new(width: NonZeroU16, height: NonZeroU16) -> Grid {
        Grid {
            width: width.get(),
            height: height.get(),
        }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// The cell at which a fresh snake starts
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Iterate over every cell of the board, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Pick a cell uniformly at random, occupied or not
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}
