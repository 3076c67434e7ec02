//! Patterns, and inserting them into a grid.

use crate::{
    cells::{Coord, State},
    error::Error,
    grid::Grid,
    rle,
};
use std::{
    fmt::{self, Display, Formatter},
    ops::Range,
    path::Path,
    str::FromStr,
};

/// The largest number of cells a decoded pattern may declare.
pub const MAX_PATTERN_CELLS: usize = 1 << 28;

/// A rectangular block of cells decoded from an RLE file.
///
/// Unlike a [`Grid`], a pattern may have zero rows or columns,
/// but such a pattern can never be inserted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Grid,
}

impl Pattern {
    /// A dead pattern of the given shape.
    ///
    /// Fails with [`Error::MalformedHeader`] if the pattern would have more
    /// than [`MAX_PATTERN_CELLS`] cells, or if they cannot be allocated.
    pub(crate) fn try_new(height: usize, width: usize) -> Result<Self, Error> {
        height
            .checked_mul(width)
            .filter(|&len| len <= MAX_PATTERN_CELLS)
            .and_then(|_| Grid::try_with_shape(height, width))
            .map(|cells| Pattern { cells })
            .ok_or_else(|| {
                Error::MalformedHeader(format!(
                    "a {}x{} pattern is too large",
                    height, width
                ))
            })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// Gets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the pattern.
    #[inline]
    pub fn get(&self, coord: Coord) -> State {
        self.cells.get(coord)
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.rows()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.population()
    }

    /// The cells of the pattern, as a grid of the same shape.
    pub fn as_grid(&self) -> &Grid {
        &self.cells
    }

    /// Encodes the pattern in RLE.
    pub fn to_rle(&self) -> String {
        rle::encode(&self.cells)
    }

    /// Sets a run of cells in one row.
    pub(crate) fn fill(&mut self, row: usize, cols: Range<usize>, state: State) {
        self.cells.row_mut(row)[cols].fill(state);
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rle::decode_str(s)
    }
}

/// Displays the pattern in
/// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cells, f)
    }
}

impl Grid {
    /// Copies a pattern into the grid, with its top-left cell at `anchor`.
    ///
    /// Every cell of the pattern is copied, dead cells included.
    /// Fails if the pattern is empty, or does not fit in the grid at `anchor`;
    /// the grid is then left untouched.
    pub fn try_insert(&mut self, pattern: &Pattern, anchor: Coord) -> Result<(), Error> {
        let (height, width) = (pattern.height(), pattern.width());
        let fits = height > 0
            && width > 0
            && height <= self.height()
            && width <= self.width()
            && anchor.row <= self.height() - height
            && anchor.col <= self.width() - width;
        if !fits {
            return Err(Error::OversizedInsertion {
                pattern_height: height,
                pattern_width: width,
                grid_height: self.height(),
                grid_width: self.width(),
                anchor,
            });
        }
        for (i, row) in pattern.rows().enumerate() {
            let cols = anchor.col..anchor.col + width;
            self.row_mut(anchor.row + i)[cols].copy_from_slice(row);
        }
        Ok(())
    }

    /// Copies a pattern into the grid, with its top-left cell at `anchor`.
    ///
    /// Returns `false` and leaves the grid untouched if it does not fit.
    /// See [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, pattern: &Pattern, anchor: Coord) -> bool {
        self.try_insert(pattern, anchor).is_ok()
    }
}

/// Copies a pattern into a grid, with its top-left cell at `anchor`.
///
/// Same as [`Grid::insert`].
pub fn insert(pattern: &Pattern, grid: &mut Grid, anchor: Coord) -> bool {
    grid.insert(pattern, anchor)
}

/// Reads an RLE file and copies the pattern into the grid at `anchor`.
pub fn import_pattern<P: AsRef<Path>>(path: P, grid: &mut Grid, anchor: Coord) -> Result<(), Error> {
    let pattern = rle::decode_file(path)?;
    grid.try_insert(&pattern, anchor)
}
