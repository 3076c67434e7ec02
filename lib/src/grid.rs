//! The grid.

use crate::cells::{Coord, State, ALIVE, DEAD};
use rand::{thread_rng, Rng};
use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
};

/// A fixed-size rectangular grid of cells.
///
/// Cells outside the grid do not exist: there is no wrap-around,
/// and accessing them is a bug in the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    height: usize,

    /// Number of columns.
    width: usize,

    /// All the cells, row by row.
    ///
    /// The length is always `height * width`.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "grid dimensions must be positive, got {}x{}",
            height,
            width
        );
        Grid::with_shape(height, width)
    }

    /// Creates a grid where every cell is independently alive or dead
    /// with equal probability.
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero.
    pub fn random(height: usize, width: usize) -> Self {
        Grid::random_with(height, width, &mut thread_rng())
    }

    /// Same as [`random`](Self::random), but with a given random number generator.
    pub fn random_with<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Self {
        let mut grid = Grid::new(height, width);
        for cell in grid.cells.iter_mut() {
            *cell = State::from(rng.gen::<bool>());
        }
        grid
    }

    /// Builds a grid from rows of `0`s and `1`s.
    ///
    /// Any nonzero value is a living cell.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, the rows are empty,
    /// or the rows have different lengths.
    pub fn from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Grid::new(height, width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "row {} has a different length", i);
            for (j, &value) in row.iter().enumerate() {
                grid.cells[i * width + j] = State::from(value != 0);
            }
        }
        grid
    }

    /// A dead grid which may have zero rows or columns.
    pub(crate) fn with_shape(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![DEAD; height * width].into_boxed_slice(),
        }
    }

    /// Like [`Grid::with_shape`], but returns `None` instead of panicking
    /// or aborting when `height * width` cells cannot be allocated.
    pub(crate) fn try_with_shape(height: usize, width: usize) -> Option<Self> {
        let len = height.checked_mul(width)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, DEAD);
        Some(Grid {
            height,
            width,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == DEAD)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    #[inline]
    fn offset(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "invalid coordinate {} for a {}x{} grid",
            coord,
            self.height,
            self.width
        );
        coord.row * self.width + coord.col
    }

    /// Gets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> State {
        self.cells[self.offset(coord)]
    }

    /// Gets the state of a cell, or `None` if it is outside the grid.
    #[inline]
    pub fn get_checked(&self, coord: Coord) -> Option<State> {
        if self.contains(coord) {
            Some(self.cells[coord.row * self.width + coord.col])
        } else {
            None
        }
    }

    /// Sets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Coord, state: State) {
        let offset = self.offset(coord);
        self.cells[offset] = state;
    }

    /// Flips the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn toggle(&mut self, coord: Coord) {
        let offset = self.offset(coord);
        self.cells[offset] = !self.cells[offset];
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        // `chunks_exact` rejects a zero chunk size.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// A row as a slice.
    pub(crate) fn row(&self, row: usize) -> &[State] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// A row as a mutable slice.
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [State] {
        &mut self.cells[row * self.width..(row + 1) * self.width]
    }
}

impl Index<Coord> for Grid {
    type Output = State;

    fn index(&self, coord: Coord) -> &State {
        &self.cells[self.offset(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut State {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }
}

/// Displays the grid in
/// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell == ALIVE { "o" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
