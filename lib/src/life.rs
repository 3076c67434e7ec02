//! Conway's Game of Life, `B3/S23`, on a bounded grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    grid::Grid,
};

/// Counts the living cells among the (up to) eight neighbours of a cell.
///
/// Cells beyond the edges of the grid do not count.
///
/// # Panics
///
/// Panics if the cell is outside the grid.
pub fn count_neighbours(grid: &Grid, coord: Coord) -> u8 {
    let center = grid.get(coord);
    let rows = coord.row.saturating_sub(1)..(coord.row + 2).min(grid.height());
    let cols = coord.col.saturating_sub(1)..(coord.col + 2).min(grid.width());

    let mut count = 0;
    for row in rows {
        count += grid.row(row)[cols.clone()]
            .iter()
            .filter(|&&cell| cell == ALIVE)
            .count() as u8;
    }
    count - center.value()
}

/// The state of a cell in the next generation.
#[inline]
pub fn next_state(state: State, neighbours: u8) -> State {
    match (state, neighbours) {
        (ALIVE, 2) | (ALIVE, 3) | (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}

/// Computes the next generation.
///
/// Same as [`Grid::next_generation`].
pub fn update(grid: &Grid) -> Grid {
    grid.next_generation()
}

impl Grid {
    /// Computes the next generation.
    ///
    /// The new grid is computed entirely from `self`, which is left untouched.
    /// An empty grid stays empty, so it is returned as it is.
    pub fn next_generation(&self) -> Grid {
        if self.is_empty() {
            return self.clone();
        }
        let mut next = Grid::with_shape(self.height(), self.width());
        for row in 0..self.height() {
            for col in 0..self.width() {
                let coord = Coord::new(row, col);
                let state = next_state(self.get(coord), count_neighbours(self, coord));
                if state == ALIVE {
                    next.set(coord, ALIVE);
                }
            }
        }
        next
    }

    /// Replaces the grid with its next generation.
    pub fn step(&mut self) {
        if !self.is_empty() {
            *self = self.next_generation();
        }
    }
}
