//! Conway's Game of Life on a bounded grid,
//! with patterns imported from [RLE](https://conwaylife.com/wiki/Rle) files.
//!
//! ```
//! use lifegrid_lib::{Coord, Grid, Pattern};
//!
//! let glider: Pattern = "x = 3, y = 3\nbo$2bo$3o!".parse()?;
//! let mut grid = Grid::new(8, 8);
//! assert!(grid.insert(&glider, Coord::new(1, 1)));
//! for _ in 0..4 {
//!     grid = grid.next_generation();
//! }
//! let mut moved = Grid::new(8, 8);
//! moved.insert(&glider, Coord::new(2, 2));
//! assert_eq!(grid, moved);
//! # Ok::<(), lifegrid_lib::Error>(())
//! ```

mod cells;
mod config;
mod error;
mod grid;
mod life;
mod pattern;
pub mod rle;
pub mod screen;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Config, Init};
pub use error::Error;
pub use grid::Grid;
pub use life::{count_neighbours, next_state, update};
pub use pattern::{import_pattern, insert, Pattern, MAX_PATTERN_CELLS};
