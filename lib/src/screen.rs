//! Mapping pointer positions in pixels to cells.
//!
//! The grid is drawn with its top-left corner at pixel `(0, 0)`,
//! each cell being a square of `cell_size` pixels.

use crate::{
    cells::{Coord, State},
    grid::Grid,
    pattern::Pattern,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the screen, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    /// Horizontal position, growing to the right.
    pub x: i32,
    /// Vertical position, growing downwards.
    pub y: i32,
}

impl Pixel {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Pixel { x, y }
    }
}

/// The `(column, row)` of the cell under a pixel.
///
/// The result is not checked against any grid,
/// and may be negative.
///
/// # Panics
///
/// Panics if `cell_size` is zero.
pub fn pixel_to_grid(pos: Pixel, cell_size: u32) -> (i64, i64) {
    let size = i64::from(cell_size);
    (
        i64::from(pos.x).div_euclid(size),
        i64::from(pos.y).div_euclid(size),
    )
}

/// Whether a pixel lies on a grid of `width` by `height` cells.
///
/// The bounds are `0 < x <= width * cell_size` and `0 < y <= height * cell_size`,
/// so the pixels on the top and left edges are not on the grid.
pub fn is_on_grid(pos: Pixel, cell_size: u32, width: usize, height: usize) -> bool {
    let (x, y) = (i64::from(pos.x), i64::from(pos.y));
    match (extent(width, cell_size), extent(height, cell_size)) {
        (Some(max_x), Some(max_y)) => 0 < x && x <= max_x && 0 < y && y <= max_y,
        _ => false,
    }
}

/// `cells * cell_size`, or `None` if it does not fit into an `i64`.
fn extent(cells: usize, cell_size: u32) -> Option<i64> {
    i64::try_from(cells).ok()?.checked_mul(i64::from(cell_size))
}

/// Whether a pattern, with its top-left cell under `pos`,
/// lies on a grid of `width` by `height` cells.
pub fn is_pattern_on_grid(
    pattern: &Pattern,
    pos: Pixel,
    cell_size: u32,
    width: usize,
    height: usize,
) -> bool {
    if pattern.height() == 0 || pattern.width() == 0 {
        return false;
    }
    let far_edge = |start: i32, cells: usize| -> Option<i32> {
        extent(cells - 1, cell_size)?
            .checked_add(i64::from(start))
            .and_then(|end| i32::try_from(end).ok())
    };
    let corner = match (
        far_edge(pos.x, pattern.width()),
        far_edge(pos.y, pattern.height()),
    ) {
        (Some(x), Some(y)) => Pixel::new(x, y),
        _ => return false,
    };
    is_on_grid(pos, cell_size, width, height) && is_on_grid(corner, cell_size, width, height)
}

/// The cell under a pixel, if there is one.
pub fn pixel_to_coord(pos: Pixel, cell_size: u32, grid: &Grid) -> Option<Coord> {
    if !is_on_grid(pos, cell_size, grid.width(), grid.height()) {
        return None;
    }
    let (col, row) = pixel_to_grid(pos, cell_size);
    let coord = Coord::new(row as usize, col as usize);
    if grid.contains(coord) {
        Some(coord)
    } else {
        None
    }
}

/// Sets the cell under a pixel.
///
/// Returns `false` if there is no cell under the pixel.
pub fn paint(grid: &mut Grid, pos: Pixel, cell_size: u32, state: State) -> bool {
    match pixel_to_coord(pos, cell_size, grid) {
        Some(coord) => {
            grid.set(coord, state);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{ALIVE, DEAD};

    #[test]
    fn floor_division() {
        assert_eq!(pixel_to_grid(Pixel::new(3, 24), 10), (0, 2));
        assert_eq!(pixel_to_grid(Pixel::new(0, 0), 10), (0, 0));
        assert_eq!(pixel_to_grid(Pixel::new(10, 20), 10), (1, 2));
        assert_eq!(pixel_to_grid(Pixel::new(19, 29), 10), (1, 2));
        assert_eq!(pixel_to_grid(Pixel::new(7, 7), 1), (7, 7));
        assert_eq!(pixel_to_grid(Pixel::new(-1, -10), 10), (-1, -1));
        assert_eq!(pixel_to_grid(Pixel::new(-11, 5), 10), (-2, 0));
    }

    #[test]
    fn on_grid_bounds() {
        assert!(!is_on_grid(Pixel::new(0, 0), 10, 4, 3));
        assert!(!is_on_grid(Pixel::new(0, 5), 10, 4, 3));
        assert!(!is_on_grid(Pixel::new(5, 0), 10, 4, 3));
        assert!(is_on_grid(Pixel::new(1, 1), 10, 4, 3));
        assert!(is_on_grid(Pixel::new(40, 30), 10, 4, 3));
        assert!(!is_on_grid(Pixel::new(41, 30), 10, 4, 3));
        assert!(!is_on_grid(Pixel::new(40, 31), 10, 4, 3));
        assert!(!is_on_grid(Pixel::new(-5, 5), 10, 4, 3));
    }

    #[test]
    fn huge_grids() {
        assert!(is_on_grid(Pixel::new(i32::MAX, 1), u32::MAX, 1 << 20, 1));
        assert!(!is_on_grid(Pixel::new(1, 1), u32::MAX, usize::MAX, 1));
        assert!(!is_on_grid(Pixel::new(1, 1), 2, 1, usize::MAX));
    }

    #[test]
    fn pixel_to_cell() {
        let grid = Grid::new(3, 4);
        assert_eq!(pixel_to_coord(Pixel::new(25, 15), 10, &grid), Some(Coord::new(1, 2)));
        assert_eq!(pixel_to_coord(Pixel::new(39, 29), 10, &grid), Some(Coord::new(2, 3)));
        // On the grid by the pixel bounds, but past the last column.
        assert_eq!(pixel_to_coord(Pixel::new(40, 5), 10, &grid), None);
        assert_eq!(pixel_to_coord(Pixel::new(0, 0), 10, &grid), None);
    }

    #[test]
    fn paint_and_erase() {
        let mut grid = Grid::new(3, 4);
        assert!(paint(&mut grid, Pixel::new(25, 15), 10, ALIVE));
        assert_eq!(grid.get(Coord::new(1, 2)), ALIVE);
        assert!(!paint(&mut grid, Pixel::new(100, 15), 10, ALIVE));
        assert_eq!(grid.population(), 1);
        assert!(paint(&mut grid, Pixel::new(21, 11), 10, DEAD));
        assert!(grid.is_empty());
    }

    #[test]
    fn pattern_on_grid() -> Result<(), crate::Error> {
        let glider: Pattern = "x = 3, y = 3\nbo$2bo$3o!".parse()?;
        assert!(is_pattern_on_grid(&glider, Pixel::new(5, 5), 10, 4, 4));
        assert!(is_pattern_on_grid(&glider, Pixel::new(15, 15), 10, 4, 4));
        assert!(!is_pattern_on_grid(&glider, Pixel::new(25, 5), 10, 4, 4));
        assert!(!is_pattern_on_grid(&glider, Pixel::new(0, 5), 10, 4, 4));
        let wide: Pattern = "x = 3000000, y = 1\no!".parse()?;
        assert!(!is_pattern_on_grid(&wide, Pixel::new(5, 5), u32::MAX, usize::MAX, 4));
        let empty: Pattern = "x = 0, y = 0\n!".parse()?;
        assert!(!is_pattern_on_grid(&empty, Pixel::new(5, 5), 10, 4, 4));
        Ok(())
    }
}
