use lifegrid_lib::{count_neighbours, update, Coord, Grid, ALIVE};
use proptest::prelude::*;

/// Grids up to 12x12, as rows of `0`s and `1`s.
fn grid_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1..12usize, 1..12usize).prop_flat_map(|(height, width)| {
        prop::collection::vec(prop::collection::vec(0..2u8, width), height)
    })
}

/// The neighbour count straight from its definition.
fn naive_count(rows: &[Vec<u8>], row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in -1..=1i64 {
        for dc in -1..=1i64 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r >= 0 && c >= 0 && (r as usize) < rows.len() && (c as usize) < rows[0].len() {
                count += rows[r as usize][c as usize];
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn neighbours_match_definition(rows in grid_rows()) {
        let grid = Grid::from_rows(&rows);
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                prop_assert_eq!(
                    count_neighbours(&grid, Coord::new(row, col)),
                    naive_count(&rows, row, col)
                );
            }
        }
    }

    #[test]
    fn update_follows_rule(rows in grid_rows()) {
        let grid = Grid::from_rows(&rows);
        let next = update(&grid);
        prop_assert_eq!((next.height(), next.width()), (grid.height(), grid.width()));
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let n = naive_count(&rows, row, col);
                let alive = rows[row][col] == 1;
                let expected = (alive && (n == 2 || n == 3)) || (!alive && n == 3);
                prop_assert_eq!(next.get(Coord::new(row, col)) == ALIVE, expected);
            }
        }
    }

    #[test]
    fn update_leaves_input_untouched(rows in grid_rows()) {
        let grid = Grid::from_rows(&rows);
        let copy = grid.clone();
        let _ = update(&grid);
        prop_assert_eq!(grid, copy);
    }
}
