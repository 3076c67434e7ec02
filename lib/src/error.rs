//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Missing or invalid size declaration: {0}.
    MalformedHeader(String),
    /// A run of {count} cells starting at {coord} leaves the pattern.
    OutOfBoundsRun {
        /// The first cell of the run.
        coord: Coord,
        /// The length of the run.
        count: usize,
    },
    /// Unable to read the pattern source: {0}.
    UnreadableSource(#[from] io::Error),
    /// A {pattern_height}x{pattern_width} pattern does not fit into a {grid_height}x{grid_width} grid at {anchor}.
    OversizedInsertion {
        /// Height of the pattern.
        pattern_height: usize,
        /// Width of the pattern.
        pattern_width: usize,
        /// Height of the grid.
        grid_height: usize,
        /// Width of the grid.
        grid_width: usize,
        /// Where the top-left cell of the pattern would go.
        anchor: Coord,
    },
    /// Width and height should be positive.
    NonPositiveError,
}
