//! Reading and writing patterns in the
//! [RLE](https://conwaylife.com/wiki/Rle) format.
//!
//! Only the subset used for two-state patterns is supported:
//!
//! ```plaintext
//! #C Comment lines start with `#`.
//! x = 3, y = 3
//! bob$2bo$3o!
//! ```
//!
//! * `b` is a run of dead cells;
//! * `o` is a run of living cells;
//! * `$` ends a row. A count before `$` is ignored:
//!   each `$` moves down exactly one row;
//! * `!` ends the pattern.
//!
//! A run may be preceded by a count. Any other character is ignored.
//!
//! A header declaring more than [`MAX_PATTERN_CELLS`](crate::MAX_PATTERN_CELLS)
//! cells is rejected as malformed.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
    grid::Grid,
    pattern::Pattern,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    iter,
    ops::Range,
    path::Path,
};

/// Maximal length of a line of encoded cells.
const MAX_LINE_LEN: usize = 70;

/// Whether to go on after reading a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading.
    Continue,
    /// The end of the pattern (`!`) has been reached.
    Stop,
}

/// The position of the decoder in the pattern.
///
/// It is carried from one line to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RleState {
    /// The current row.
    pub row: usize,
    /// The current column.
    pub col: usize,
    /// The digits of the count before the next run.
    pub digits: String,
}

impl RleState {
    /// The state at the beginning of a pattern.
    pub fn new() -> Self {
        RleState::default()
    }

    /// Takes the pending count, which is `1` when there are no digits.
    fn take_count(&mut self) -> Result<usize, Error> {
        let count = if self.digits.is_empty() {
            Ok(1)
        } else {
            self.digits.parse().map_err(|_| Error::OutOfBoundsRun {
                coord: Coord::new(self.row, self.col),
                count: usize::MAX,
            })
        };
        self.digits.clear();
        count
    }

    /// Takes the pending count and advances over a run of that many cells
    /// in the current row.
    ///
    /// Returns the columns of the run.
    fn run(&mut self, pattern: &Pattern) -> Result<Range<usize>, Error> {
        let count = self.take_count()?;
        let start = self.col;
        if count == 0 {
            return Ok(start..start);
        }
        match start.checked_add(count) {
            Some(end) if self.row < pattern.height() && end <= pattern.width() => {
                self.col = end;
                Ok(start..end)
            }
            _ => Err(Error::OutOfBoundsRun {
                coord: Coord::new(self.row, start),
                count,
            }),
        }
    }

    /// Reads one character of the encoded cells.
    pub fn step(&mut self, c: char, pattern: &mut Pattern) -> Result<Flow, Error> {
        match c {
            '0'..='9' => self.digits.push(c),
            'b' => {
                self.run(pattern)?;
            }
            'o' => {
                let cols = self.run(pattern)?;
                pattern.fill(self.row, cols, ALIVE);
            }
            '$' => {
                self.row += 1;
                self.col = 0;
                self.digits.clear();
            }
            '!' => return Ok(Flow::Stop),
            _ => (),
        }
        Ok(Flow::Continue)
    }

    /// Reads a line of encoded cells.
    ///
    /// Stops at `!`, ignoring the rest of the line.
    pub fn step_line(&mut self, line: &str, pattern: &mut Pattern) -> Result<Flow, Error> {
        for c in line.chars() {
            if self.step(c, pattern)? == Flow::Stop {
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }
}

/// Parses a header line like `x = 3, y = 3, rule = B3/S23`.
///
/// Returns `(height, width)`. Keys other than `x` and `y` are ignored.
pub fn parse_header(line: &str) -> Result<(usize, usize), Error> {
    let malformed = || Error::MalformedHeader(line.trim().to_owned());
    let mut width = None;
    let mut height = None;
    for item in line.split(',').filter(|item| !item.trim().is_empty()) {
        let (key, value) = item.split_once('=').ok_or_else(malformed)?;
        let slot = match key.trim().to_ascii_lowercase().as_str() {
            "x" => &mut width,
            "y" => &mut height,
            _ => continue,
        };
        if slot.is_some() {
            return Err(malformed());
        }
        *slot = Some(value.trim().parse::<usize>().map_err(|_| malformed())?);
    }
    match (height, width) {
        (Some(height), Some(width)) => Ok((height, width)),
        _ => Err(malformed()),
    }
}

/// An RLE decoder, fed one line at a time.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// The pattern, allocated when the header is read.
    pattern: Option<Pattern>,
    state: RleState,
    done: bool,
}

impl Decoder {
    /// A decoder which has not read anything.
    pub fn new() -> Self {
        Decoder::default()
    }

    /// Whether the end of the pattern (`!`) has been read.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reads a line.
    pub fn read_line(&mut self, line: &str) -> Result<(), Error> {
        if self.done || line.starts_with('#') {
            return Ok(());
        }
        if line.trim_start().starts_with(|c: char| c.eq_ignore_ascii_case(&'x')) {
            if self.pattern.is_some() {
                return Err(Error::MalformedHeader(format!(
                    "second header line {:?}",
                    line.trim()
                )));
            }
            let (height, width) = parse_header(line)?;
            self.pattern = Some(Pattern::try_new(height, width)?);
            return Ok(());
        }
        match &mut self.pattern {
            Some(pattern) => {
                if self.state.step_line(line, pattern)? == Flow::Stop {
                    self.done = true;
                }
                Ok(())
            }
            None if line.trim().is_empty() => Ok(()),
            None => Err(Error::MalformedHeader(format!(
                "cells {:?} before the header line",
                line.trim()
            ))),
        }
    }

    /// Finishes decoding. Fails if there was no header line.
    pub fn finish(self) -> Result<Pattern, Error> {
        self.pattern
            .ok_or_else(|| Error::MalformedHeader(String::from("no header line")))
    }
}

/// Decodes a pattern from a reader.
pub fn decode<R: BufRead>(reader: R) -> Result<Pattern, Error> {
    let mut decoder = Decoder::new();
    for line in reader.lines() {
        decoder.read_line(&line?)?;
        if decoder.is_done() {
            break;
        }
    }
    decoder.finish()
}

/// Decodes a pattern from a string.
pub fn decode_str(s: &str) -> Result<Pattern, Error> {
    decode(s.as_bytes())
}

/// Decodes a pattern from a file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern, Error> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// A run of `count` cells, e.g. `3o`.
fn run_token(count: usize, tag: char) -> String {
    if count == 1 {
        tag.to_string()
    } else {
        format!("{}{}", count, tag)
    }
}

/// Encodes the grid in RLE.
///
/// Dead cells at the end of a row and empty rows at the bottom are omitted.
/// Empty rows in between are written as repeated `$`,
/// since counts before `$` are not read back.
pub fn encode(grid: &Grid) -> String {
    let mut tokens = Vec::new();
    let mut pending_rows = 0;
    for row in grid.rows() {
        let mut runs: Vec<(State, usize)> = Vec::new();
        for &cell in row {
            match runs.last_mut() {
                Some((state, count)) if *state == cell => *count += 1,
                _ => runs.push((cell, 1)),
            }
        }
        if let Some(&(DEAD, _)) = runs.last() {
            runs.pop();
        }
        if !runs.is_empty() {
            tokens.extend(iter::repeat_with(|| String::from("$")).take(pending_rows));
            pending_rows = 0;
            for (state, count) in runs {
                tokens.push(run_token(count, if state == ALIVE { 'o' } else { 'b' }));
            }
        }
        pending_rows += 1;
    }
    tokens.push(String::from("!"));

    let mut str = format!(
        "x = {}, y = {}, rule = B3/S23\n",
        grid.width(),
        grid.height()
    );
    let mut line_len = 0;
    for token in tokens {
        if line_len + token.len() > MAX_LINE_LEN {
            str.push('\n');
            line_len = 0;
        }
        str.push_str(&token);
        line_len += token.len();
    }
    str.push('\n');
    str
}
