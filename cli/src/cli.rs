//! Running the simulation without a user interface.

use crate::args::{Args, Format};
use anyhow::{Context, Result};
use lifegrid_lib::{rle, Grid};
use log::{debug, info, warn};
use std::{
    io::{self, Write},
    thread,
};

/// Writes one generation, with a header line.
fn print_gen<W: Write>(out: &mut W, grid: &Grid, gen: u64, format: Format) -> io::Result<()> {
    writeln!(out, "Gen: {}  Cells: {}", gen, grid.population())?;
    match format {
        Format::Plain => write!(out, "{}", grid)?,
        Format::Rle => write!(out, "{}", rle::encode(grid))?,
    }
    out.flush()
}

/// Runs the simulation described by the arguments,
/// writing the generations to `out`.
pub(crate) fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.config()?;
    debug!("Configuration: {:?}", config);
    let mut grid = config.grid().with_context(|| match &config.pattern {
        Some(path) => format!("Unable to set up the grid with {}", path.display()),
        None => String::from("Unable to set up the grid"),
    })?;
    if let Some(path) = &config.pattern {
        info!("Inserted {} at {}", path.display(), config.anchor);
    }

    let mut gen = 0;
    if args.every.is_some() {
        print_gen(out, &grid, gen, args.format)?;
    }
    while gen < args.generations {
        if grid.is_empty() {
            warn!("Every cell is dead at generation {}", gen);
            break;
        }
        grid.step();
        gen += 1;
        if let Some(every) = args.every {
            if gen % every == 0 && gen < args.generations {
                thread::sleep(args.delay);
                print_gen(out, &grid, gen, args.format)?;
            }
        }
    }
    if args.every.is_some() {
        thread::sleep(args.delay);
    }
    print_gen(out, &grid, gen, args.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn glider_path() -> String {
        let path: PathBuf = [
            env!("CARGO_MANIFEST_DIR"),
            "..",
            "lib",
            "tests",
            "patterns",
            "glider.rle",
        ]
        .iter()
        .collect();
        path.to_string_lossy().into_owned()
    }

    fn run_with(args: &[&str]) -> Result<String> {
        let args = Args::parse_from(args.iter().copied())?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn glider_moves() -> Result<()> {
        let glider = glider_path();
        let out = run_with(&["lifegrid", &glider, "-x", "6", "-y", "6", "-g", "4"])?;
        assert_eq!(
            out,
            "Gen: 4  Cells: 5\n\
             ......\n\
             ......\n\
             ...o..\n\
             ....o.\n\
             ..ooo.\n\
             ......\n"
        );
        Ok(())
    }

    #[test]
    fn every_generation() -> Result<()> {
        let glider = glider_path();
        let out = run_with(&["lifegrid", &glider, "-x", "6", "-y", "6", "-g", "4", "-e", "2"])?;
        let headers: Vec<_> = out.lines().filter(|line| line.starts_with("Gen")).collect();
        assert_eq!(
            headers,
            ["Gen: 0  Cells: 5", "Gen: 2  Cells: 5", "Gen: 4  Cells: 5"]
        );
        Ok(())
    }

    #[test]
    fn rle_output() -> Result<()> {
        let glider = glider_path();
        let out = run_with(&[
            "lifegrid", &glider, "-x", "5", "-y", "5", "-g", "0", "-f", "rle", "--anchor", "0,0",
        ])?;
        assert_eq!(out, "Gen: 0  Cells: 5\nx = 5, y = 5, rule = B3/S23\nbo$2bo$3o!\n");
        Ok(())
    }

    #[test]
    fn stops_when_empty() -> Result<()> {
        let out = run_with(&["lifegrid", "-x", "3", "-y", "3", "-g", "50"])?;
        assert_eq!(out, "Gen: 0  Cells: 0\n...\n...\n...\n");
        Ok(())
    }

    #[test]
    fn pattern_too_big() {
        let glider = glider_path();
        assert!(run_with(&["lifegrid", &glider, "-x", "3", "-y", "3"]).is_err());
    }
}
