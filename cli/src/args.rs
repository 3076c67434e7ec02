//! Parsing command-line arguments.

use anyhow::{bail, Context, Result};
use clap::{
    builder::PossibleValuesParser, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgAction, ArgMatches, Command, Error as ClapError,
};
use lifegrid_lib::{Config, Coord, Init};
use log::Level;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// How to print the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext).
    Plain,
    /// [RLE](https://conwaylife.com/wiki/Rle).
    Rle,
}

/// A struct to store the parse results.
#[derive(Clone, Debug)]
pub(crate) struct Args {
    /// A configuration file to start from.
    config_file: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
    random: bool,
    seed: Option<u64>,
    pattern: Option<PathBuf>,
    anchor: Option<Coord>,

    /// Number of generations to run.
    pub(crate) generations: u64,
    /// Print every `n`th generation, not only the last one.
    pub(crate) every: Option<u64>,
    /// Pause between two printed generations.
    pub(crate) delay: Duration,
    pub(crate) format: Format,
    /// `None` when logging is turned off.
    pub(crate) log_level: Option<Level>,
}

/// Parses `ROW,COL`.
fn parse_anchor(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| String::from("anchor must look like ROW,COL"))?;
    let row = row.trim().parse().map_err(|e| format!("invalid row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("invalid column: {}", e))?;
    Ok(Coord::new(row, col))
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a bounded grid\n\
             \n\
             The grid has no wrap-around: cells beyond the edges are always dead.\n\
             A pattern in RLE format can be inserted before the simulation starts.\n\
             \n\
             The grid is printed in Plaintext or RLE format.\n\
             * Dead cells are represented by `.` in Plaintext, `b` in RLE;\n\
             * Living cells are represented by `o`.\n",
        )
        .arg(
            Arg::new("PATTERN")
                .help("RLE file to insert into the grid")
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file (TOML, YAML or JSON)")
                .long_help(
                    "Configuration file (TOML, YAML or JSON)\n\
                     The format is chosen by the file extension. \
                     Options on the command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("X")
                .help("Width of the grid")
                .short('x')
                .long("width")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the grid")
                .short('y')
                .long("height")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .short('g')
                .long("generations")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("ANCHOR")
                .help("Where the top-left cell of the pattern goes, as ROW,COL")
                .long("anchor")
                .value_parser(parse_anchor),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Fill the grid randomly before inserting the pattern")
                .short('r')
                .long("random")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for the random grid")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(PossibleValuesParser::new(["plain", "rle", "p", "r"]))
                .default_value("plain"),
        )
        .arg(
            Arg::new("EVERY")
                .help("Print every N generations, not only the last one")
                .short('e')
                .long("every")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("DELAY")
                .help("Milliseconds to wait after printing a generation")
                .long("delay")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Log more; repeat for even more")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .conflicts_with("QUIET"),
        )
        .arg(
            Arg::new("QUIET")
                .help("Turn logging off")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, ClapError> {
        Args::parse_from(std::env::args_os())
    }

    /// Parses the given arguments; the first one is the program name.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, ClapError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Args::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("rle") | Some("r") => Format::Rle,
            _ => Format::Plain,
        };
        let log_level = if matches.get_flag("QUIET") {
            None
        } else {
            Some(match matches.get_count("VERBOSE") {
                0 => Level::Warn,
                1 => Level::Info,
                2 => Level::Debug,
                _ => Level::Trace,
            })
        };

        Args {
            config_file: matches.get_one::<PathBuf>("CONFIG").cloned(),
            width: matches.get_one::<u32>("X").map(|&x| x as usize),
            height: matches.get_one::<u32>("Y").map(|&y| y as usize),
            random: matches.get_flag("RANDOM"),
            seed: matches.get_one::<u64>("SEED").copied(),
            pattern: matches.get_one::<PathBuf>("PATTERN").cloned(),
            anchor: matches.get_one::<Coord>("ANCHOR").copied(),
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(100),
            every: matches.get_one::<u64>("EVERY").copied(),
            delay: Duration::from_millis(matches.get_one::<u64>("DELAY").copied().unwrap_or(0)),
            format,
            log_level,
        }
    }

    /// The configuration: the configuration file if there is one,
    /// overridden by the command-line options.
    pub(crate) fn config(&self) -> Result<Config> {
        let mut config = match &self.config_file {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.random {
            config.init = Init::Random;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        if let Some(anchor) = self.anchor {
            config.anchor = anchor;
        }
        Ok(config)
    }
}

/// Reads a configuration file.
///
/// A relative pattern path in the file is relative to the file itself.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let mut config: Config = match extension.as_deref() {
        Some("toml") => toml::from_str(&text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        Some("json") => serde_json::from_str(&text)?,
        _ => bail!(
            "Unknown configuration format for {}; use .toml, .yaml or .json",
            path.display()
        ),
    };
    if let (Some(pattern), Some(dir)) = (&mut config.pattern, path.parent()) {
        if pattern.is_relative() {
            *pattern = dir.join(&*pattern);
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(parse_anchor("2,3"), Ok(Coord::new(2, 3)));
        assert_eq!(parse_anchor(" 0 , 10 "), Ok(Coord::new(0, 10)));
        assert!(parse_anchor("2").is_err());
        assert!(parse_anchor("-1,3").is_err());
    }

    #[test]
    fn defaults() -> Result<()> {
        let args = Args::parse_from(["lifegrid"])?;
        assert_eq!(args.generations, 100);
        assert_eq!(args.format, Format::Plain);
        assert_eq!(args.log_level, Some(Level::Warn));
        assert_eq!(args.config()?, Config::default());
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let args = Args::parse_from([
            "lifegrid", "glider.rle", "-x", "20", "-y", "10", "--anchor", "4,5", "-r",
            "--seed", "3", "-g", "8", "-f", "rle", "-vv",
        ])?;
        let config = args.config()?;
        assert_eq!((config.width, config.height), (20, 10));
        assert_eq!(config.anchor, Coord::new(4, 5));
        assert_eq!(config.init, Init::Random);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.pattern, Some(PathBuf::from("glider.rle")));
        assert_eq!(args.generations, 8);
        assert_eq!(args.format, Format::Rle);
        assert_eq!(args.log_level, Some(Level::Debug));
        Ok(())
    }

    #[test]
    fn rejects_zero_width() {
        assert!(Args::parse_from(["lifegrid", "-x", "0"]).is_err());
    }

    #[test]
    fn quiet() -> Result<()> {
        let args = Args::parse_from(["lifegrid", "-q"])?;
        assert_eq!(args.log_level, None);
        Ok(())
    }

    fn config_path(name: &str) -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "configs", name].iter().collect()
    }

    #[test]
    fn config_formats_agree() -> Result<()> {
        let toml = load_config(&config_path("glider.toml"))?;
        assert_eq!((toml.width, toml.height), (12, 10));
        assert_eq!(toml.init, Init::Empty);
        assert_eq!(toml.anchor, Coord::new(2, 3));
        assert_eq!(load_config(&config_path("glider.yaml"))?, toml);
        assert_eq!(load_config(&config_path("glider.json"))?, toml);

        let grid = toml.grid()?;
        assert_eq!(grid.population(), 5);
        Ok(())
    }

    #[test]
    fn partial_config() -> Result<()> {
        let config = load_config(&config_path("soup.toml"))?;
        assert_eq!(config.init, Init::Random);
        assert_eq!(config.seed, Some(2021));
        assert_eq!(config.anchor, Config::default().anchor);
        assert_eq!(config.grid()?, config.grid()?);
        Ok(())
    }

    #[test]
    fn command_line_overrides_file() -> Result<()> {
        let file = config_path("glider.toml");
        let file = file.to_string_lossy().into_owned();
        let args = Args::parse_from([
            "lifegrid",
            "-c",
            file.as_str(),
            "-y",
            "20",
            "--anchor",
            "0,0",
        ])?;
        let config = args.config()?;
        assert_eq!((config.width, config.height), (12, 20));
        assert_eq!(config.anchor, Coord::new(0, 0));
        assert!(config.pattern.is_some());
        Ok(())
    }

    #[test]
    fn unknown_config_format() {
        let source: PathBuf = [env!("CARGO_MANIFEST_DIR"), "src", "main.rs"].iter().collect();
        let message = load_config(&source).unwrap_err().to_string();
        assert!(message.starts_with("Unknown configuration format"));
        assert!(load_config(&config_path("missing.toml")).is_err());
    }

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }
}
