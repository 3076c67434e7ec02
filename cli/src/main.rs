mod args;
mod cli;

use args::Args;
use std::{io, process};

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Some(level) = args.log_level {
        if let Err(e) = simple_logger::init_with_level(level) {
            eprintln!("Unable to set up logging: {}", e);
        }
    }
    if let Err(e) = cli::run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
