//! Slide Grid CLI
//!
//! Usage:
//!   slide-grid [OPTIONS] <COMMAND>
//!
//! Commands:
//!   check      Lint a slide
//!   collide    Check a rectangle against a slide
//!   free       Find the first free position for a size
//!   slot       Print a slot's rectangle
//!   apply      Replace a slide's elements with a template
//!   templates  List available templates
//!   edit       Apply an edit command to a slide
//!   preview    Draw the slide's occupancy map

use std::io;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, LevelFilter};

use slide_grid::cli::{self, Args, Status};

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(Status::Success) => {}
        Ok(Status::Findings) => process::exit(1),
        Err(err) => {
            error!("Error: {err}");
            process::exit(1);
        }
    }
}
