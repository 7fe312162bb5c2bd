//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Position, Season};

/// Output arguments shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Season year (e.g. 2024).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Directory the CSV files are written to (or set `SLEEPER_FFL_DATA_DIR` env var).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Print request URL and headers for debugging.
    #[clap(long)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch the current NFL player pool and save offensive rookies.
    ///
    /// Queries `/players/nfl`. The season only names the output file;
    /// Sleeper always returns the current pool.
    Rookies {
        #[clap(flatten)]
        output: OutputArgs,

        /// Restrict to these positions (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position", value_parser = clap::value_parser!(Position))]
        positions: Option<Vec<Position>>,

        /// Also print the saved records as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Fetch regular-season team offensive rankings for a season.
    TeamStats {
        #[clap(flatten)]
        output: OutputArgs,

        /// Also print the saved records as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Run both rookie and team-stats intake for one season.
    All {
        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper NFL data intake CLI")]
pub struct Sleeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Sleeper API and save it as CSV
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
