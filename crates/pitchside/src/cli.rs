//! Command-line interface for pitchside.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pitchside - football club catalog, quiz, and word search
#[derive(Parser, Debug)]
#[command(name = "pitchside")]
#[command(about = "Football club catalog with a word-search game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $PITCHSIDE_CONFIG, then ./pitchside.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the club word search in the terminal
    Wordsearch {
        /// Grid width and height (overrides config)
        #[arg(long)]
        grid_size: Option<usize>,

        /// Words per puzzle (overrides config)
        #[arg(long)]
        words: Option<usize>,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a generated puzzle and its word list
    Print {
        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,

        /// Grid width and height (overrides config)
        #[arg(long)]
        grid_size: Option<usize>,
    },

    /// Guess the club from its location
    Quiz {
        /// Number of rounds
        #[arg(short, long, default_value = "5")]
        rounds: u32,
    },

    /// Search the club catalog
    Clubs {
        /// Match against club name or location
        #[arg(short, long)]
        term: Option<String>,

        /// Maximum clubs to list
        #[arg(short, long, default_value = "100")]
        limit: usize,

        /// Show one random club instead of a list
        #[arg(long)]
        random: bool,

        /// Seed for a reproducible listing order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the latest headlines from a news feed
    News {
        /// Feed to read: bbc or espn
        #[arg(short, long, default_value = "bbc")]
        feed: String,
    },

    /// List national teams A to Z
    Teams,

    /// Look up stadiums and the distance between two of them
    Stadiums {
        /// Suggest stadiums whose name contains this
        #[arg(short, long)]
        term: Option<String>,

        /// Exact name of the first stadium
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Exact name of the second stadium
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}
