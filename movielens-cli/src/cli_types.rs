//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movielens")]
#[command(about = "Query and update a MovieLens movie database", long_about = None)]
pub(crate) struct Cli {
    /// Path to the MovieLens SQLite database (overrides MOVIELENS_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal log output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the interactive menu
    Menu,

    /// Print the number of movies and reviews
    Stats,

    /// Find movies whose title matches a pattern (wildcards _ and % allowed)
    Search {
        /// Title pattern, e.g. "%star wars%"
        pattern: String,
    },

    /// Show details of a movie
    Show {
        /// Movie ID
        id: i64,
    },

    /// Top N movies by average rating
    Top {
        /// Number of movies to list
        n: i64,

        /// Minimum number of reviews a movie needs to qualify
        #[arg(short, long, default_value_t = 1)]
        min_reviews: i64,
    },

    /// Add a review (rating 0-10) for a movie
    Review {
        /// Movie ID
        id: i64,

        /// Rating between 0 and 10 (inclusive)
        rating: i64,
    },

    /// Set the tagline of a movie (an empty string is stored as-is)
    Tagline {
        /// Movie ID
        id: i64,

        /// New tagline text
        text: String,
    },

    /// Manage the saved database location
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Print the settings file path
    Path,

    /// Remember a database path in settings.toml
    SetDb {
        /// Path to the MovieLens SQLite database
        path: PathBuf,
    },

    /// Forget the saved database path
    ClearDb,
}
