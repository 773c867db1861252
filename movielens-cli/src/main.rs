//! movielens CLI
//!
//! Menu-driven and one-shot access to a MovieLens movie database.

mod cli_types;
mod commands;
mod error;
mod format;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::{actions, config, menu, run_once};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.db;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run_interactive(db),
        Commands::Stats => run_once(db, |conn, out| actions::print_stats(conn, out)),
        Commands::Search { pattern } => {
            run_once(db, |conn, out| actions::print_search(conn, out, &pattern))
        }
        Commands::Show { id } => run_once(db, |conn, out| actions::print_detail(conn, out, id)),
        Commands::Top { n, min_reviews } => {
            if n <= 0 {
                return Err(CliError::invalid_input("N must be a positive number"));
            }
            if min_reviews <= 0 {
                return Err(CliError::invalid_input(
                    "the minimum number of reviews must be a positive number",
                ));
            }
            run_once(db, |conn, out| actions::print_top(conn, out, n, min_reviews))
        }
        Commands::Review { id, rating } => {
            if !movielens_lib::RATING_RANGE.contains(&rating) {
                return Err(CliError::invalid_input(
                    "rating must be between 0 and 10 (inclusive)",
                ));
            }
            run_once(db, |conn, out| actions::add_review(conn, out, id, rating))
        }
        Commands::Tagline { id, text } => {
            run_once(db, |conn, out| actions::set_tagline(conn, out, id, &text))
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::run_config_show(db);
                Ok(())
            }
            ConfigAction::Path => {
                config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => config::run_config_set_db(path),
            ConfigAction::ClearDb => config::run_config_clear_db(),
        },
    }
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
