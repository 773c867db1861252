use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Show the settings file and where the database path currently comes from.
pub(crate) fn run_config_show(cli_db: Option<PathBuf>) {
    let path = movielens_lib::settings_path();

    log::info!(
        "{}",
        "MovieLens Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let env_value = std::env::var(movielens_lib::DATABASE_ENV_VAR).ok();
    let (resolved, source) = if let Some(p) = cli_db {
        (Some(p), "--db flag".to_string())
    } else if let Some(v) = env_value.filter(|v| !v.trim().is_empty()) {
        (
            Some(PathBuf::from(v)),
            format!("env ${}", movielens_lib::DATABASE_ENV_VAR),
        )
    } else if let Some(p) = movielens_lib::load_database_path() {
        (Some(p), "settings file".to_string())
    } else {
        (None, "not set".to_string())
    };

    match resolved {
        Some(p) => log::info!(
            "  {:<10} {}  {}",
            "database",
            p.display(),
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {:<10} {}",
            "database",
            "(prompted at startup)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    if let Some(contents) = movielens_lib::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", movielens_lib::settings_path().display());
}

/// Validate and remember a database path.
pub(crate) fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    // Refuse anything that would fail at the next startup anyway
    movielens_db::open_database(&path).map_err(|e| {
        CliError::database(format!("Cannot use {}: {}", path.display(), e))
    })?;
    let absolute = std::fs::canonicalize(&path)?;

    movielens_lib::save_database_path(Some(&absolute))
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    log::info!(
        "{} Database path saved: {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        absolute.display(),
    );
    Ok(())
}

/// Forget the saved database path.
pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    movielens_lib::save_database_path(None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!("Saved database path cleared");
    Ok(())
}
