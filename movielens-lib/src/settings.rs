//! Application settings (database path, config file location).
//!
//! The settings file is `~/.config/movielens/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/data/MovieLens.db"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable that overrides the saved database path.
pub const DATABASE_ENV_VAR: &str = "MOVIELENS_DB";

/// The parts of `settings.toml` this crate reads. Unknown keys are ignored.
#[derive(Debug, Default, serde::Deserialize)]
struct SettingsFile {
    #[serde(default)]
    database: DatabaseSection,
}

#[derive(Debug, Default, serde::Deserialize)]
struct DatabaseSection {
    path: Option<String>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid settings file: {0}")]
    Layout(String),
}

/// Canonical path to the settings file: `~/.config/movielens/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movielens").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `MOVIELENS_DB` environment variable
/// 3. Saved `database.path` in `settings.toml`
///
/// Returns `None` when none of these is set; the caller decides whether to
/// prompt.
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    resolve_with(
        cli_override,
        std::env::var(DATABASE_ENV_VAR).ok(),
        &settings_path(),
    )
}

fn resolve_with(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    settings: &Path,
) -> Option<PathBuf> {
    if let Some(p) = cli_override {
        return Some(p);
    }
    if let Some(v) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(v));
    }
    read_database_path(settings)
}

/// Read `database.path` from `settings.toml`, if set.
pub fn load_database_path() -> Option<PathBuf> {
    read_database_path(&settings_path())
}

fn read_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let file: SettingsFile = match toml::from_str(&contents) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Ignoring unreadable settings file {}: {}", settings.display(), e);
            return None;
        }
    };
    file.database
        .path
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_database_path(path: Option<&Path>) -> Result<(), SettingsError> {
    write_database_path(&settings_path(), path)
}

/// Uses `toml::Value` for a surgical update so any other tables in the file
/// are preserved.
fn write_database_path(settings: &Path, path: Option<&Path>) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents.parse()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e.into()),
    };

    // Ensure [database] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::Layout("root is not a table".to_string()))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| SettingsError::Layout("[database] is not a table".to_string()))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
