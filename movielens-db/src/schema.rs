//! Opening the MovieLens database and the table layout it is expected to have.
//!
//! The production database ships pre-populated; [`create_schema`] exists so
//! tests can build the same layout in memory.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Database is missing required table '{0}'")]
    MissingTable(String),
}

/// Tables every domain operation relies on.
pub const REQUIRED_TABLES: [&str; 7] = [
    "Movies",
    "Ratings",
    "Movie_Taglines",
    "Genres",
    "Movie_Genres",
    "Companies",
    "Movie_Production_Companies",
];

/// Open an existing MovieLens database.
///
/// Unlike a plain `Connection::open`, a missing file is an error rather than
/// a freshly created empty database.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if !path.is_file() {
        return Err(SchemaError::NotFound(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    verify_tables(&conn)?;

    log::debug!("Opened database {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Create all tables if they don't exist.
///
/// This is idempotent, safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Check that every table in [`REQUIRED_TABLES`] exists.
pub fn verify_tables(conn: &Connection) -> Result<(), SchemaError> {
    for table in REQUIRED_TABLES {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
            [table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(SchemaError::MissingTable(table.to_string()));
        }
    }
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Movies (
    Movie_ID INTEGER PRIMARY KEY,
    Title TEXT NOT NULL,
    Release_Date TEXT,
    Runtime INTEGER,
    Original_Language TEXT,
    Budget INTEGER,
    Revenue INTEGER
);

-- One row per review; reviewers are anonymous.
CREATE TABLE IF NOT EXISTS Ratings (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Rating INTEGER NOT NULL CHECK (Rating BETWEEN 0 AND 10)
);
CREATE INDEX IF NOT EXISTS idx_ratings_movie ON Ratings(Movie_ID);

CREATE TABLE IF NOT EXISTS Movie_Taglines (
    Movie_ID INTEGER PRIMARY KEY REFERENCES Movies(Movie_ID),
    Tagline TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Genres (
    Genre_ID INTEGER PRIMARY KEY,
    Genre_Name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Movie_Genres (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Genre_ID INTEGER NOT NULL REFERENCES Genres(Genre_ID)
);

CREATE TABLE IF NOT EXISTS Companies (
    Company_ID INTEGER PRIMARY KEY,
    Company_Name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Movie_Production_Companies (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Company_ID INTEGER NOT NULL REFERENCES Companies(Company_ID)
);
"#;
