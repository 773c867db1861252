pub(crate) mod actions;
pub(crate) mod config;
pub(crate) mod menu;

use std::io::{self, StdoutLock};
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::CliError;

/// Open the database at `path`, mapping failures to a CLI error.
pub(crate) fn open_connection(path: &Path) -> Result<Connection, CliError> {
    movielens_db::open_database(path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", path.display(), e))
    })
}

/// Run one action against the configured database, printing to stdout.
///
/// Used by the one-shot subcommands, which never prompt for a path.
pub(crate) fn run_once<F>(db: Option<PathBuf>, action: F) -> Result<(), CliError>
where
    F: FnOnce(&Connection, &mut StdoutLock<'static>) -> Result<(), CliError>,
{
    let path = movielens_lib::resolve_database_path(db).ok_or_else(|| {
        CliError::config(format!(
            "No database configured. Pass --db, set ${}, or run 'movielens config set-db <PATH>'",
            movielens_lib::DATABASE_ENV_VAR,
        ))
    })?;
    let conn = open_connection(&path)?;
    let mut out = io::stdout().lock();
    action(&conn, &mut out)
}

/// In-memory database with three movies, shared by the command tests.
#[cfg(test)]
pub(crate) fn test_db() -> Connection {
    owo_colors::set_override(false);

    let conn = movielens_db::open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Movies (Movie_ID, Title, Release_Date, Runtime, Original_Language, Budget, Revenue) VALUES
             (1, 'Toy Story', '1995-10-30', 81, 'en', 30000000, 373554033),
             (2, 'Jumanji', '1995-12-15', 104, 'en', 65000000, 262797249),
             (3, 'Heat', '1995-12-15', 170, 'en', 60000000, 187436818);
         INSERT INTO Ratings (Movie_ID, Rating) VALUES (1, 8), (1, 9), (1, 10), (2, 6), (2, 7);
         INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (1, 'The adventure takes off!');
         INSERT INTO Genres (Genre_ID, Genre_Name) VALUES (1, 'Family'), (2, 'Animation'), (3, 'Comedy');
         INSERT INTO Movie_Genres (Movie_ID, Genre_ID) VALUES (1, 1), (1, 2), (1, 3);
         INSERT INTO Companies (Company_ID, Company_Name) VALUES (1, 'Pixar Animation Studios');
         INSERT INTO Movie_Production_Companies (Movie_ID, Company_ID) VALUES (1, 1);",
    )
    .unwrap();
    conn
}
