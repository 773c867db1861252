//! Write operations: adding reviews and setting taglines.
//!
//! Both check that the movie exists first and then issue a single committed
//! statement. The check and the write are separate statements.

use std::ops::RangeInclusive;

use movielens_db::{execute_mutation, fetch_one};
use rusqlite::{params, Connection};

use crate::error::CatalogError;
use crate::movies::movie_exists;
use crate::types::WriteOutcome;

/// Ratings accepted by [`add_review`].
pub const RATING_RANGE: RangeInclusive<i64> = 0..=10;

/// Record one new review for a movie.
pub fn add_review(
    conn: &Connection,
    movie_id: i64,
    rating: i64,
) -> Result<WriteOutcome, CatalogError> {
    if !RATING_RANGE.contains(&rating) {
        return Err(CatalogError::invalid_input(format!(
            "rating must be between {} and {} (inclusive), got {rating}",
            RATING_RANGE.start(),
            RATING_RANGE.end(),
        )));
    }

    if !movie_exists(conn, movie_id)? {
        return Ok(WriteOutcome::MovieNotFound);
    }

    let changed = execute_mutation(
        conn,
        "INSERT INTO Ratings (Movie_ID, Rating) VALUES (?1, ?2)",
        params![movie_id, rating],
    )?;
    log::debug!("Added rating {} for movie {}", rating, movie_id);
    Ok(applied_if_changed(changed))
}

/// Set a movie's tagline, replacing any existing one.
///
/// An empty string is stored as the tagline; it does not remove the row.
pub fn set_tagline(
    conn: &Connection,
    movie_id: i64,
    tagline: &str,
) -> Result<WriteOutcome, CatalogError> {
    if !movie_exists(conn, movie_id)? {
        return Ok(WriteOutcome::MovieNotFound);
    }

    let existing = fetch_one(
        conn,
        "SELECT COUNT(*) FROM Movie_Taglines WHERE Movie_ID = ?1",
        params![movie_id],
        |row| row.get::<_, i64>(0),
    )?
    .unwrap_or(0);

    let changed = if existing > 0 {
        execute_mutation(
            conn,
            "UPDATE Movie_Taglines SET Tagline = ?1 WHERE Movie_ID = ?2",
            params![tagline, movie_id],
        )?
    } else {
        execute_mutation(
            conn,
            "INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (?1, ?2)",
            params![movie_id, tagline],
        )?
    };
    log::debug!(
        "{} tagline for movie {}",
        if existing > 0 { "Updated" } else { "Inserted" },
        movie_id
    );
    Ok(applied_if_changed(changed))
}

/// Zero rows changed after a successful existence check means the movie
/// disappeared in between.
fn applied_if_changed(changed: usize) -> WriteOutcome {
    if changed > 0 {
        WriteOutcome::Applied
    } else {
        WriteOutcome::MovieNotFound
    }
}
