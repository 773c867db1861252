//! Whole-table counts.

use movielens_db::fetch_one;
use rusqlite::Connection;

use crate::error::CatalogError;
use crate::types::CatalogStats;

/// Number of rows in `Movies`.
pub fn count_movies(conn: &Connection) -> Result<i64, CatalogError> {
    count_rows(conn, "SELECT COUNT(*) FROM Movies")
}

/// Number of rows in `Ratings`, i.e. the number of reviews.
pub fn count_reviews(conn: &Connection) -> Result<i64, CatalogError> {
    count_rows(conn, "SELECT COUNT(*) FROM Ratings")
}

/// Both counts at once. Fails if either query fails.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, CatalogError> {
    Ok(CatalogStats {
        movies: count_movies(conn)?,
        reviews: count_reviews(conn)?,
    })
}

fn count_rows(conn: &Connection, sql: &str) -> Result<i64, CatalogError> {
    // COUNT(*) always yields a row
    let count = fetch_one(conn, sql, [], |row| row.get::<_, i64>(0))?;
    Ok(count.unwrap_or(0))
}
