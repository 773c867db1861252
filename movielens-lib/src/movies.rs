//! Read queries: search, detail lookup, and rankings.

use movielens_db::{fetch_many, fetch_one};
use rusqlite::{params, Connection, Row};

use crate::error::CatalogError;
use crate::types::{MovieDetail, MovieRanking, MovieSummary};

// ── Search ──────────────────────────────────────────────────────────────────

/// Movies whose title matches a SQL `LIKE` pattern, ordered by ID.
///
/// The pattern is used as given, so `_` and `%` act as wildcards. SQLite's
/// `LIKE` is case-insensitive for ASCII.
pub fn search_movies(
    conn: &Connection,
    pattern: &str,
) -> Result<Vec<MovieSummary>, CatalogError> {
    let movies = fetch_many(
        conn,
        "SELECT Movie_ID, Title, IFNULL(strftime('%Y', Release_Date), '')
         FROM Movies
         WHERE Title LIKE ?1
         ORDER BY Movie_ID ASC",
        params![pattern],
        row_to_summary,
    )?;
    Ok(movies)
}

/// Whether a movie with this ID exists.
pub fn movie_exists(conn: &Connection, movie_id: i64) -> Result<bool, CatalogError> {
    let found = fetch_one(
        conn,
        "SELECT 1 FROM Movies WHERE Movie_ID = ?1",
        params![movie_id],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(found.is_some())
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Full details for one movie, or `None` if no movie has this ID.
pub fn movie_detail(
    conn: &Connection,
    movie_id: i64,
) -> Result<Option<MovieDetail>, CatalogError> {
    let Some(mut detail) = fetch_one(
        conn,
        "SELECT m.Movie_ID, m.Title, IFNULL(DATE(m.Release_Date), ''),
                IFNULL(m.Runtime, 0), IFNULL(m.Original_Language, ''),
                IFNULL(m.Budget, 0), IFNULL(m.Revenue, 0),
                COUNT(r.Rating), IFNULL(AVG(r.Rating), 0.0),
                IFNULL(t.Tagline, '')
         FROM Movies m
         LEFT JOIN Ratings r ON r.Movie_ID = m.Movie_ID
         LEFT JOIN Movie_Taglines t ON t.Movie_ID = m.Movie_ID
         WHERE m.Movie_ID = ?1
         GROUP BY m.Movie_ID",
        params![movie_id],
        row_to_detail,
    )?
    else {
        return Ok(None);
    };

    detail.genres = fetch_many(
        conn,
        "SELECT DISTINCT g.Genre_Name
         FROM Genres g
         JOIN Movie_Genres mg ON mg.Genre_ID = g.Genre_ID
         WHERE mg.Movie_ID = ?1
         ORDER BY g.Genre_Name ASC",
        params![movie_id],
        |row| row.get(0),
    )?;

    detail.production_companies = fetch_many(
        conn,
        "SELECT DISTINCT c.Company_Name
         FROM Companies c
         JOIN Movie_Production_Companies mpc ON mpc.Company_ID = c.Company_ID
         WHERE mpc.Movie_ID = ?1
         ORDER BY c.Company_Name ASC",
        params![movie_id],
        |row| row.get(0),
    )?;

    Ok(Some(detail))
}

// ── Rankings ────────────────────────────────────────────────────────────────

/// The `n` best-rated movies with at least `min_reviews` reviews.
///
/// Ordered by average rating, highest first; ties go to the lower ID. An
/// empty result means no movie met the threshold.
pub fn top_movies(
    conn: &Connection,
    n: i64,
    min_reviews: i64,
) -> Result<Vec<MovieRanking>, CatalogError> {
    if n <= 0 {
        return Err(CatalogError::invalid_input(format!(
            "N must be positive, got {n}"
        )));
    }
    if min_reviews <= 0 {
        return Err(CatalogError::invalid_input(format!(
            "minimum number of reviews must be positive, got {min_reviews}"
        )));
    }

    let movies = fetch_many(
        conn,
        "SELECT m.Movie_ID, m.Title, IFNULL(strftime('%Y', m.Release_Date), ''),
                COUNT(r.Rating) AS Num_Reviews, AVG(r.Rating) AS Avg_Rating
         FROM Movies m
         JOIN Ratings r ON r.Movie_ID = m.Movie_ID
         GROUP BY m.Movie_ID
         HAVING Num_Reviews >= ?1
         ORDER BY Avg_Rating DESC, m.Movie_ID ASC
         LIMIT ?2",
        params![min_reviews, n],
        row_to_ranking,
    )?;
    Ok(movies)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_summary(row: &Row<'_>) -> rusqlite::Result<MovieSummary> {
    Ok(MovieSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
    })
}

fn row_to_ranking(row: &Row<'_>) -> rusqlite::Result<MovieRanking> {
    Ok(MovieRanking {
        id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
        review_count: row.get(3)?,
        average_rating: row.get(4)?,
    })
}

fn row_to_detail(row: &Row<'_>) -> rusqlite::Result<MovieDetail> {
    Ok(MovieDetail {
        id: row.get(0)?,
        title: row.get(1)?,
        release_date: row.get(2)?,
        runtime_minutes: row.get(3)?,
        original_language: row.get(4)?,
        budget: row.get(5)?,
        revenue: row.get(6)?,
        review_count: row.get(7)?,
        average_rating: row.get(8)?,
        tagline: row.get(9)?,
        genres: Vec::new(),
        production_companies: Vec::new(),
    })
}
