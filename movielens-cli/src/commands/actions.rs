//! The six catalog actions, rendered as text.
//!
//! Shared by the interactive menu and the one-shot subcommands. Inputs are
//! already parsed; "nothing found" is printed, database failures are
//! returned as [`CliError`].

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::format::{format_name_list, format_thousands, format_usd};
use crate::CliError;

/// Searches matching more movies than this print a notice instead of a list.
pub(crate) const MAX_SEARCH_RESULTS: usize = 100;

pub(crate) const MOVIE_NOT_FOUND: &str = "No movie matching that ID was found in the database.";

pub(crate) fn print_stats<W: Write>(conn: &Connection, out: &mut W) -> Result<(), CliError> {
    let stats = movielens_lib::catalog_stats(conn)?;

    writeln!(
        out,
        "{}",
        "General Statistics:".if_supports_color(Stdout, |t| t.bold()),
    )?;
    writeln!(out, "  Number of Movies: {}", format_thousands(stats.movies))?;
    writeln!(out, "  Number of Reviews: {}", format_thousands(stats.reviews))?;
    Ok(())
}

pub(crate) fn print_search<W: Write>(
    conn: &Connection,
    out: &mut W,
    pattern: &str,
) -> Result<(), CliError> {
    let movies = movielens_lib::search_movies(conn, pattern)?;

    writeln!(out, "Number of movies found: {}", movies.len())?;
    writeln!(out)?;
    if movies.len() > MAX_SEARCH_RESULTS {
        writeln!(
            out,
            "There are too many movies to display (more than {}). Please narrow your search and try again.",
            MAX_SEARCH_RESULTS,
        )?;
        return Ok(());
    }
    for movie in &movies {
        writeln!(
            out,
            "{} : {} ({})",
            movie.id(),
            movie.title(),
            movie.release_year(),
        )?;
    }
    Ok(())
}

pub(crate) fn print_detail<W: Write>(
    conn: &Connection,
    out: &mut W,
    movie_id: i64,
) -> Result<(), CliError> {
    let Some(movie) = movielens_lib::movie_detail(conn, movie_id)? else {
        writeln!(out, "{}", MOVIE_NOT_FOUND)?;
        return Ok(());
    };

    writeln!(
        out,
        "{}",
        format!("{} : {}", movie.id(), movie.title()).if_supports_color(Stdout, |t| t.bold()),
    )?;
    writeln!(out, "  Release date: {}", movie.release_date())?;
    writeln!(out, "  Runtime: {} (minutes)", movie.runtime_minutes())?;
    writeln!(out, "  Original language: {}", movie.original_language())?;
    writeln!(out, "  Budget: {}", format_usd(movie.budget()))?;
    writeln!(out, "  Revenue: {}", format_usd(movie.revenue()))?;
    writeln!(out, "  Number of reviews: {}", movie.review_count())?;
    writeln!(out, "  Average rating: {:.2} (0-10)", movie.average_rating())?;
    writeln!(out, "  Genres: {}", format_name_list(movie.genres()))?;
    writeln!(
        out,
        "  Production companies: {}",
        format_name_list(movie.production_companies()),
    )?;
    writeln!(out, "  Tagline: {}", movie.tagline())?;
    Ok(())
}

pub(crate) fn print_top<W: Write>(
    conn: &Connection,
    out: &mut W,
    n: i64,
    min_reviews: i64,
) -> Result<(), CliError> {
    let movies = movielens_lib::top_movies(conn, n, min_reviews)?;

    if movies.is_empty() {
        writeln!(out, "No movies were found that fit the criteria.")?;
        return Ok(());
    }
    for movie in &movies {
        writeln!(
            out,
            "{} : {} ({}), Average rating = {:.2} ({} reviews)",
            movie.id(),
            movie.title(),
            movie.release_year(),
            movie.average_rating(),
            movie.review_count(),
        )?;
    }
    Ok(())
}

pub(crate) fn add_review<W: Write>(
    conn: &Connection,
    out: &mut W,
    movie_id: i64,
    rating: i64,
) -> Result<(), CliError> {
    if movielens_lib::add_review(conn, movie_id, rating)?.is_applied() {
        writeln!(
            out,
            "{}",
            "Rating was successfully inserted into the database."
                .if_supports_color(Stdout, |t| t.green()),
        )?;
    } else {
        writeln!(out, "{}", MOVIE_NOT_FOUND)?;
    }
    Ok(())
}

pub(crate) fn set_tagline<W: Write>(
    conn: &Connection,
    out: &mut W,
    movie_id: i64,
    tagline: &str,
) -> Result<(), CliError> {
    if movielens_lib::set_tagline(conn, movie_id, tagline)?.is_applied() {
        writeln!(
            out,
            "{}",
            "Tagline was successfully set in the database."
                .if_supports_color(Stdout, |t| t.green()),
        )?;
    } else {
        writeln!(out, "{}", MOVIE_NOT_FOUND)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_db;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stats_use_thousands_separators() {
        let conn = test_db();
        conn.execute_batch(
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 1500)
             INSERT INTO Ratings (Movie_ID, Rating) SELECT 1, 5 FROM n;",
        )
        .unwrap();
        let text = render(|out| print_stats(&conn, out));
        assert_eq!(
            text,
            "General Statistics:\n  Number of Movies: 3\n  Number of Reviews: 1,505\n"
        );
    }

    #[test]
    fn detail_layout() {
        let conn = test_db();
        let text = render(|out| print_detail(&conn, out, 1));
        let expected = "\
1 : Toy Story
  Release date: 1995-10-30
  Runtime: 81 (minutes)
  Original language: en
  Budget: $30,000,000 (USD)
  Revenue: $373,554,033 (USD)
  Number of reviews: 3
  Average rating: 9.00 (0-10)
  Genres: Animation, Comedy, Family, 
  Production companies: Pixar Animation Studios, 
  Tagline: The adventure takes off!
";
        assert_eq!(text, expected);
    }

    #[test]
    fn detail_missing_movie() {
        let conn = test_db();
        let text = render(|out| print_detail(&conn, out, 42));
        assert_eq!(text, format!("{MOVIE_NOT_FOUND}\n"));
    }

    #[test]
    fn search_lists_matches() {
        let conn = test_db();
        let text = render(|out| print_search(&conn, out, "%a%"));
        assert_eq!(
            text,
            "Number of movies found: 2\n\n2 : Jumanji (1995)\n3 : Heat (1995)\n"
        );
    }

    #[test]
    fn search_with_too_many_results_prints_notice() {
        let conn = test_db();
        conn.execute_batch(
            "WITH RECURSIVE n(i) AS (SELECT 100 UNION ALL SELECT i + 1 FROM n WHERE i < 200)
             INSERT INTO Movies (Movie_ID, Title) SELECT i, 'Sequel ' || i FROM n;",
        )
        .unwrap();
        let text = render(|out| print_search(&conn, out, "Sequel%"));
        assert!(text.starts_with("Number of movies found: 101\n\n"));
        assert!(text.contains("too many movies to display (more than 100)"));
        assert!(!text.contains("Sequel 100"));
    }

    #[test]
    fn top_formats_two_decimals() {
        let conn = test_db();
        let text = render(|out| print_top(&conn, out, 2, 1));
        assert_eq!(
            text,
            "1 : Toy Story (1995), Average rating = 9.00 (3 reviews)\n\
             2 : Jumanji (1995), Average rating = 6.50 (2 reviews)\n"
        );
    }

    #[test]
    fn top_with_no_qualifying_movies() {
        let conn = test_db();
        let text = render(|out| print_top(&conn, out, 5, 1_000_000));
        assert_eq!(text, "No movies were found that fit the criteria.\n");
    }

    #[test]
    fn top_rejects_non_positive_n() {
        let conn = test_db();
        let mut out = Vec::new();
        let err = print_top(&conn, &mut out, 0, 1).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn review_and_tagline_messages() {
        let conn = test_db();
        let text = render(|out| add_review(&conn, out, 3, 8));
        assert_eq!(text, "Rating was successfully inserted into the database.\n");
        let text = render(|out| add_review(&conn, out, 99, 8));
        assert_eq!(text, format!("{MOVIE_NOT_FOUND}\n"));

        let text = render(|out| set_tagline(&conn, out, 3, "A Los Angeles crime saga"));
        assert_eq!(text, "Tagline was successfully set in the database.\n");
        let text = render(|out| set_tagline(&conn, out, 99, "nope"));
        assert_eq!(text, format!("{MOVIE_NOT_FOUND}\n"));
    }

    #[test]
    fn database_failure_becomes_cli_error() {
        let conn = test_db();
        conn.execute_batch("DROP TABLE Ratings;").unwrap();
        let mut out = Vec::new();
        let err = print_stats(&conn, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Database(_)));
        assert!(out.is_empty());
    }
}
