mod common;

use common::setup_db;
use movielens_lib::*;

// ── Statistics ──────────────────────────────────────────────────────────────

#[test]
fn counts_movies_and_reviews() {
    let conn = setup_db();
    assert_eq!(count_movies(&conn).unwrap(), 5);
    assert_eq!(count_reviews(&conn).unwrap(), 8);

    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats, CatalogStats { movies: 5, reviews: 8 });
}

#[test]
fn counts_on_empty_database_are_zero() {
    let conn = movielens_db::open_memory().unwrap();
    assert_eq!(count_movies(&conn).unwrap(), 0);
    assert_eq!(count_reviews(&conn).unwrap(), 0);
}

#[test]
fn broken_table_is_an_error_and_connection_stays_usable() {
    let conn = setup_db();
    conn.execute_batch("DROP TABLE Ratings;").unwrap();

    assert!(matches!(
        count_reviews(&conn),
        Err(CatalogError::DataAccess(_))
    ));
    assert!(catalog_stats(&conn).is_err());
    assert_eq!(count_movies(&conn).unwrap(), 5);
}

// ── Search ──────────────────────────────────────────────────────────────────

#[test]
fn search_all_is_ordered_by_id() {
    let conn = setup_db();
    let movies = search_movies(&conn, "%").unwrap();
    let ids: Vec<i64> = movies.iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn search_with_wildcards() {
    let conn = setup_db();
    let movies = search_movies(&conn, "toy%").unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title(), "Toy Story");
    assert_eq!(movies[0].release_year(), "1995");
    assert_eq!(movies[1].title(), "Toy Story 2");
    assert_eq!(movies[1].release_year(), "1999");

    let movies = search_movies(&conn, "_eat").unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id(), 3);
}

#[test]
fn search_without_release_date_has_empty_year() {
    let conn = setup_db();
    let movies = search_movies(&conn, "Quiet Film").unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].release_year(), "");
}

#[test]
fn search_no_match_is_empty() {
    let conn = setup_db();
    assert!(search_movies(&conn, "NoSuchTitleXYZ").unwrap().is_empty());
}

// ── Detail ──────────────────────────────────────────────────────────────────

#[test]
fn detail_composes_all_fields() {
    let conn = setup_db();
    let movie = movie_detail(&conn, 1).unwrap().expect("movie 1 exists");
    assert_eq!(movie.id(), 1);
    assert_eq!(movie.title(), "Toy Story");
    assert_eq!(movie.release_date(), "1995-10-30");
    assert_eq!(movie.runtime_minutes(), 81);
    assert_eq!(movie.original_language(), "en");
    assert_eq!(movie.budget(), 30_000_000);
    assert_eq!(movie.revenue(), 373_554_033);
    assert_eq!(movie.review_count(), 3);
    assert!((movie.average_rating() - 9.0).abs() < 1e-9);
    assert_eq!(movie.tagline(), "The adventure takes off!");
}

#[test]
fn detail_lists_are_sorted_and_distinct() {
    let conn = setup_db();
    let movie = movie_detail(&conn, 1).unwrap().unwrap();
    assert_eq!(movie.genres(), ["Animation", "Comedy", "Family"]);
    assert_eq!(
        movie.production_companies(),
        ["Pixar Animation Studios", "Walt Disney Pictures"]
    );

    let heat = movie_detail(&conn, 3).unwrap().unwrap();
    assert_eq!(heat.genres(), ["Action", "Crime"]);
    assert_eq!(heat.production_companies(), ["Warner Bros."]);
}

#[test]
fn detail_without_reviews_has_zero_average() {
    let conn = setup_db();
    let movie = movie_detail(&conn, 5).unwrap().unwrap();
    assert_eq!(movie.review_count(), 0);
    assert_eq!(movie.average_rating(), 0.0);
    assert_eq!(movie.tagline(), "");
    assert_eq!(movie.release_date(), "");
    assert!(movie.genres().is_empty());
    assert!(movie.production_companies().is_empty());
}

#[test]
fn detail_missing_movie_is_none() {
    let conn = setup_db();
    assert!(movie_detail(&conn, 999).unwrap().is_none());
    assert!(!movie_exists(&conn, 999).unwrap());
    assert!(movie_exists(&conn, 1).unwrap());
}

// ── Rankings ────────────────────────────────────────────────────────────────

#[test]
fn top_movies_orders_by_average_then_id() {
    let conn = setup_db();
    let top = top_movies(&conn, 10, 2).unwrap();
    let ids: Vec<i64> = top.iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    assert_eq!(top[0].title(), "Toy Story");
    assert_eq!(top[0].release_year(), "1995");
    assert_eq!(top[0].review_count(), 3);
    assert!((top[0].average_rating() - 9.0).abs() < 1e-9);
    assert!((top[2].average_rating() - 6.5).abs() < 1e-9);
}

#[test]
fn top_movies_respects_limit_and_threshold() {
    let conn = setup_db();
    let top = top_movies(&conn, 2, 1).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id(), 1);
    assert_eq!(top[1].id(), 3);

    let top = top_movies(&conn, 5, 3).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id(), 1);
}

#[test]
fn top_movies_unreachable_threshold_is_empty() {
    let conn = setup_db();
    assert!(top_movies(&conn, 5, 1_000_000).unwrap().is_empty());
}

#[test]
fn top_movies_error_is_distinct_from_empty() {
    let conn = setup_db();
    conn.execute_batch("DROP TABLE Ratings;").unwrap();
    assert!(matches!(
        top_movies(&conn, 5, 1),
        Err(CatalogError::DataAccess(_))
    ));
}

#[test]
fn top_movies_rejects_non_positive_arguments() {
    let conn = setup_db();
    assert!(matches!(
        top_movies(&conn, 0, 1),
        Err(CatalogError::InvalidInput(_))
    ));
    assert!(matches!(
        top_movies(&conn, 5, 0),
        Err(CatalogError::InvalidInput(_))
    ));
}
