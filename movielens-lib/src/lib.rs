//! Domain layer for the MovieLens catalog.
//!
//! Each operation borrows an open connection, runs one or more statements
//! through `movielens-db`, and returns typed records. Database failures come
//! back as [`CatalogError`]; "nothing matched" comes back as a value.

pub mod error;
pub mod movies;
pub mod settings;
pub mod stats;
pub mod types;
pub mod writes;

pub use error::CatalogError;
pub use movies::{movie_detail, movie_exists, search_movies, top_movies};
pub use settings::{
    load_database_path, load_settings_string, resolve_database_path, save_database_path,
    settings_path, SettingsError, DATABASE_ENV_VAR,
};
pub use stats::{catalog_stats, count_movies, count_reviews};
pub use types::{CatalogStats, MovieDetail, MovieRanking, MovieSummary, WriteOutcome};
pub use writes::{add_review, set_tagline, RATING_RANGE};
