//! Read-only records built from query results.
//!
//! Fields are visible inside this crate only; everything outside reads them
//! through accessors. Records are rebuilt on every call and never cached.

/// One search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) release_year: String,
}

impl MovieSummary {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Four-digit year, or empty when the release date is unknown.
    pub fn release_year(&self) -> &str {
        &self.release_year
    }
}

/// One entry of a top-N ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRanking {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) release_year: String,
    pub(crate) review_count: i64,
    pub(crate) average_rating: f64,
}

impl MovieRanking {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> &str {
        &self.release_year
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }
}

/// Everything known about a single movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) release_date: String,
    pub(crate) runtime_minutes: i64,
    pub(crate) original_language: String,
    pub(crate) budget: i64,
    pub(crate) revenue: i64,
    pub(crate) review_count: i64,
    pub(crate) average_rating: f64,
    pub(crate) tagline: String,
    pub(crate) genres: Vec<String>,
    pub(crate) production_companies: Vec<String>,
}

impl MovieDetail {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `YYYY-MM-DD`, or empty when unknown.
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn runtime_minutes(&self) -> i64 {
        self.runtime_minutes
    }

    pub fn original_language(&self) -> &str {
        &self.original_language
    }

    /// Budget in USD.
    pub fn budget(&self) -> i64 {
        self.budget
    }

    /// Revenue in USD.
    pub fn revenue(&self) -> i64 {
        self.revenue
    }

    pub fn review_count(&self) -> i64 {
        self.review_count
    }

    /// Mean rating on the 0-10 scale; `0.0` when there are no reviews.
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    /// Empty when the movie has no tagline.
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Distinct genre names, sorted ascending.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Distinct company names, sorted ascending.
    pub fn production_companies(&self) -> &[String] {
        &self.production_companies
    }
}

/// Row counts for the two main tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: i64,
    pub reviews: i64,
}

/// Result of a write that executed without a database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row was inserted or updated
    Applied,
    /// No movie has the given ID; nothing was written
    MovieNotFound,
}

impl WriteOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}
