use movielens_db::DataAccessError;
use thiserror::Error;

/// Errors returned by the catalog operations.
///
/// "Nothing matched" is never an error: those outcomes are `None`, an empty
/// `Vec`, or [`WriteOutcome::MovieNotFound`](crate::WriteOutcome).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A statement failed at the data access layer
    #[error("Database error: {0}")]
    DataAccess(#[from] DataAccessError),

    /// An argument was outside the range the operation accepts
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
