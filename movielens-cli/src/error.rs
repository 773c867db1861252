use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Argument rejected before reaching the database
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<movielens_lib::CatalogError> for CliError {
    fn from(e: movielens_lib::CatalogError) -> Self {
        match e {
            movielens_lib::CatalogError::InvalidInput(msg) => Self::InvalidInput(msg),
            movielens_lib::CatalogError::DataAccess(e) => Self::Database(e.to_string()),
        }
    }
}
