use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database open/schema failure
    #[error("Database error: {0}")]
    Database(String),

    /// Catalog operation failed (not found, conflict, invalid input)
    #[error("{0}")]
    Store(#[from] ludex_db::StoreError),

    /// Rejected before reaching the catalog
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Seed file could not be read or parsed
    #[error("Seed error: {0}")]
    Seed(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }
}
