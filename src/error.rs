use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file did not exist when the catalog was opened.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Movie was not found")]
    MovieNotFound,

    /// Aggregations that need at least one movie.
    #[error("Cannot compute {operation} of an empty catalog")]
    EmptyCatalog { operation: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Usage(String),
}

impl CatalogError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
