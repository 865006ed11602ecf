use thiserror::Error;

/// Errors raised outside the fail-soft extraction/resolution core:
/// catalog loading, input reading and report rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input or catalog file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog or report could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog declares a table without a name.
    #[error("Invalid table catalog: table #{index} has an empty name")]
    EmptyTableName {
        /// Zero-based position of the offending entry.
        index: usize,
    },

    /// A catalog declares the same table twice.
    #[error("Invalid table catalog: table '{0}' is declared more than once")]
    DuplicateTable(String),

    /// Writing a rendered report failed.
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
