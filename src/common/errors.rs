//! Error types for the application

use thiserror::Error;

/// Result type alias using our CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

/// Main error type for calculator and holding-store operations
///
/// An empty or non-numeric text field is NOT an error anywhere in this
/// crate: incomplete input is normal state while the user is typing and is
/// modelled as `None`/cleared fields. Only conditions the caller must be
/// told about land here.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A computation was requested with mathematically unusable input
    /// (e.g. profit against a non-positive average price)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A holding with this symbol already exists in the store
    #[error("holding already exists: {0}")]
    DuplicateSymbol(String),

    /// No holding with this symbol exists in the store
    #[error("unknown holding: {0}")]
    UnknownSymbol(String),

    /// Holding store I/O errors
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalcError {
    /// Shorthand for the hard-failure variant
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }
}
