//! Error types for the Drill client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Drill client operations
#[derive(Error, Debug)]
pub enum Error {
    /// The server could not be reached or the transport failed
    #[error("connection error: {0}")]
    Connection(String),

    /// The server rejected the query (malformed SQL or execution failure)
    #[error("query error: {0}")]
    Query(String),

    /// Underlying HTTP errors
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a payload the client could not decode
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
