//! Error types for the viewer

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and presenting a document
#[derive(Error, Debug)]
pub enum Error {
    /// URL scheme was not `http` or `https`
    #[error("Unsupported scheme: {0} (use http or https)")]
    UnsupportedScheme(String),

    /// Port suffix in the URL authority did not parse as a u16
    #[error("Invalid port in URL: {0:?}")]
    InvalidPort(String),

    /// Response declared a transfer or content encoding
    #[error("Unsupported response encoding: {0}")]
    UnsupportedEncoding(String),

    /// Transport-level failure (DNS, connect, reset, malformed response)
    #[error("Network error: {0}")]
    Network(String),

    /// Renderer shell failure (spawn, broken pipe, unwritable frame)
    #[error("Shell error: {0}")]
    Shell(String),
}
