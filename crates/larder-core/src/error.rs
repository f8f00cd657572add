//! Error types for the larder-core library.

use thiserror::Error;

/// Main error type for the larder library.
#[derive(Error, Debug)]
pub enum LarderError {
    /// Remote service error (OCR or parse service).
    #[error("remote service error: {0}")]
    Remote(#[from] RemoteError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the remote OCR and parse services.
///
/// Malformed invoice lines are not errors: the line extractors return
/// `None` and the caller drops the line. Everything here is a failed
/// request/response cycle, surfaced to the caller so the user can retry.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for the larder library.
pub type Result<T> = std::result::Result<T, LarderError>;
