//! Error types for the vidgrab library.

use thiserror::Error;

/// Errors that can occur while previewing or downloading a video.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request error (transport failure or non-success status).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error during file delivery.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Preview metadata probe failed.
    #[error("preview failed: {0}")]
    Preview(String),
}

/// A specialized `Result` type for vidgrab operations.
pub type Result<T> = std::result::Result<T, Error>;
