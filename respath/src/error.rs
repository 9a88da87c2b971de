//! Error types for the respath library.
//!
//! This module provides the error hierarchy for all operations in the
//! respath library, using `thiserror` for ergonomic error handling.
//!
//! Failures encountered while *probing* candidates during resolution never
//! appear here: resolution absorbs them and falls back to the original name.
//! Everything below is surfaced by explicit open/read/write calls or by the
//! configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a respath error.
///
/// # Examples
///
/// ```
/// use respath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(60)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the respath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while opening, reading or writing a resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file or other path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path could not be used.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The text passed as a URL is not a syntactically valid URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL text.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The URL parses, but its scheme cannot be fetched.
    #[error("unsupported URL scheme '{scheme}' in {url}")]
    UnsupportedScheme {
        /// The URL that was requested.
        url: String,
        /// The scheme that is not supported.
        scheme: String,
    },

    /// The network transfer failed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP status {status}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The numeric HTTP status code.
        status: u16,
    },

    /// The read did not complete within the configured timeout.
    #[error("timed out after {timeout_ms}ms reading {url}")]
    Timeout {
        /// The URL that was requested.
        url: String,
        /// The configured read timeout in milliseconds.
        timeout_ms: u64,
    },
}

impl Error {
    /// Check if the error reports a fetch that exceeded the read timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::Error;
    ///
    /// let err = Error::Timeout { url: "http://host/x".into(), timeout_ms: 10 };
    /// assert!(err.is_timeout());
    /// ```
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if the error indicates the resource does not exist.
    ///
    /// This covers missing files and HTTP 404/410 answers.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::Error;
    ///
    /// let err = Error::HttpStatus { url: "http://host/x".into(), status: 404 };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::HttpStatus { status, .. } => matches!(status, 404 | 410),
            _ => false,
        }
    }

    /// Check if the error came from a remote fetch rather than local I/O.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::HttpStatus { .. } | Self::Timeout { .. }
        )
    }
}
