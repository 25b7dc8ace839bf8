// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for httplog
//!
//! Call failures raised beneath the logging stage travel through these types
//! untouched. Configuration mistakes surface as [`Error::InvalidArgument`] at the
//! setter that received them.

use thiserror::Error;

/// Result type alias for httplog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for httplog
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A builder setter or config field received an unusable value
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// Network error raised by a transport or pipeline stage
    #[error("Network error: {0}")]
    Network(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Check if the transport gave up waiting
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http(_))
    }

    /// Check if this is a configuration error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. } | Error::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument("skip_urls", "empty pattern");

        assert!(err.is_invalid_argument());
        assert!(!err.is_network());
        assert_eq!(
            err.to_string(),
            "Invalid argument `skip_urls`: empty pattern"
        );
    }

    #[test]
    fn test_network_error_display() {
        let err = Error::network("connection reset");
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Network error: connection reset");
    }
}
