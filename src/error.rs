//! Error types for cf-client
//!
//! This module defines the error hierarchy for the whole client.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! A malformed pagination link is not an error; the pager stops navigating.

use thiserror::Error;

/// The main error type for cf-client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid resource GUID: {guid:?}")]
    InvalidGuid { guid: String },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("{method} {path} returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        method: String,
        path: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Auto-paging stopped after reaching the limit of {max_pages} pages")]
    PageLimitExceeded { max_pages: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a transport error for non-reqwest transports
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an invalid GUID error
    pub fn invalid_guid(guid: impl Into<String>) -> Self {
        Self::InvalidGuid { guid: guid.into() }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(
        method: impl Into<String>,
        path: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            method: method.into(),
            path: path.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a decode error tagged with the operation that failed
    pub fn decode(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error means the resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for cf-client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("api_url");
        assert_eq!(err.to_string(), "Missing required config field: api_url");

        let err = Error::unexpected_status("GET", "/v3/builds", 404, "Not found");
        assert_eq!(
            err.to_string(),
            "GET /v3/builds returned unexpected status 404: Not found"
        );

        let err = Error::decode("list builds", "missing field `resources`");
        assert_eq!(
            err.to_string(),
            "Failed to decode list builds response: missing field `resources`"
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            Error::unexpected_status("DELETE", "/v3/droplets/x", 404, "").status(),
            Some(404)
        );
        assert!(Error::unexpected_status("GET", "/", 404, "").is_not_found());
        assert!(!Error::unexpected_status("GET", "/", 500, "").is_not_found());
        assert_eq!(Error::config("x").status(), None);
        assert_eq!(Error::transport("reset").status(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
