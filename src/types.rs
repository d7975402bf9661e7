//! Common types used throughout cf-client
//!
//! Shared type definitions and small utilities used across modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        }
    }

    /// Statuses accepted as success for this method.
    ///
    /// DELETE is asynchronous on the server and usually answers 202 with a
    /// job location; some endpoints answer 204 instead.
    pub fn success_statuses(&self) -> &'static [u16] {
        match self {
            Method::GET | Method::PATCH | Method::PUT => &[200],
            Method::POST => &[201],
            Method::DELETE => &[202, 204],
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        let get: reqwest::Method = Method::GET.into();
        assert_eq!(reqwest::Method::GET, get);
        let patch: reqwest::Method = Method::PATCH.into();
        assert_eq!(reqwest::Method::PATCH, patch);
    }

    #[test]
    fn test_method_default() {
        assert_eq!(Method::default(), Method::GET);
        assert_eq!(Method::DELETE.to_string(), "DELETE");
    }

    #[test]
    fn test_success_statuses() {
        assert_eq!(Method::GET.success_statuses(), &[200]);
        assert_eq!(Method::POST.success_statuses(), &[201]);
        assert_eq!(Method::PATCH.success_statuses(), &[200]);
        assert_eq!(Method::DELETE.success_statuses(), &[202, 204]);
    }
}
