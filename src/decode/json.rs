//! JSON decoder
//!
//! Turns raw response bodies into typed values.

use crate::error::{Error, Result};
use crate::pagination::Page;
use serde::de::DeserializeOwned;

/// Longest body excerpt quoted in decode errors
const EXCERPT_LEN: usize = 200;

/// JSON decoder bound to the operation it decodes for
#[derive(Debug, Clone, Copy)]
pub struct JsonDecoder<'a> {
    operation: &'a str,
}

impl<'a> JsonDecoder<'a> {
    /// Create a decoder for `operation` (e.g. "list builds")
    pub fn new(operation: &'a str) -> Self {
        Self { operation }
    }

    /// Decode a list response into resources plus pagination
    pub fn page<T: DeserializeOwned>(&self, body: &[u8]) -> Result<Page<T>> {
        self.decode(body)
    }

    /// Decode an item response into one resource
    pub fn resource<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        self.decode(body)
    }

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::decode(self.operation, "empty response body"));
        }
        serde_json::from_slice(body).map_err(|e| {
            Error::decode(self.operation, format!("{e} (body: {})", excerpt(body)))
        })
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= EXCERPT_LEN {
        text.into_owned()
    } else {
        let cut: String = text.chars().take(EXCERPT_LEN).collect();
        format!("{cut}...")
    }
}
