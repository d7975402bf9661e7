//! Transport abstraction
//!
//! Request and response shapes exchanged with a [`Transport`].

use crate::error::Result;
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// A request to send through a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API root, including any query string
    pub path: String,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// GET `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST `body` to `path`
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    /// PATCH `path` with `body`
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PATCH, path).with_body(body)
    }

    /// DELETE `path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response returned by a [`Transport`]
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests to the API
///
/// Implementations report connection-level failures as errors and return
/// every HTTP response, whatever its status, as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and wait for the full response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request).await
    }
}
