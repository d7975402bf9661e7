//! API client
//!
//! [`Client`] binds a [`Transport`] to the expected-status policy and the
//! JSON decoder. Resource clients ([`BuildClient`], [`DropletClient`],
//! [`PackageClient`]) borrow it and add one typed method per endpoint.
//!
//! # Overview
//!
//! ```text
//! BuildClient::list_all(opts)
//!     │
//!     ├── AutoPager::run ──► BuildClient::list(opts)
//!     │                          │
//!     │                          ├── with_query(path, opts)
//!     │                          ├── Transport::send
//!     │                          ├── status check
//!     │                          └── JsonDecoder::page ──► (Vec<Build>, Pager)
//!     │
//!     └── Pager::advance_next(opts) ──► next iteration
//! ```

mod builds;
mod droplets;
mod packages;

pub use builds::{BuildAppListOptions, BuildClient, BuildListOptions};
pub use droplets::{
    DropletAppListOptions, DropletClient, DropletListOptions, DropletPackageListOptions,
};
pub use packages::{PackageAppListOptions, PackageClient, PackageListOptions};

use crate::config::ClientConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpRequest, HttpResponse, Transport};
use crate::pagination::{AutoPager, Pager};
use crate::query::{with_query, ListQuery};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

/// Escape a caller-supplied GUID for use as one path segment or query value.
///
/// Empty values and dot segments are rejected: URL parsers resolve `..` even
/// when it is percent-encoded.
pub(crate) fn segment(guid: &str) -> Result<String> {
    if guid.is_empty() || guid == "." || guid == ".." {
        return Err(Error::invalid_guid(guid));
    }
    let escaped: String = form_urlencoded::byte_serialize(guid.as_bytes()).collect();
    Ok(escaped.replace('+', "%20"))
}

/// Typed entry point to the API
#[derive(Debug, Clone)]
pub struct Client<T: Transport = HttpClient> {
    transport: T,
    auto_pager: AutoPager,
    default_per_page: Option<u32>,
}

impl Client<HttpClient> {
    /// Build a reqwest-backed client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(transport)
            .with_auto_pager(config.auto_pager())
            .with_default_per_page(config.pagination.per_page))
    }
}

impl<T: Transport> Client<T> {
    /// Wrap a transport, with unlimited auto-paging
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            auto_pager: AutoPager::new(),
            default_per_page: None,
        }
    }

    /// Use `auto_pager` for every `*_all` call
    #[must_use]
    pub fn with_auto_pager(mut self, auto_pager: AutoPager) -> Self {
        self.auto_pager = auto_pager;
        self
    }

    /// Page size applied when list options leave `per_page` unset
    #[must_use]
    pub fn with_default_per_page(mut self, per_page: Option<u32>) -> Self {
        self.default_per_page = per_page;
        self
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Auto-pager used by `*_all` calls
    pub fn auto_pager(&self) -> AutoPager {
        self.auto_pager
    }

    /// Builds collection
    pub fn builds(&self) -> BuildClient<'_, T> {
        BuildClient::new(self)
    }

    /// Droplets collection
    pub fn droplets(&self) -> DropletClient<'_, T> {
        DropletClient::new(self)
    }

    /// Packages collection
    pub fn packages(&self) -> PackageClient<'_, T> {
        PackageClient::new(self)
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    /// Send a request and require a success status for its method
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        debug!(%method, path = %path, status = response.status, "api call");

        if !method.success_statuses().contains(&response.status) {
            return Err(Error::unexpected_status(
                method.as_str(),
                path,
                response.status,
                response.text(),
            ));
        }
        Ok(response)
    }

    /// Fetch one page of a collection
    pub(crate) async fn list_page<R, Q>(
        &self,
        path: &str,
        options: &Q,
        operation: &str,
    ) -> Result<(Vec<R>, Pager)>
    where
        R: DeserializeOwned,
        Q: ListQuery + Clone,
    {
        let url = match self.default_per_page {
            Some(per_page) if options.list_options().per_page.is_none() => {
                let mut options = options.clone();
                options.list_options_mut().per_page = Some(per_page);
                with_query(path, &options)
            }
            _ => with_query(path, options),
        };

        let response = self.execute(HttpRequest::get(url)).await?;
        let page = JsonDecoder::new(operation).page::<R>(&response.body)?;
        Ok(page.into_parts())
    }

    /// Fetch every page of a collection
    pub(crate) async fn list_all<R, Q, F, Fut>(&self, options: Q, fetch: F) -> Result<Vec<R>>
    where
        Q: ListQuery + Clone,
        F: FnMut(Q) -> Fut,
        Fut: std::future::Future<Output = Result<(Vec<R>, Pager)>>,
    {
        self.auto_pager.run(options, fetch).await
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str, operation: &str) -> Result<R> {
        let response = self.execute(HttpRequest::get(path)).await?;
        JsonDecoder::new(operation).resource(&response.body)
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        let response = self.execute(HttpRequest::get(path)).await?;
        Ok(response.body)
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B, operation: &str) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.execute(HttpRequest::post(path, body)).await?;
        JsonDecoder::new(operation).resource(&response.body)
    }

    pub(crate) async fn patch<B, R>(&self, path: &str, body: &B, operation: &str) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.execute(HttpRequest::patch(path, body)).await?;
        JsonDecoder::new(operation).resource(&response.body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.execute(HttpRequest::delete(path)).await?;
        if let Some(job) = response.header("location") {
            debug!(job, "delete accepted");
        }
        Ok(())
    }
}
