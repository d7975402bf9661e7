//! Pagination types
//!
//! Wire shapes of the pagination block and of one decoded page.

use super::pager::Pager;
use serde::{Deserialize, Deserializer, Serialize};

/// A hypermedia link (`{"href": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    /// HTTP method, for links that are actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Link {
    /// Create a link to `href`
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }
}

/// Pagination block attached to every list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of resources across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u32,
    /// Number of pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    /// First page
    #[serde(default)]
    pub first: Option<Link>,
    /// Last page
    #[serde(default)]
    pub last: Option<Link>,
    /// Next page; absent on the last page
    #[serde(default)]
    pub next: Option<Link>,
    /// Previous page; absent on the first page
    #[serde(default)]
    pub previous: Option<Link>,
}

/// Read an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pagination block
    pub pagination: Pagination,
    /// Resources in server order
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// Split into the resources and a pager over this page's links
    pub fn into_parts(self) -> (Vec<T>, Pager) {
        (self.resources, Pager::new(self.pagination))
    }
}
