//! Pager cursor
//!
//! Navigates between pages by copying the page coordinates of a server link
//! back into the caller's list options.

use super::types::{Link, Pagination};
use crate::query::ListQuery;
use tracing::warn;
use url::Url;

const PAGE_PARAM: &str = "page";
const PER_PAGE_PARAM: &str = "per_page";

/// Base used to resolve links the server sends as bare paths
const RELATIVE_BASE: &str = "http://localhost/";

/// Navigation view over one page's pagination block
///
/// A pager describes a single response and is replaced on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    pagination: Pagination,
}

impl Pager {
    /// Wrap a pagination block
    pub fn new(pagination: Pagination) -> Self {
        Self { pagination }
    }

    /// The wrapped pagination block
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Total number of resources reported by the server
    pub fn total_results(&self) -> u32 {
        self.pagination.total_results
    }

    /// Total number of pages reported by the server
    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages
    }

    /// Check whether a next page link is present
    pub fn has_next(&self) -> bool {
        is_present(self.pagination.next.as_ref())
    }

    /// Check whether a previous page link is present
    pub fn has_previous(&self) -> bool {
        is_present(self.pagination.previous.as_ref())
    }

    /// Check whether a first page link is present
    pub fn has_first(&self) -> bool {
        is_present(self.pagination.first.as_ref())
    }

    /// Check whether a last page link is present
    pub fn has_last(&self) -> bool {
        is_present(self.pagination.last.as_ref())
    }

    /// Point `options` at the next page.
    ///
    /// Only `page` and `per_page` are taken from the link; filters stay as the
    /// caller set them. Returns `false` and leaves `options` untouched when
    /// there is no next link or the link cannot be parsed.
    pub fn advance_next<Q: ListQuery + ?Sized>(&self, options: &mut Q) -> bool {
        advance(self.pagination.next.as_ref(), "next", options)
    }

    /// Point `options` at the previous page. See [`Pager::advance_next`].
    pub fn advance_previous<Q: ListQuery + ?Sized>(&self, options: &mut Q) -> bool {
        advance(self.pagination.previous.as_ref(), "previous", options)
    }

    /// Point `options` at the first page
    pub fn first_page<Q: ListQuery + ?Sized>(&self, options: &mut Q) -> bool {
        advance(self.pagination.first.as_ref(), "first", options)
    }

    /// Point `options` at the last page
    pub fn last_page<Q: ListQuery + ?Sized>(&self, options: &mut Q) -> bool {
        advance(self.pagination.last.as_ref(), "last", options)
    }
}

fn is_present(link: Option<&Link>) -> bool {
    link.is_some_and(|l| !l.href.is_empty())
}

fn advance<Q: ListQuery + ?Sized>(link: Option<&Link>, rel: &str, options: &mut Q) -> bool {
    let Some(link) = link.filter(|l| !l.href.is_empty()) else {
        return false;
    };

    match page_coordinates(&link.href) {
        Some((page, per_page)) => {
            let base = options.list_options_mut();
            base.page = page;
            base.per_page = per_page;
            true
        }
        None => {
            warn!(rel, href = %link.href, "ignoring malformed pagination link");
            false
        }
    }
}

/// Extract `(page, per_page)` from a link.
///
/// Missing, non-numeric and zero values come back as `None`. Returns `None`
/// overall only when the link itself is not a URL.
fn page_coordinates(href: &str) -> Option<(Option<u32>, Option<u32>)> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).ok()?.join(href).ok()?
        }
        Err(_) => return None,
    };

    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.parse::<u32>().ok())
            .filter(|n| *n > 0)
    };

    Some((param(PAGE_PARAM), param(PER_PAGE_PARAM)))
}

#[cfg(test)]
mod pager_tests {
    use super::*;

    #[test]
    fn test_page_coordinates_absolute() {
        assert_eq!(
            page_coordinates("https://api.example.com/v3/builds?page=3&per_page=10"),
            Some((Some(3), Some(10)))
        );
    }

    #[test]
    fn test_page_coordinates_relative() {
        assert_eq!(
            page_coordinates("/v3/builds?per_page=5&page=2&states=STAGED"),
            Some((Some(2), Some(5)))
        );
    }

    #[test]
    fn test_page_coordinates_missing_or_garbage() {
        assert_eq!(
            page_coordinates("https://api.example.com/v3/builds?page=abc"),
            Some((None, None))
        );
        assert_eq!(
            page_coordinates("https://api.example.com/v3/builds?page=0&per_page=-1"),
            Some((None, None))
        );
    }

    #[test]
    fn test_page_coordinates_malformed() {
        assert_eq!(page_coordinates("http://[not-an-ip/v3/builds?page=2"), None);
    }
}
