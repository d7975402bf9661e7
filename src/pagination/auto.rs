//! Auto-paging driver
//!
//! Repeats a single-page fetch until the collection is exhausted.

use super::pager::Pager;
use crate::error::{Error, Result};
use crate::query::ListQuery;
use std::future::Future;
use tracing::debug;

/// Fetches every page of a collection, one request at a time
///
/// There is no page limit by default: a server that keeps returning a `next`
/// link keeps the loop going. [`AutoPager::with_max_pages`] opts into a hard
/// limit, after which the traversal fails with
/// [`Error::PageLimitExceeded`] instead of returning a truncated list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoPager {
    max_pages: Option<usize>,
}

impl AutoPager {
    /// Create an unlimited auto-pager
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail once more than `max_pages` pages would be fetched
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Set or clear the page limit
    #[must_use]
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Configured page limit
    pub fn page_limit(&self) -> Option<usize> {
        self.max_pages
    }

    /// Run a traversal starting from `options`.
    ///
    /// `fetch` receives the options for each page and returns that page's
    /// resources and pager. The next request is only built once the current
    /// one has resolved. The first error aborts the traversal and the
    /// resources collected so far are dropped.
    pub async fn run<O, T, F, Fut>(&self, mut options: O, mut fetch: F) -> Result<Vec<T>>
    where
        O: ListQuery + Clone,
        F: FnMut(O) -> Fut,
        Fut: Future<Output = Result<(Vec<T>, Pager)>>,
    {
        let mut results = Vec::new();
        let mut pages = 0usize;

        loop {
            if let Some(max_pages) = self.max_pages {
                if pages >= max_pages {
                    return Err(Error::PageLimitExceeded { max_pages });
                }
            }

            let (items, pager) = fetch(options.clone()).await?;
            pages += 1;
            debug!(
                page = pages,
                items = items.len(),
                total_results = pager.total_results(),
                "fetched page"
            );
            results.extend(items);

            if !pager.has_next() || !pager.advance_next(&mut options) {
                break;
            }
        }

        Ok(results)
    }
}

/// Fetch every page with no page limit. See [`AutoPager::run`].
pub async fn auto_page<O, T, F, Fut>(options: O, fetch: F) -> Result<Vec<T>>
where
    O: ListQuery + Clone,
    F: FnMut(O) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Pager)>>,
{
    AutoPager::new().run(options, fetch).await
}
