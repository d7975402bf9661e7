//! Pagination module
//!
//! Page decoding targets, the pager cursor, and the auto-paging driver.
//!
//! # Overview
//!
//! Every list response carries a [`Pagination`] block with `first`, `last`,
//! `next` and `previous` links. A [`Pager`] wraps one block and rewrites the
//! caller's list options so they point at a neighbouring page. [`AutoPager`]
//! repeats single-page fetches until the server stops sending a `next` link
//! and returns every resource in server order.
//!
//! The absence of a `next` link is the only end-of-list signal. A link that is
//! present but cannot be parsed is treated the same way: the pager reports no
//! further navigation rather than failing the traversal.

mod auto;
mod pager;
mod types;

pub use auto::{auto_page, AutoPager};
pub use pager::Pager;
pub use types::{Link, Page, Pagination};
