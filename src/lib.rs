// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # cf-client
//!
//! Typed client for Cloud Foundry V3 style REST collections (builds,
//! droplets, packages), built around one generic pagination and query-filter
//! engine.
//!
//! ## Features
//!
//! - **Typed Filters**: list options render to a canonical, sorted query string
//! - **Pagination**: resume from any page by feeding `next`/`previous` links back into the options
//! - **Auto-Paging**: `*_all` calls walk every page sequentially
//! - **Pluggable Transport**: reqwest by default, any [`http::Transport`] in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cf_client::client::{BuildListOptions, Client};
//! use cf_client::config::ClientConfig;
//! use cf_client::query::Filter;
//!
//! # async fn run() -> cf_client::Result<()> {
//! let config = ClientConfig::from_file("cf.yaml")?.with_env_overrides();
//! let client = Client::from_config(&config)?;
//!
//! let opts = BuildListOptions {
//!     states: Filter::of(["STAGED"]),
//!     ..BuildListOptions::default()
//! };
//! for build in client.builds().list_all(Some(opts)).await? {
//!     println!("{} {}", build.guid, build.state);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │        BuildClient     DropletClient     PackageClient          │
//! │   create  get  update  delete  list  list_all  list_for_*       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┼───────────────┬─────────────────┐
//! │    Query     │  Pagination   │    Decode     │    Transport    │
//! ├──────────────┼───────────────┼───────────────┼─────────────────┤
//! │ ListOptions  │ Pager         │ Page<T>       │ Transport trait │
//! │ Filter       │ AutoPager     │ JsonDecoder   │ HttpClient      │
//! │ ListQuery    │ Link          │               │ Rate Limit      │
//! └──────────────┴───────────────┴───────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// List options and query string encoding
pub mod query;

/// Pagination blocks, pager and auto-paging
pub mod pagination;

/// Response decoding
pub mod decode;

/// HTTP transport with rate limiting
pub mod http;

/// Resource models
pub mod resource;

/// API client and per-resource clients
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{AutoPager, Pager};
pub use query::{Filter, ListOptions, ListQuery};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
