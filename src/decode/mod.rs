//! Response decoder module
//!
//! Decodes list responses into a [`Page`](crate::pagination::Page) and item
//! responses into a single typed resource.
//!
//! # Overview
//!
//! Every decode is tagged with the operation that requested it, so a failure
//! reads "Failed to decode list droplets response: ..." rather than a bare
//! serde message.

mod json;

pub use json::JsonDecoder;
