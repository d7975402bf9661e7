//! Query filter module
//!
//! Turns typed list options into the canonical query string sent to the API.
//!
//! # Overview
//!
//! Every list endpoint takes a base [`ListOptions`] (page, page size, ordering,
//! label and timestamp filters) plus resource-specific filters. Resource option
//! types describe their filterable fields through [`ListQuery::describe_filters`],
//! using a per-field [`Field`] table that carries the wire name and whether an
//! empty value is omitted. [`QueryBuilder`] applies the encoding rules:
//!
//! - empty strings, empty lists and unset booleans are omitted
//! - list filters are comma-joined under one key (`guids=a,b,c`)
//! - booleans render as `true`/`false` only when explicitly set
//! - keys are emitted in sorted order so the output is byte-stable

mod encoder;
mod types;

pub use encoder::{with_query, ListQuery, QueryBuilder};
pub use types::{
    Field, Filter, LabelSelector, ListOptions, OrderBy, Presence, TimestampFilter,
};
