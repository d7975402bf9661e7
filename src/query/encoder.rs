//! Query string encoder
//!
//! Renders typed list options into a canonical, sorted query string.

use super::types::{format_timestamp, Field, Filter, LabelSelector, ListOptions, TimestampFilter};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Collects encoded query parameters in sorted key order
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: BTreeMap<String, String>,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a scalar string field
    pub fn scalar(&mut self, field: Field, value: &str) -> &mut Self {
        if !value.is_empty() || field.is_required() {
            self.insert(field.name, escape(value));
        }
        self
    }

    /// Render a list filter as one comma-joined value
    ///
    /// Elements are escaped one by one so the separating commas stay literal.
    pub fn list(&mut self, field: Field, filter: &Filter) -> &mut Self {
        if filter.is_empty() && !field.is_required() {
            return self;
        }
        let joined = filter
            .values
            .iter()
            .map(|v| escape(v))
            .collect::<Vec<_>>()
            .join(",");
        if filter.exclude {
            self.insert(format!("{}[not]", field.name), joined);
        } else {
            self.insert(field.name, joined);
        }
        self
    }

    /// Render a boolean presence field; `None` means not provided
    pub fn flag(&mut self, field: Field, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.insert(field.name, value.to_string());
        }
        self
    }

    /// Render a numeric field; zero counts as unset
    pub fn number(&mut self, field: Field, value: Option<u32>) -> &mut Self {
        match value {
            Some(n) if n != 0 => {
                self.insert(field.name, n.to_string());
            }
            _ if field.is_required() => {
                self.insert(field.name, String::new());
            }
            _ => {}
        }
        self
    }

    /// Render a timestamp filter under `key` and `key[op]`
    pub fn timestamps(&mut self, field: Field, filter: &TimestampFilter) -> &mut Self {
        if !filter.exact.is_empty() {
            let joined = filter
                .exact
                .iter()
                .map(|ts| escape(&format_timestamp(ts)))
                .collect::<Vec<_>>()
                .join(",");
            self.insert(field.name, joined);
        }
        for (op, ts) in filter.bounds() {
            self.insert(
                format!("{}[{op}]", field.name),
                escape(&format_timestamp(ts)),
            );
        }
        self
    }

    /// Render a label selector
    pub fn labels(&mut self, field: Field, selector: &LabelSelector) -> &mut Self {
        if !selector.is_empty() {
            let joined = selector
                .requirements()
                .iter()
                .map(|r| escape(r))
                .collect::<Vec<_>>()
                .join(",");
            self.insert(field.name, joined);
        }
        self
    }

    /// Encoded value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Check whether nothing was rendered
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Join the parameters into `k=v&k=v`
    pub fn finish(self) -> String {
        self.params
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn insert(&mut self, key: impl Into<String>, value: String) {
        self.params.insert(key.into(), value);
    }
}

fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Options for a list endpoint
///
/// Implementors expose their base [`ListOptions`] and describe their own
/// filter fields; the encoder and the pager work through this trait only.
pub trait ListQuery {
    /// Base pagination options
    fn list_options(&self) -> &ListOptions;

    /// Mutable base pagination options, rewritten by the pager
    fn list_options_mut(&mut self) -> &mut ListOptions;

    /// Write resource-specific filters
    fn describe_filters(&self, _query: &mut QueryBuilder) {}

    /// Render the full query string without a leading `?`
    fn to_query_string(&self) -> String {
        let mut query = QueryBuilder::new();
        let base = self.list_options();
        query
            .number(ListOptions::PAGE, base.page)
            .number(ListOptions::PER_PAGE, base.per_page)
            .labels(ListOptions::LABEL_SELECTOR, &base.label_selector)
            .timestamps(ListOptions::CREATED_ATS, &base.created_ats)
            .timestamps(ListOptions::UPDATED_ATS, &base.updated_ats);
        if let Some(order_by) = &base.order_by {
            query.scalar(ListOptions::ORDER_BY, &order_by.to_string());
        }
        self.describe_filters(&mut query);
        query.finish()
    }
}

impl ListQuery for ListOptions {
    fn list_options(&self) -> &ListOptions {
        self
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        self
    }
}

/// Append the rendered query to a path, skipping `?` when there is nothing to add
pub fn with_query<Q: ListQuery + ?Sized>(path: &str, options: &Q) -> String {
    let query = options.to_query_string();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
