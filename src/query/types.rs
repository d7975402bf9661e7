//! Query option types
//!
//! Typed values that the encoder knows how to render.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Field table
// ============================================================================

/// Whether an empty value is left out of the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Omit the key when the value is empty or unset
    #[default]
    OmitEmpty,
    /// Always render the key, even as `key=`
    Required,
}

/// Wire description of one filterable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Query parameter name
    pub name: &'static str,
    /// Omission rule
    pub presence: Presence,
}

impl Field {
    /// A field that is dropped when empty
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::OmitEmpty,
        }
    }

    /// A field that is always rendered
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Required,
        }
    }

    /// Whether an empty value still renders
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A list-of-values filter such as `guids=a,b,c`
///
/// An exclusion filter renders under `key[not]` and asks the server for
/// everything except the listed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Values to match
    pub values: Vec<String>,
    /// Render as an exclusion (`key[not]=...`)
    pub exclude: bool,
}

impl Filter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter matching any of the given values
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            exclude: false,
        }
    }

    /// Create a filter excluding the given values
    pub fn not<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: true,
            ..Self::of(values)
        }
    }

    /// Add a value
    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Builder-style variant of [`Filter::push`]
    #[must_use]
    pub fn and(mut self, value: impl Into<String>) -> Self {
        self.push(value);
        self
    }

    /// Check whether the filter has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Filter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl From<Vec<String>> for Filter {
    fn from(values: Vec<String>) -> Self {
        Self {
            values,
            exclude: false,
        }
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Ordering directive, rendered as `field` or `-field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Field to order by (e.g. `created_at`)
    pub field: String,
    /// Descending order
    pub descending: bool,
}

impl OrderBy {
    /// Ascending order on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending order on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

impl FromStr for OrderBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(s.strip_prefix('+').unwrap_or(s)),
        })
    }
}

// ============================================================================
// Label selector
// ============================================================================

/// Label selector, rendered as comma-separated requirements
///
/// ```text
/// label_selector=env=prod,tier!=backend,!legacy
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    requirements: Vec<String>,
}

impl LabelSelector {
    /// Create an empty selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key=value`
    #[must_use]
    pub fn equals(mut self, key: &str, value: &str) -> Self {
        self.requirements.push(format!("{key}={value}"));
        self
    }

    /// Require `key!=value`
    #[must_use]
    pub fn not_equals(mut self, key: &str, value: &str) -> Self {
        self.requirements.push(format!("{key}!={value}"));
        self
    }

    /// Require the label to be present
    #[must_use]
    pub fn exists(mut self, key: &str) -> Self {
        self.requirements.push(key.to_string());
        self
    }

    /// Require the label to be absent
    #[must_use]
    pub fn not_exists(mut self, key: &str) -> Self {
        self.requirements.push(format!("!{key}"));
        self
    }

    /// Require the label value to be one of `values`
    #[must_use]
    pub fn in_set(mut self, key: &str, values: &[&str]) -> Self {
        self.requirements
            .push(format!("{key} in ({})", values.join(",")));
        self
    }

    /// Require the label value to be none of `values`
    #[must_use]
    pub fn not_in_set(mut self, key: &str, values: &[&str]) -> Self {
        self.requirements
            .push(format!("{key} notin ({})", values.join(",")));
        self
    }

    /// Requirements in insertion order
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// Check whether no requirement was added
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

// ============================================================================
// Timestamp filter
// ============================================================================

/// Filter on a timestamp field such as `created_ats`
///
/// Exact matches render comma-joined under the bare key; relational bounds
/// render under `key[lt]`, `key[lte]`, `key[gt]` and `key[gte]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampFilter {
    /// Exact timestamps to match
    pub exact: Vec<DateTime<Utc>>,
    /// Strictly before
    pub lt: Option<DateTime<Utc>>,
    /// At or before
    pub lte: Option<DateTime<Utc>>,
    /// Strictly after
    pub gt: Option<DateTime<Utc>>,
    /// At or after
    pub gte: Option<DateTime<Utc>>,
}

impl TimestampFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Match any of the exact timestamps
    pub fn at<I: IntoIterator<Item = DateTime<Utc>>>(timestamps: I) -> Self {
        Self {
            exact: timestamps.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Strictly before `ts`
    #[must_use]
    pub fn before(mut self, ts: DateTime<Utc>) -> Self {
        self.lt = Some(ts);
        self
    }

    /// At or before `ts`
    #[must_use]
    pub fn until(mut self, ts: DateTime<Utc>) -> Self {
        self.lte = Some(ts);
        self
    }

    /// Strictly after `ts`
    #[must_use]
    pub fn after(mut self, ts: DateTime<Utc>) -> Self {
        self.gt = Some(ts);
        self
    }

    /// At or after `ts`
    #[must_use]
    pub fn since(mut self, ts: DateTime<Utc>) -> Self {
        self.gte = Some(ts);
        self
    }

    /// Check whether nothing is set
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.lt.is_none()
            && self.lte.is_none()
            && self.gt.is_none()
            && self.gte.is_none()
    }

    /// Relational bounds as `(operator, timestamp)` pairs
    pub(crate) fn bounds(&self) -> impl Iterator<Item = (&'static str, &DateTime<Utc>)> {
        [
            ("lt", self.lt.as_ref()),
            ("lte", self.lte.as_ref()),
            ("gt", self.gt.as_ref()),
            ("gte", self.gte.as_ref()),
        ]
        .into_iter()
        .filter_map(|(op, ts)| ts.map(|ts| (op, ts)))
    }
}

/// Wire format for timestamps (`2024-01-31T12:00:00Z`)
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================================
// ListOptions
// ============================================================================

/// Base options shared by every list endpoint
///
/// A `ListOptions` value belongs to a single traversal: the pager rewrites
/// `page` and `per_page` in place between fetches, so sharing one value across
/// concurrent traversals gives undefined page sequences. Clone it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based page number; `None` lets the server pick the first page
    pub page: Option<u32>,
    /// Page size; `None` lets the server pick its default
    pub per_page: Option<u32>,
    /// Ordering directive
    pub order_by: Option<OrderBy>,
    /// Label selector
    pub label_selector: LabelSelector,
    /// Creation time filter
    pub created_ats: TimestampFilter,
    /// Update time filter
    pub updated_ats: TimestampFilter,
}

impl ListOptions {
    pub(crate) const PAGE: Field = Field::optional("page");
    pub(crate) const PER_PAGE: Field = Field::optional("per_page");
    pub(crate) const ORDER_BY: Field = Field::optional("order_by");
    pub(crate) const LABEL_SELECTOR: Field = Field::optional("label_selector");
    pub(crate) const CREATED_ATS: Field = Field::optional("created_ats");
    pub(crate) const UPDATED_ATS: Field = Field::optional("updated_ats");

    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the ordering
    #[must_use]
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Set the label selector
    #[must_use]
    pub fn with_label_selector(mut self, selector: LabelSelector) -> Self {
        self.label_selector = selector;
        self
    }

    /// Set the creation time filter
    #[must_use]
    pub fn with_created_ats(mut self, filter: TimestampFilter) -> Self {
        self.created_ats = filter;
        self
    }

    /// Set the update time filter
    #[must_use]
    pub fn with_updated_ats(mut self, filter: TimestampFilter) -> Self {
        self.updated_ats = filter;
        self
    }
}
