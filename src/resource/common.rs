//! Shapes shared by every resource

use crate::pagination::Link;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named hypermedia links (`self`, `app`, `download`, ...)
pub type Links = HashMap<String, Link>;

/// User-defined labels and annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Selectable key/value labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Free-form annotations
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,
}

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add an annotation
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// True if there are no labels and no annotations
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.annotations.is_empty()
    }
}

/// Reference to another resource by GUID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub guid: String,
}

impl Relationship {
    pub fn new(guid: impl Into<String>) -> Self {
        Self { guid: guid.into() }
    }
}

/// `{"data": {"guid": ...}}`, with `data: null` for an empty association
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToOneRelationship {
    #[serde(default)]
    pub data: Option<Relationship>,
}

impl ToOneRelationship {
    /// Relationship pointing at `guid`
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            data: Some(Relationship::new(guid)),
        }
    }

    /// Target GUID, if the relationship is set
    pub fn guid(&self) -> Option<&str> {
        self.data.as_ref().map(|r| r.guid.as_str())
    }
}

/// Relationships block of resources owned by an app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRelationships {
    pub app: ToOneRelationship,
}

impl AppRelationships {
    pub fn new(app_guid: impl Into<String>) -> Self {
        Self {
            app: ToOneRelationship::new(app_guid),
        }
    }
}

/// Buildpack or docker lifecycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    /// `buildpack`, `cnb` or `docker`
    #[serde(rename = "type")]
    pub kind: String,
    /// Lifecycle specific settings
    #[serde(default)]
    pub data: JsonValue,
}

/// Content checksum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    /// Hash algorithm, e.g. `sha256`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: Option<String>,
}
