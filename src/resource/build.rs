//! Build resource
//!
//! A build stages a package into a droplet.

use super::common::{Lifecycle, Links, Metadata, Relationship};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staging run of one package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub guid: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// `STAGING`, `STAGED` or `FAILED`
    pub state: String,
    #[serde(default)]
    pub staging_memory_in_mb: Option<u32>,
    #[serde(default)]
    pub staging_disk_in_mb: Option<u32>,
    #[serde(default)]
    pub staging_log_rate_limit_bytes_per_second: Option<i64>,
    /// Failure reason when `state` is `FAILED`
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub lifecycle: Option<Lifecycle>,
    /// Package being staged
    pub package: Relationship,
    /// Resulting droplet, once staged
    #[serde(default)]
    pub droplet: Option<Relationship>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

/// User who started a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBy {
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Request body for creating a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildCreate {
    pub package: Relationship,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_memory_in_mb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_disk_in_mb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl BuildCreate {
    /// Stage the package `package_guid`
    pub fn new(package_guid: impl Into<String>) -> Self {
        Self {
            package: Relationship::new(package_guid),
            lifecycle: None,
            staging_memory_in_mb: None,
            staging_disk_in_mb: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    #[must_use]
    pub fn with_staging_memory_in_mb(mut self, mb: u32) -> Self {
        self.staging_memory_in_mb = Some(mb);
        self
    }

    #[must_use]
    pub fn with_staging_disk_in_mb(mut self, mb: u32) -> Self {
        self.staging_disk_in_mb = Some(mb);
        self
    }
}

/// Request body for updating a build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildUpdate {
    pub metadata: Metadata,
}

impl BuildUpdate {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}
