//! Droplet resource
//!
//! A droplet is the staged, runnable result of a build.

use super::common::{AppRelationships, Checksum, Lifecycle, Links, Metadata, Relationship};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Staged application artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    pub guid: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// `AWAITING_UPLOAD`, `PROCESSING_UPLOAD`, `STAGED`, `COPYING`, `FAILED` or `EXPIRED`
    pub state: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub lifecycle: Option<Lifecycle>,
    #[serde(default)]
    pub execution_metadata: Option<String>,
    /// Process type to start command
    #[serde(default)]
    pub process_types: HashMap<String, String>,
    #[serde(default)]
    pub checksum: Option<Checksum>,
    #[serde(default)]
    pub buildpacks: Vec<DetectedBuildpack>,
    #[serde(default)]
    pub stack: Option<String>,
    /// Docker image, for docker lifecycle droplets
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub relationships: Option<AppRelationships>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

/// Buildpack detected while staging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedBuildpack {
    pub name: String,
    #[serde(default)]
    pub detect_output: Option<String>,
    #[serde(default)]
    pub buildpack_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Request body for creating a droplet to upload bits into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropletCreate {
    pub relationships: AppRelationships,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_types: Option<HashMap<String, String>>,
}

impl DropletCreate {
    /// Droplet owned by `app_guid`
    pub fn new(app_guid: impl Into<String>) -> Self {
        Self {
            relationships: AppRelationships::new(app_guid),
            process_types: None,
        }
    }

    #[must_use]
    pub fn with_process_type(mut self, kind: impl Into<String>, command: impl Into<String>) -> Self {
        self.process_types
            .get_or_insert_with(HashMap::new)
            .insert(kind.into(), command.into());
        self
    }
}

/// Request body for updating a droplet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropletUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DropletUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Request body for copying a droplet into another app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropletCopy {
    pub relationships: AppRelationships,
}

impl DropletCopy {
    /// Copy into `app_guid`
    pub fn new(app_guid: impl Into<String>) -> Self {
        Self {
            relationships: AppRelationships::new(app_guid),
        }
    }
}

/// An app's current droplet relationship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropletCurrent {
    #[serde(default)]
    pub data: Option<Relationship>,
    #[serde(default)]
    pub links: Links,
}

impl DropletCurrent {
    /// GUID of the current droplet, if one is set
    pub fn guid(&self) -> Option<&str> {
        self.data.as_ref().map(|r| r.guid.as_str())
    }
}
