//! Package resource
//!
//! A package holds an app's source bits or a docker image reference.

use super::common::{AppRelationships, Links, Metadata};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Bits,
    Docker,
}

impl PackageType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Bits => "bits",
            PackageType::Docker => "docker",
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// App source bits or docker image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub guid: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: PackageType,
    /// Type specific data: checksum and error for bits, image for docker
    #[serde(default)]
    pub data: JsonValue,
    /// `AWAITING_UPLOAD`, `PROCESSING_UPLOAD`, `READY`, `FAILED`, `COPYING` or `EXPIRED`
    pub state: String,
    #[serde(default)]
    pub relationships: Option<AppRelationships>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

/// Registry credentials for a private docker image
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerCredentials {
    pub username: String,
    pub password: String,
}

impl DockerCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for DockerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockerCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// `data` block of a docker package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerPackageData {
    pub image: String,
    #[serde(flatten)]
    pub credentials: Option<DockerCredentials>,
}

/// Request body for creating a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageCreate {
    #[serde(rename = "type")]
    pub kind: PackageType,
    pub relationships: AppRelationships,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DockerPackageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PackageCreate {
    /// Bits package for `app_guid`, awaiting upload
    pub fn new(app_guid: impl Into<String>) -> Self {
        Self {
            kind: PackageType::Bits,
            relationships: AppRelationships::new(app_guid),
            data: None,
            metadata: None,
        }
    }

    /// Docker package for `app_guid` pointing at `image`
    pub fn docker(
        app_guid: impl Into<String>,
        image: impl Into<String>,
        credentials: Option<DockerCredentials>,
    ) -> Self {
        Self {
            kind: PackageType::Docker,
            relationships: AppRelationships::new(app_guid),
            data: Some(DockerPackageData {
                image: image.into(),
                credentials,
            }),
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Request body for updating a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PackageUpdate {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
        }
    }
}

/// Request body for copying a package into another app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageCopy {
    pub relationships: AppRelationships,
}

impl PackageCopy {
    pub fn new(app_guid: impl Into<String>) -> Self {
        Self {
            relationships: AppRelationships::new(app_guid),
        }
    }
}
