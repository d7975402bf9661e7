//! Resource models
//!
//! Serde shapes of the builds, droplets and packages collections, plus the
//! request bodies sent to create, update and copy them. Fields the server
//! may omit are optional; unknown fields are ignored.

mod build;
mod common;
mod droplet;
mod package;

pub use build::{Build, BuildCreate, BuildUpdate, CreatedBy};
pub use common::{
    AppRelationships, Checksum, Lifecycle, Links, Metadata, Relationship, ToOneRelationship,
};
pub use droplet::{
    DetectedBuildpack, Droplet, DropletCopy, DropletCreate, DropletCurrent, DropletUpdate,
};
pub use package::{
    DockerCredentials, DockerPackageData, Package, PackageCopy, PackageCreate, PackageType,
    PackageUpdate,
};
