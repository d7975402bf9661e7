//! Packages endpoints

use super::{segment, Client};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::Pager;
use crate::query::{Field, Filter, ListOptions, ListQuery, QueryBuilder};
use crate::resource::{DockerCredentials, Package, PackageCopy, PackageCreate, PackageUpdate};

/// Filters for `GET /v3/packages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageListOptions {
    pub list: ListOptions,
    pub guids: Filter,
    pub states: Filter,
    /// `bits` or `docker`
    pub types: Filter,
    pub app_guids: Filter,
    pub space_guids: Filter,
    pub organization_guids: Filter,
}

impl PackageListOptions {
    const GUIDS: Field = Field::optional("guids");
    const STATES: Field = Field::optional("states");
    const TYPES: Field = Field::optional("types");
    const APP_GUIDS: Field = Field::optional("app_guids");
    const SPACE_GUIDS: Field = Field::optional("space_guids");
    const ORGANIZATION_GUIDS: Field = Field::optional("organization_guids");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for PackageListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }

    fn describe_filters(&self, query: &mut QueryBuilder) {
        query
            .list(Self::GUIDS, &self.guids)
            .list(Self::STATES, &self.states)
            .list(Self::TYPES, &self.types)
            .list(Self::APP_GUIDS, &self.app_guids)
            .list(Self::SPACE_GUIDS, &self.space_guids)
            .list(Self::ORGANIZATION_GUIDS, &self.organization_guids);
    }
}

/// Filters for `GET /v3/apps/{guid}/packages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageAppListOptions {
    pub list: ListOptions,
    pub guids: Filter,
    pub states: Filter,
    pub types: Filter,
}

impl PackageAppListOptions {
    const GUIDS: Field = Field::optional("guids");
    const STATES: Field = Field::optional("states");
    const TYPES: Field = Field::optional("types");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for PackageAppListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }

    fn describe_filters(&self, query: &mut QueryBuilder) {
        query
            .list(Self::GUIDS, &self.guids)
            .list(Self::STATES, &self.states)
            .list(Self::TYPES, &self.types);
    }
}

/// Client for the packages collection
#[derive(Debug)]
pub struct PackageClient<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> PackageClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    pub async fn create(&self, body: &PackageCreate) -> Result<Package> {
        self.client
            .post("/v3/packages", body, "create package")
            .await
    }

    /// Create a docker package for `app_guid` from `image`
    pub async fn create_docker(
        &self,
        app_guid: &str,
        image: &str,
        credentials: Option<DockerCredentials>,
    ) -> Result<Package> {
        self.create(&PackageCreate::docker(app_guid, image, credentials))
            .await
    }

    pub async fn get(&self, guid: &str) -> Result<Package> {
        self.client
            .get(&format!("/v3/packages/{}", segment(guid)?), "get package")
            .await
    }

    pub async fn update(&self, guid: &str, body: &PackageUpdate) -> Result<Package> {
        self.client
            .patch(&format!("/v3/packages/{}", segment(guid)?), body, "update package")
            .await
    }

    pub async fn delete(&self, guid: &str) -> Result<()> {
        self.client.delete(&format!("/v3/packages/{}", segment(guid)?)).await
    }

    /// Copy the bits of `source_guid` into a new package owned by `app_guid`
    pub async fn copy(&self, source_guid: &str, app_guid: &str) -> Result<Package> {
        self.client
            .post(
                &format!("/v3/packages?source_guid={}", segment(source_guid)?),
                &PackageCopy::new(app_guid),
                "copy package",
            )
            .await
    }

    /// One page of packages
    pub async fn list(&self, opts: Option<&PackageListOptions>) -> Result<(Vec<Package>, Pager)> {
        let default = PackageListOptions::default();
        self.client
            .list_page("/v3/packages", opts.unwrap_or(&default), "list packages")
            .await
    }

    /// Every package matching `opts`
    pub async fn list_all(&self, opts: Option<PackageListOptions>) -> Result<Vec<Package>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list(Some(&opts)).await
            })
            .await
    }

    /// One page of an app's packages
    pub async fn list_for_app(
        &self,
        app_guid: &str,
        opts: Option<&PackageAppListOptions>,
    ) -> Result<(Vec<Package>, Pager)> {
        let default = PackageAppListOptions::default();
        self.client
            .list_page(
                &format!("/v3/apps/{}/packages", segment(app_guid)?),
                opts.unwrap_or(&default),
                "list packages for app",
            )
            .await
    }

    pub async fn list_for_app_all(
        &self,
        app_guid: &str,
        opts: Option<PackageAppListOptions>,
    ) -> Result<Vec<Package>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list_for_app(app_guid, Some(&opts)).await
            })
            .await
    }
}
