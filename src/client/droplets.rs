//! Droplets endpoints

use super::{segment, Client};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::Pager;
use crate::query::{Field, Filter, ListOptions, ListQuery, QueryBuilder};
use crate::resource::{
    Droplet, DropletCopy, DropletCreate, DropletCurrent, DropletUpdate, ToOneRelationship,
};
use bytes::Bytes;

/// Filters for `GET /v3/droplets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropletListOptions {
    pub list: ListOptions,
    pub guids: Filter,
    pub states: Filter,
    pub app_guids: Filter,
    pub space_guids: Filter,
    pub organization_guids: Filter,
}

impl DropletListOptions {
    const GUIDS: Field = Field::optional("guids");
    const STATES: Field = Field::optional("states");
    const APP_GUIDS: Field = Field::optional("app_guids");
    const SPACE_GUIDS: Field = Field::optional("space_guids");
    const ORGANIZATION_GUIDS: Field = Field::optional("organization_guids");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for DropletListOptions {
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
            .list(Self::APP_GUIDS, &self.app_guids)
            .list(Self::SPACE_GUIDS, &self.space_guids)
            .list(Self::ORGANIZATION_GUIDS, &self.organization_guids);
    }
}

/// Filters for `GET /v3/apps/{guid}/droplets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropletAppListOptions {
    pub list: ListOptions,
    pub guids: Filter,
    pub states: Filter,
    /// Only the droplet currently assigned to the app
    pub current: Option<bool>,
}

impl DropletAppListOptions {
    const GUIDS: Field = Field::optional("guids");
    const STATES: Field = Field::optional("states");
    const CURRENT: Field = Field::optional("current");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for DropletAppListOptions {
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
            .flag(Self::CURRENT, self.current);
    }
}

/// Filters for `GET /v3/packages/{guid}/droplets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropletPackageListOptions {
    pub list: ListOptions,
    pub guids: Filter,
    pub states: Filter,
}

impl DropletPackageListOptions {
    const GUIDS: Field = Field::optional("guids");
    const STATES: Field = Field::optional("states");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for DropletPackageListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }

    fn describe_filters(&self, query: &mut QueryBuilder) {
        query
            .list(Self::GUIDS, &self.guids)
            .list(Self::STATES, &self.states);
    }
}

/// Client for the droplets collection
#[derive(Debug)]
pub struct DropletClient<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> DropletClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Create an empty droplet awaiting bits
    pub async fn create(&self, body: &DropletCreate) -> Result<Droplet> {
        self.client
            .post("/v3/droplets", body, "create droplet")
            .await
    }

    pub async fn get(&self, guid: &str) -> Result<Droplet> {
        self.client
            .get(&format!("/v3/droplets/{}", segment(guid)?), "get droplet")
            .await
    }

    pub async fn update(&self, guid: &str, body: &DropletUpdate) -> Result<Droplet> {
        self.client
            .patch(&format!("/v3/droplets/{}", segment(guid)?), body, "update droplet")
            .await
    }

    pub async fn delete(&self, guid: &str) -> Result<()> {
        self.client.delete(&format!("/v3/droplets/{}", segment(guid)?)).await
    }

    /// Copy `source_guid` into the app `app_guid`
    ///
    /// The copy starts in the `COPYING` state.
    pub async fn copy(&self, source_guid: &str, app_guid: &str) -> Result<Droplet> {
        self.client
            .post(
                &format!("/v3/droplets?source_guid={}", segment(source_guid)?),
                &DropletCopy::new(app_guid),
                "copy droplet",
            )
            .await
    }

    /// Download the droplet tarball
    pub async fn download(&self, guid: &str) -> Result<Bytes> {
        self.client
            .get_bytes(&format!("/v3/droplets/{}/download", segment(guid)?))
            .await
    }

    /// One page of droplets
    pub async fn list(&self, opts: Option<&DropletListOptions>) -> Result<(Vec<Droplet>, Pager)> {
        let default = DropletListOptions::default();
        self.client
            .list_page("/v3/droplets", opts.unwrap_or(&default), "list droplets")
            .await
    }

    /// Every droplet matching `opts`
    pub async fn list_all(&self, opts: Option<DropletListOptions>) -> Result<Vec<Droplet>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list(Some(&opts)).await
            })
            .await
    }

    /// One page of an app's droplets
    pub async fn list_for_app(
        &self,
        app_guid: &str,
        opts: Option<&DropletAppListOptions>,
    ) -> Result<(Vec<Droplet>, Pager)> {
        let default = DropletAppListOptions::default();
        self.client
            .list_page(
                &format!("/v3/apps/{}/droplets", segment(app_guid)?),
                opts.unwrap_or(&default),
                "list droplets for app",
            )
            .await
    }

    pub async fn list_for_app_all(
        &self,
        app_guid: &str,
        opts: Option<DropletAppListOptions>,
    ) -> Result<Vec<Droplet>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list_for_app(app_guid, Some(&opts)).await
            })
            .await
    }

    /// One page of droplets staged from a package
    pub async fn list_for_package(
        &self,
        package_guid: &str,
        opts: Option<&DropletPackageListOptions>,
    ) -> Result<(Vec<Droplet>, Pager)> {
        let default = DropletPackageListOptions::default();
        self.client
            .list_page(
                &format!("/v3/packages/{}/droplets", segment(package_guid)?),
                opts.unwrap_or(&default),
                "list droplets for package",
            )
            .await
    }

    pub async fn list_for_package_all(
        &self,
        package_guid: &str,
        opts: Option<DropletPackageListOptions>,
    ) -> Result<Vec<Droplet>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list_for_package(package_guid, Some(&opts)).await
            })
            .await
    }

    /// The droplet an app currently runs
    pub async fn get_current_for_app(&self, app_guid: &str) -> Result<Droplet> {
        self.client
            .get(
                &format!("/v3/apps/{}/droplets/current", segment(app_guid)?),
                "get current droplet for app",
            )
            .await
    }

    /// The app's current droplet relationship, without the droplet itself
    pub async fn get_current_association_for_app(&self, app_guid: &str) -> Result<DropletCurrent> {
        self.client
            .get(
                &format!("/v3/apps/{}/relationships/current_droplet", segment(app_guid)?),
                "get current droplet association for app",
            )
            .await
    }

    /// Point the app at `droplet_guid`; takes effect on the next restart
    pub async fn set_current_association_for_app(
        &self,
        app_guid: &str,
        droplet_guid: &str,
    ) -> Result<DropletCurrent> {
        self.client
            .patch(
                &format!("/v3/apps/{}/relationships/current_droplet", segment(app_guid)?),
                &ToOneRelationship::new(droplet_guid),
                "set current droplet for app",
            )
            .await
    }
}
