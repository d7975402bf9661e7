//! Builds endpoints

use super::{segment, Client};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::Pager;
use crate::query::{Field, Filter, ListOptions, ListQuery, QueryBuilder};
use crate::resource::{Build, BuildCreate, BuildUpdate};

/// Filters for `GET /v3/builds`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildListOptions {
    pub list: ListOptions,
    /// `STAGING`, `STAGED`, `FAILED`
    pub states: Filter,
    pub app_guids: Filter,
    pub package_guids: Filter,
}

impl BuildListOptions {
    const STATES: Field = Field::optional("states");
    const APP_GUIDS: Field = Field::optional("app_guids");
    const PACKAGE_GUIDS: Field = Field::optional("package_guids");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for BuildListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }

    fn describe_filters(&self, query: &mut QueryBuilder) {
        query
            .list(Self::STATES, &self.states)
            .list(Self::APP_GUIDS, &self.app_guids)
            .list(Self::PACKAGE_GUIDS, &self.package_guids);
    }
}

/// Filters for `GET /v3/apps/{guid}/builds`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildAppListOptions {
    pub list: ListOptions,
    pub states: Filter,
}

impl BuildAppListOptions {
    const STATES: Field = Field::optional("states");

    pub fn new() -> Self {
        Self::default()
    }
}

impl ListQuery for BuildAppListOptions {
    fn list_options(&self) -> &ListOptions {
        &self.list
    }

    fn list_options_mut(&mut self) -> &mut ListOptions {
        &mut self.list
    }

    fn describe_filters(&self, query: &mut QueryBuilder) {
        query.list(Self::STATES, &self.states);
    }
}

/// Client for the builds collection
#[derive(Debug)]
pub struct BuildClient<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> BuildClient<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Stage a package
    pub async fn create(&self, body: &BuildCreate) -> Result<Build> {
        self.client.post("/v3/builds", body, "create build").await
    }

    pub async fn get(&self, guid: &str) -> Result<Build> {
        self.client
            .get(&format!("/v3/builds/{}", segment(guid)?), "get build")
            .await
    }

    /// Update labels and annotations
    pub async fn update(&self, guid: &str, body: &BuildUpdate) -> Result<Build> {
        self.client
            .patch(&format!("/v3/builds/{}", segment(guid)?), body, "update build")
            .await
    }

    pub async fn delete(&self, guid: &str) -> Result<()> {
        self.client.delete(&format!("/v3/builds/{}", segment(guid)?)).await
    }

    /// One page of builds
    pub async fn list(&self, opts: Option<&BuildListOptions>) -> Result<(Vec<Build>, Pager)> {
        let default = BuildListOptions::default();
        self.client
            .list_page("/v3/builds", opts.unwrap_or(&default), "list builds")
            .await
    }

    /// Every build matching `opts`
    pub async fn list_all(&self, opts: Option<BuildListOptions>) -> Result<Vec<Build>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list(Some(&opts)).await
            })
            .await
    }

    /// One page of an app's builds
    pub async fn list_for_app(
        &self,
        app_guid: &str,
        opts: Option<&BuildAppListOptions>,
    ) -> Result<(Vec<Build>, Pager)> {
        let default = BuildAppListOptions::default();
        self.client
            .list_page(
                &format!("/v3/apps/{}/builds", segment(app_guid)?),
                opts.unwrap_or(&default),
                "list builds for app",
            )
            .await
    }

    /// Every build of an app
    pub async fn list_for_app_all(
        &self,
        app_guid: &str,
        opts: Option<BuildAppListOptions>,
    ) -> Result<Vec<Build>> {
        self.client
            .list_all(opts.unwrap_or_default(), move |opts| async move {
                self.list_for_app(app_guid, Some(&opts)).await
            })
            .await
    }
}
