//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ListArgs, OutputFormat, ResourceAction};
use crate::client::{
    BuildAppListOptions, BuildClient, BuildListOptions, Client, DropletAppListOptions,
    DropletClient, DropletListOptions, PackageAppListOptions, PackageClient, PackageListOptions,
};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::http::Transport;
use crate::pagination::{Pager, Pagination};
use crate::query::{Filter, ListOptions};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured API
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let client = Client::from_config(&config)?;
        let output = self.execute(&client).await?;
        self.print(&output)
    }

    /// Resolve configuration: file, then environment, then `--api-url`
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                ClientConfig::from_file(path)
                    .with_context(|| format!("cannot load config {}", path.display()))?
            }
            None => ClientConfig::default(),
        };

        let mut config = config.with_env_overrides();
        if let Some(url) = &self.cli.api_url {
            config.api_url.clone_from(url);
        }
        Ok(config)
    }

    /// Execute the command and return its JSON output
    pub async fn execute<T: Transport>(&self, client: &Client<T>) -> Result<Value> {
        match &self.cli.command {
            Commands::Builds { action } => Self::builds(client.builds(), action).await,
            Commands::Droplets { action } => Self::droplets(client.droplets(), action).await,
            Commands::Packages { action } => Self::packages(client.packages(), action).await,
        }
    }

    async fn builds<T: Transport>(
        builds: BuildClient<'_, T>,
        action: &ResourceAction,
    ) -> Result<Value> {
        match action {
            ResourceAction::Get { guid } => Ok(serde_json::to_value(builds.get(guid).await?)?),
            ResourceAction::Delete { guid } => {
                builds.delete(guid).await?;
                Ok(deleted(guid))
            }
            ResourceAction::List(args) => match &args.app {
                Some(app) => {
                    let opts = BuildAppListOptions {
                        list: list_options(args),
                        states: states(args),
                    };
                    if args.all {
                        all_output(&builds.list_for_app_all(app, Some(opts)).await?)
                    } else {
                        let (items, pager) = builds.list_for_app(app, Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
                None => {
                    let opts = BuildListOptions {
                        list: list_options(args),
                        states: states(args),
                        ..BuildListOptions::default()
                    };
                    if args.all {
                        all_output(&builds.list_all(Some(opts)).await?)
                    } else {
                        let (items, pager) = builds.list(Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
            },
        }
    }

    async fn droplets<T: Transport>(
        droplets: DropletClient<'_, T>,
        action: &ResourceAction,
    ) -> Result<Value> {
        match action {
            ResourceAction::Get { guid } => Ok(serde_json::to_value(droplets.get(guid).await?)?),
            ResourceAction::Delete { guid } => {
                droplets.delete(guid).await?;
                Ok(deleted(guid))
            }
            ResourceAction::List(args) => match &args.app {
                Some(app) => {
                    let opts = DropletAppListOptions {
                        list: list_options(args),
                        states: states(args),
                        ..DropletAppListOptions::default()
                    };
                    if args.all {
                        all_output(&droplets.list_for_app_all(app, Some(opts)).await?)
                    } else {
                        let (items, pager) = droplets.list_for_app(app, Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
                None => {
                    let opts = DropletListOptions {
                        list: list_options(args),
                        states: states(args),
                        ..DropletListOptions::default()
                    };
                    if args.all {
                        all_output(&droplets.list_all(Some(opts)).await?)
                    } else {
                        let (items, pager) = droplets.list(Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
            },
        }
    }

    async fn packages<T: Transport>(
        packages: PackageClient<'_, T>,
        action: &ResourceAction,
    ) -> Result<Value> {
        match action {
            ResourceAction::Get { guid } => Ok(serde_json::to_value(packages.get(guid).await?)?),
            ResourceAction::Delete { guid } => {
                packages.delete(guid).await?;
                Ok(deleted(guid))
            }
            ResourceAction::List(args) => match &args.app {
                Some(app) => {
                    let opts = PackageAppListOptions {
                        list: list_options(args),
                        states: states(args),
                        ..PackageAppListOptions::default()
                    };
                    if args.all {
                        all_output(&packages.list_for_app_all(app, Some(opts)).await?)
                    } else {
                        let (items, pager) = packages.list_for_app(app, Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
                None => {
                    let opts = PackageListOptions {
                        list: list_options(args),
                        states: states(args),
                        ..PackageListOptions::default()
                    };
                    if args.all {
                        all_output(&packages.list_all(Some(opts)).await?)
                    } else {
                        let (items, pager) = packages.list(Some(&opts)).await?;
                        page_output(&items, &pager)
                    }
                }
            },
        }
    }

    /// Print command output in the selected format
    fn print(&self, output: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output),
            OutputFormat::Pretty => serde_json::to_string_pretty(output),
        }
        .context("cannot render output")?;
        println!("{text}");
        Ok(())
    }
}

// ============================================================================
// Output shapes
// ============================================================================

#[derive(Serialize)]
struct ListOutput<'a, R> {
    resources: &'a [R],
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<&'a Pagination>,
}

fn page_output<R: Serialize>(resources: &[R], pager: &Pager) -> Result<Value> {
    Ok(serde_json::to_value(ListOutput {
        resources,
        pagination: Some(pager.pagination()),
    })?)
}

fn all_output<R: Serialize>(resources: &[R]) -> Result<Value> {
    Ok(serde_json::to_value(ListOutput {
        resources,
        pagination: None,
    })?)
}

fn deleted(guid: &str) -> Value {
    let mut out = serde_json::Map::new();
    out.insert("deleted".to_string(), Value::String(guid.to_string()));
    Value::Object(out)
}

fn list_options(args: &ListArgs) -> ListOptions {
    ListOptions {
        page: if args.all { None } else { args.page },
        per_page: args.per_page,
        order_by: args.order_by.clone(),
        ..ListOptions::default()
    }
}

fn states(args: &ListArgs) -> Filter {
    Filter::of(args.states.iter().map(String::as_str))
}
