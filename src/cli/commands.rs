//! CLI commands and argument parsing

use crate::query::OrderBy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cloud Foundry V3 client CLI
#[derive(Parser, Debug)]
#[command(name = "cf-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API root, overriding the configuration file and CF_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with builds
    Builds {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Work with droplets
    Droplets {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Work with packages
    Packages {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

/// Operations available on every collection
#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List resources
    List(ListArgs),

    /// Show one resource
    Get {
        /// Resource GUID
        guid: String,
    },

    /// Delete one resource
    Delete {
        /// Resource GUID
        guid: String,
    },
}

/// Arguments shared by every `list` command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Follow pagination and print every page
    #[arg(long)]
    pub all: bool,

    /// Restrict to one app
    #[arg(long)]
    pub app: Option<String>,

    /// Page to fetch (ignored with --all)
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub per_page: Option<u32>,

    /// State filter (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub states: Vec<String>,

    /// Ordering, e.g. `-created_at`
    #[arg(long, allow_hyphen_values = true)]
    pub order_by: Option<OrderBy>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
