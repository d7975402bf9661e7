//! CLI module
//!
//! Command-line interface over the resource clients.
//!
//! # Commands
//!
//! - `builds` - list, show or delete builds
//! - `droplets` - list, show or delete droplets
//! - `packages` - list, show or delete packages
//!
//! Each collection accepts `list [--all] [--app GUID]`, `get GUID` and
//! `delete GUID`. Results are printed as JSON.

mod commands;
mod runner;

pub use commands::{Cli, Commands, ListArgs, OutputFormat, ResourceAction};
pub use runner::Runner;

#[cfg(test)]
mod tests;
