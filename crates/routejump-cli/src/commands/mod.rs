pub mod list;
pub mod open;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{Config, DiscoveryConfig};
use crate::discovery::{self, Discovery, ProjectRoutes};

/// Loads config and routes, reporting the empty outcomes to the user
///
/// Returns `None` when there is nothing to show.
pub fn load_routes(workspace: &Path) -> Result<Option<(Config, ProjectRoutes)>> {
    let Some(config) = load_config(workspace)? else {
        return Ok(None);
    };

    match discovery::discover(workspace, &config.discovery)? {
        // Not a Next.js project: stay quiet so other tools can take over
        Discovery::NotNextProject => Ok(None),
        Discovery::NoRouteFiles => {
            eprintln!("{}", "No Next.js routes found in this workspace.".yellow());
            Ok(None)
        }
        Discovery::Routes(routes) if routes.table.is_empty() => {
            tracing::warn!("All files were filtered out, no routes to show");
            eprintln!("{}", "No routes found.".yellow());
            Ok(None)
        }
        Discovery::Routes(routes) => Ok(Some((config, routes))),
    }
}

/// Loads the workspace config
///
/// A broken config only matters in a Next.js project; elsewhere the tool
/// stays quiet as it would without one (`Ok(None)`).
fn load_config(workspace: &Path) -> Result<Option<Config>> {
    match Config::load_from_workspace(workspace) {
        Ok(config) => Ok(Some(config)),
        Err(e) if !discovery::is_next_project(workspace, &DiscoveryConfig::default())? => {
            tracing::debug!("Ignoring config outside a Next.js project: {:#}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
