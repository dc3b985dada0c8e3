use anyhow::{Context, Result};
use routejump_router::RouteEntry;
use std::path::Path;

use crate::commands::load_routes;
use crate::presentation::{render_lines, ListedRoute};

pub fn execute(workspace: &Path, json: bool) -> Result<()> {
    let Some((_, routes)) = load_routes(workspace)? else {
        return Ok(());
    };

    if json {
        let listed: Vec<ListedRoute<'_>> = routes
            .table
            .iter()
            .map(|entry| ListedRoute::new(entry, &routes))
            .collect();
        let output = serde_json::to_string_pretty(&listed).context("Failed to serialize routes")?;
        println!("{}", output);
        return Ok(());
    }

    let entries: Vec<&RouteEntry> = routes.table.iter().collect();
    for line in render_lines(&entries, false) {
        println!("{}", line);
    }

    Ok(())
}
