// File: src/presentation.rs
// Purpose: Terminal rendering of routes, selection and editor handoff

use anyhow::{Context, Result};
use colored::Colorize;
use routejump_router::RouteEntry;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::OpenConfig;
use crate::discovery::ProjectRoutes;

/// A route as printed by `list --json`
#[derive(Debug, Serialize)]
pub struct ListedRoute<'a> {
    #[serde(flatten)]
    pub entry: &'a RouteEntry,
    #[serde(rename = "absolutePath", skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,
}

impl<'a> ListedRoute<'a> {
    pub fn new(entry: &'a RouteEntry, routes: &ProjectRoutes) -> Self {
        Self {
            entry,
            absolute_path: routes.resolve(entry).ok(),
        }
    }
}

/// Width of the route-path column
fn label_width(entries: &[&RouteEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.route_path().chars().count())
        .max()
        .unwrap_or(0)
}

/// One `<routePath>  [<label>] <filePath>` line per entry
pub fn render_lines(entries: &[&RouteEntry], numbered: bool) -> Vec<String> {
    let width = label_width(entries);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let label = format!("{:<width$}", entry.route_path(), width = width);
            let line = format!("{}  {}", label.bold(), entry.description().dimmed());
            if numbered {
                format!("{}) {}", format!("{:>3}", i + 1).cyan(), line)
            } else {
                line
            }
        })
        .collect()
}

/// Case-insensitive substring match on the route path or the description
pub fn matches_query(entry: &RouteEntry, query: &str) -> bool {
    let query = query.to_lowercase();
    entry.route_path().to_lowercase().contains(&query)
        || entry.description().to_lowercase().contains(&query)
}

/// Parses a 1-based choice out of `count` items
///
/// Empty input cancels (`Ok(None)`).
pub fn parse_selection(input: &str, count: usize) -> Result<Option<usize>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let choice: usize = input
        .parse()
        .with_context(|| format!("Invalid selection: {}", input))?;
    if choice == 0 || choice > count {
        anyhow::bail!("Selection out of range: {} (expected 1-{})", choice, count);
    }

    Ok(Some(choice - 1))
}

/// Picks the editor command: $VISUAL, then $EDITOR, then the config file
pub fn resolve_editor(
    visual: Option<String>,
    editor: Option<String>,
    config: &OpenConfig,
) -> Option<String> {
    [visual, editor, config.editor.clone()]
        .into_iter()
        .flatten()
        .find(|cmd| !cmd.trim().is_empty())
}

/// Editor command from the environment and config
pub fn editor_from_env(config: &OpenConfig) -> Option<String> {
    resolve_editor(
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
        config,
    )
}

/// Launches `command` (program plus arguments) with `path` appended
pub fn open_in_editor(command: &str, path: &Path) -> Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        anyhow::bail!("Editor command is empty");
    };

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {}", command))?;

    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    Ok(())
}
