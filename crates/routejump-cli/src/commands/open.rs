use anyhow::{Context, Result};
use colored::Colorize;
use routejump_router::RouteEntry;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::commands::load_routes;
use crate::presentation::{
    editor_from_env, matches_query, open_in_editor, parse_selection, render_lines,
};

pub fn execute(workspace: &Path, query: Option<&str>, print: bool) -> Result<()> {
    let Some((config, routes)) = load_routes(workspace)? else {
        return Ok(());
    };

    let candidates: Vec<&RouteEntry> = routes
        .table
        .iter()
        .filter(|entry| query.map_or(true, |q| matches_query(entry, q)))
        .collect();

    let selected = match candidates.as_slice() {
        [] => {
            eprintln!("{}", "No routes match the query.".yellow());
            return Ok(());
        }
        [only] => *only,
        many => match prompt_selection(many)? {
            Some(entry) => entry,
            None => return Ok(()),
        },
    };

    let path = routes.resolve(selected)?;
    tracing::info!("Opening {} ({})", selected.route_path(), path.display());

    if print {
        println!("{}", path.display());
        return Ok(());
    }

    match editor_from_env(&config.open) {
        Some(editor) => open_in_editor(&editor, &path),
        None => {
            // No editor configured: hand the path to the caller
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Shows numbered candidates on stderr and reads a choice from stdin
fn prompt_selection<'a>(candidates: &[&'a RouteEntry]) -> Result<Option<&'a RouteEntry>> {
    let mut stderr = io::stderr().lock();
    for line in render_lines(candidates, true) {
        writeln!(stderr, "{}", line)?;
    }
    write!(stderr, "{} ", "Select a route to open:".green().bold())?;
    stderr.flush()?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read selection")?;

    Ok(parse_selection(&input, candidates.len())?.map(|i| candidates[i]))
}
