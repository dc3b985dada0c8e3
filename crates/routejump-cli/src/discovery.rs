// File: src/discovery.rs
// Purpose: Finds route files in a workspace and builds the merged route table

use anyhow::{Context, Result};
use glob::Pattern;
use routejump_router::path::strip_script_extension;
use routejump_router::route::match_nested_file;
use routejump_router::{discover_flat, discover_nested, group_by_root, RouteEntry, RouteTable};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;

/// File names that mark a Next.js project
const NEXT_CONFIG_FILES: [&str; 5] = [
    "next.config.ts",
    "next.config.mts",
    "next.config.js",
    "next.config.mjs",
    "next.config.cjs",
];

/// Candidate files found by a single walk of the workspace, relative to it
#[derive(Debug, Default)]
pub struct Scan {
    pub next_configs: Vec<PathBuf>,
    pub nested_files: Vec<PathBuf>,
    pub flat_files: Vec<PathBuf>,
}

/// Result of discovering routes in a workspace
#[derive(Debug)]
pub enum Discovery {
    /// No next.config.* anywhere: not ours to handle
    NotNextProject,
    /// A Next.js project without any candidate route files
    NoRouteFiles,
    Routes(ProjectRoutes),
}

/// Merged routes plus the roots their file paths are relative to
#[derive(Debug)]
pub struct ProjectRoutes {
    pub table: RouteTable,
    pub nested_root: Option<PathBuf>,
    pub flat_root: Option<PathBuf>,
}

impl ProjectRoutes {
    /// Absolute location of an entry's source file
    pub fn resolve(&self, entry: &RouteEntry) -> Result<PathBuf> {
        let root = if self.table.is_nested(entry.file_path()) {
            self.nested_root.as_ref()
        } else {
            self.flat_root.as_ref()
        };

        match root {
            Some(root) => Ok(root.join(entry.file_path())),
            None => anyhow::bail!("Could not resolve file path: {}", entry.file_path()),
        }
    }
}

/// Walks the workspace once and collects candidate files
///
/// Excluded directories are pruned, never descended into. Entries are visited
/// in file-name order so the first root found is stable between runs.
pub fn scan(workspace: &Path, config: &DiscoveryConfig) -> Result<Scan> {
    let exclude = config
        .exclude
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {}", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut scan = Scan::default();

    let walker = WalkDir::new(workspace)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e, &exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Ok(relative) = entry.path().strip_prefix(workspace) else {
            continue;
        };

        if NEXT_CONFIG_FILES.contains(&file_name) {
            scan.next_configs.push(relative.to_path_buf());
        }
        if match_nested_file(file_name).is_some() && has_ancestor(relative, &config.nested_dir) {
            scan.nested_files.push(relative.to_path_buf());
        }
        if strip_script_extension(file_name).is_some() && has_ancestor(relative, &config.flat_dir) {
            scan.flat_files.push(relative.to_path_buf());
        }
    }

    Ok(scan)
}

fn is_excluded(entry: &DirEntry, exclude: &[Pattern]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| exclude.iter().any(|p| p.matches(name)))
}

/// Whether a directory named `dir_name` sits above the file
fn has_ancestor(relative: &Path, dir_name: &str) -> bool {
    relative
        .parent()
        .map_or(false, |dirs| dirs.components().any(|c| c.as_os_str() == OsStr::new(dir_name)))
}

/// Whether the workspace contains a next.config.* file
pub fn is_next_project(workspace: &Path, config: &DiscoveryConfig) -> Result<bool> {
    Ok(!scan(workspace, config)?.next_configs.is_empty())
}

/// Discovers and merges the routes of the Next.js project in `workspace`
pub fn discover(workspace: &Path, config: &DiscoveryConfig) -> Result<Discovery> {
    let scan = scan(workspace, config)?;

    let Some(next_config) = scan.next_configs.first() else {
        debug!("No next.config.* found, skipping");
        return Ok(Discovery::NotNextProject);
    };
    info!("Found next.config: {}", next_config.display());

    info!(
        "Found {} {} file(s), {} {} file(s)",
        scan.nested_files.len(),
        config.nested_dir,
        scan.flat_files.len(),
        config.flat_dir
    );

    if scan.nested_files.is_empty() && scan.flat_files.is_empty() {
        warn!(
            "No route files found in {}/ or {}/ directories",
            config.nested_dir, config.flat_dir
        );
        return Ok(Discovery::NoRouteFiles);
    }

    let (nested_root, nested) = first_root_routes(&scan.nested_files, &config.nested_dir, |paths| {
        discover_nested(paths)
    });
    let (flat_root, flat) = first_root_routes(&scan.flat_files, &config.flat_dir, |paths| {
        discover_flat(paths)
    });

    let nested_root = nested_root.map(|root| workspace.join(root));
    let flat_root = flat_root.map(|root| workspace.join(root));

    let table = RouteTable::new(&nested, &flat);
    info!(
        "Discovered {} {} route(s), {} {} route(s), {} merged",
        nested.len(),
        config.nested_dir,
        flat.len(),
        config.flat_dir,
        table.len()
    );

    Ok(Discovery::Routes(ProjectRoutes {
        table,
        nested_root,
        flat_root,
    }))
}

/// Classifies the files of the first convention root only
///
/// Returns that root, relative like the input files.
fn first_root_routes<F>(files: &[PathBuf], dir_name: &str, classify: F) -> (Option<PathBuf>, Vec<RouteEntry>)
where
    F: FnOnce(&[String]) -> Vec<RouteEntry>,
{
    let mut groups = group_by_root(files, dir_name).into_iter();
    let Some(first) = groups.next() else {
        return (None, Vec::new());
    };

    let ignored = groups.len();
    if ignored > 0 {
        warn!(
            "Found {} more {}/ root(s); only {} is used",
            ignored,
            dir_name,
            first.root.display()
        );
    }

    let routes = classify(&first.relative_paths);
    (Some(first.root), routes)
}
