// File: src/config.rs
// Purpose: Configuration parsing from routejump.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional config file in the workspace root
pub const CONFIG_FILE: &str = "routejump.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub open: OpenConfig,
}

/// Where routes are looked for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory name of the nested-convention root (default: "app")
    #[serde(default = "default_nested_dir")]
    pub nested_dir: String,

    /// Directory name of the flat-convention root (default: "pages")
    #[serde(default = "default_flat_dir")]
    pub flat_dir: String,

    /// Glob patterns of directory names pruned from the walk
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

/// How a chosen route is opened
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenConfig {
    /// Editor command used when neither $VISUAL nor $EDITOR is set
    #[serde(default)]
    pub editor: Option<String>,
}

// Default values
fn default_nested_dir() -> String {
    "app".to_string()
}

fn default_flat_dir() -> String {
    "pages".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        ".next".to_string(),
        ".git".to_string(),
    ]
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            nested_dir: default_nested_dir(),
            flat_dir: default_flat_dir(),
            exclude: default_exclude(),
        }
    }
}

impl Config {
    /// Load configuration from a routejump.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the workspace root
    pub fn load_from_workspace(workspace: &Path) -> Result<Self> {
        Self::load(workspace.join(CONFIG_FILE))
    }
}
