mod commands;
mod config;
mod discovery;
mod presentation;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routejump")]
#[command(version, about = "Routejump - jump to any route of a Next.js project", long_about = None)]
struct Cli {
    /// Workspace directory to search
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route of the project, app/ routes winning clashes with pages/
    List {
        /// Print routes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick a route and open its file
    Open {
        /// Filter routes by path or file (case-insensitive)
        query: Option<String>,

        /// Print the file path instead of opening it
        #[arg(short, long)]
        print: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workspace = cli
        .dir
        .canonicalize()
        .with_context(|| format!("Workspace not found: {}", cli.dir.display()))?;

    // Execute command
    match cli.command {
        Commands::List { json } => {
            commands::list::execute(&workspace, json)?;
        }
        Commands::Open { query, print } => {
            commands::open::execute(&workspace, query.as_deref(), print)?;
        }
    }

    Ok(())
}
