//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wsa_core::AppConfig;

pub mod analyze;
pub mod providers;
pub mod serve;

/// ClickUp Workspace Analysis - workspace metrics and AI recommendations
#[derive(Parser)]
#[command(name = "wsa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the secrets file (defaults to .streamlit/secrets.toml, then secrets.toml)
    #[arg(short, long, global = true, env = "WSA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web dashboard
    Serve(serve::ServeArgs),

    /// Run one analysis in the terminal
    Analyze(analyze::AnalyzeArgs),

    /// Show which AI providers are configured
    Providers,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let (config, source) = AppConfig::discover(self.config.as_deref())
            .context("Failed to load configuration")?;
        tracing::debug!(path = ?source, "Using configuration");

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
            Commands::Providers => providers::execute(&config, source.as_deref()),
        }
    }
}
