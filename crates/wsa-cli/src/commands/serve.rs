//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use wsa_core::AppConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (used with --log)
    #[arg(long, default_value = "wsa-serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, config: &AppConfig) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        "WSA".cyan().bold(),
        "ClickUp Workspace Analysis".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    if !config.has_openai() && !config.has_gemini() {
        println!();
        println!(
            "  {} {}",
            "⚠".yellow().bold(),
            "No AI provider configured; only workspace metrics will be available.".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    wsa_web::run_server(config, &args.host, args.port).await?;

    Ok(())
}
