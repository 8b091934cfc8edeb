//! Provider status command.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use wsa_core::AppConfig;

pub fn execute(config: &AppConfig, source: Option<&Path>) -> Result<()> {
    match source {
        Some(path) => println!("{}: {}", "Config".bold(), path.display()),
        None => println!("{}: {}", "Config".bold(), "none found (environment only)".dimmed()),
    }
    println!();

    let status = |present: bool| if present { "configured".green() } else { "missing".red() };

    println!(
        "  1. {:<8} {:<12} {}",
        "openai",
        status(config.has_openai()),
        config.openai.model.dimmed()
    );
    if config.has_openai() && config.openai_org_id.is_none() {
        println!("     {}", "no OPENAI_ORG_ID set; the key's default organization is used".dimmed());
    }
    println!(
        "  2. {:<8} {:<12} {}",
        "gemini",
        status(config.has_gemini()),
        config.gemini.model.dimmed()
    );
    println!();
    println!("{}: {}", "ClickUp API".bold(), config.clickup.base_url);

    Ok(())
}
