//! One-shot analysis in the terminal.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use wsa_clickup::ClickUpClient;
use wsa_core::report::{self, model::AnalysisRequest};
use wsa_core::AppConfig;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// ClickUp personal API key (optional)
    #[arg(long, env = "CLICKUP_API_KEY", hide_env_values = true)]
    pub clickup_key: Option<String>,

    /// Company name for the profile (optional)
    #[arg(long)]
    pub company: Option<String>,

    /// Free-text description of how the company uses ClickUp
    #[arg(long)]
    pub use_case: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Never prompt for missing inputs
    #[arg(long)]
    pub no_input: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let json = args.json;
    let interactive = !args.no_input && !json && std::io::stdin().is_terminal();
    let request = if interactive {
        collect_request(args)?
    } else {
        AnalysisRequest {
            clickup_api_key: args.clickup_key,
            company_name: args.company,
            use_case: args.use_case.unwrap_or_default(),
        }
    };

    let source = ClickUpClient::from_settings(&config.clickup);
    let chain = wsa_ai::build_chain(config);

    let spinner = (!json).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner());
        pb.set_message("Fetching workspace data and crafting suggestions, this may take a while...");
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    });

    let report = report::run_analysis(&request, &source, &chain, Utc::now()).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report, request.company());
    }

    Ok(())
}

/// Prompt for any input not given on the command line.
fn collect_request(args: AnalyzeArgs) -> Result<AnalysisRequest> {
    let clickup_api_key = match args.clickup_key {
        Some(key) => Some(key),
        None => Some(
            Password::new()
                .with_prompt("🔑 ClickUp API Key (optional, Enter to skip)")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read ClickUp API key")?,
        ),
    };

    let company_name = match args.company {
        Some(name) => Some(name),
        None => Some(
            Input::<String>::new()
                .with_prompt("🏢 Company name (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read company name")?,
        ),
    };

    let use_case = match args.use_case {
        Some(text) => text,
        None => Input::<String>::new()
            .with_prompt("🏢 Describe your company's use case")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read use case")?,
    };

    Ok(AnalysisRequest {
        clickup_api_key,
        company_name,
        use_case,
    })
}
