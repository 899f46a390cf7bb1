//! Apptrack main entry point
//!
//! This is the command-line interface for capturing job postings into a
//! Notion tracking database.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apptrack::config::resolve_config;
use apptrack::notion::{ApplicationStatus, NotionClient};
use apptrack::pipeline::{build_http_client, extract_record, RunOutcome};
use apptrack::prompt::{collect_missing, ConsolePrompter};
use apptrack::record::JobRecord;
use apptrack::router::route;

/// Apptrack: track job applications in Notion
///
/// Give it a job posting link and it extracts the company, position, and
/// location from the page, prompting for anything it cannot resolve, then
/// records the application in your Notion database.
#[derive(Parser, Debug)]
#[command(name = "apptrack")]
#[command(version = "1.0.0")]
#[command(about = "Track job applications in Notion", long_about = None)]
struct Cli {
    /// Link to the job posting (prompted for when omitted)
    #[arg(value_name = "LINK")]
    link: Option<String>,

    /// Save the posting to apply later instead of marking it applied
    #[arg(short, long)]
    save: bool,

    /// Fill in all fields manually, skipping automated extraction
    #[arg(short, long)]
    manual: bool,

    /// Path to a TOML configuration file (environment credentials are used
    /// when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let raw_link = match cli.link {
        Some(link) => link,
        None => ConsolePrompter::prompt_value("link"),
    };

    let mut record = JobRecord::new();
    let strategy = route(&raw_link, &mut record);
    tracing::debug!("Routed link to {:?} source", strategy.source());

    let mut prompter = ConsolePrompter;
    if cli.manual {
        collect_missing(&mut record, &mut prompter);
    } else {
        let client = build_http_client().context("Failed to build HTTP client")?;
        match extract_record(&client, &strategy, &mut record, &mut prompter).await {
            RunOutcome::Complete => {
                tracing::info!("All fields extracted automatically");
            }
            RunOutcome::Exhausted => {
                tracing::info!("Automated extraction incomplete, missing fields entered manually");
            }
        }
    }

    let status = if cli.save {
        ApplicationStatus::ReadyToApply
    } else {
        ApplicationStatus::Applied
    };

    let notion = NotionClient::new(&config.notion)?;
    notion
        .create_entry(&record, status)
        .await
        .context("Failed to create Notion entry")?;

    println!("Successfully added to database.");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("apptrack=info,warn"),
            1 => EnvFilter::new("apptrack=debug,info"),
            2 => EnvFilter::new("apptrack=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
