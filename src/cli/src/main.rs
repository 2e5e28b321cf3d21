//! CLI for the triage dashboard.
//!
//! Classifies milestone issues by priority, aggregates community testing progress,
//! and writes both to a Google Sheets dashboard.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use triage_dashboard::{
    DashboardConfig, RunSummary, Runner, RunnerConfig, RunnerError, WriteOutcome,
    DEFAULT_STALE_DAYS,
};

/// Triage Dashboard - Push milestone priorities and testing progress to Google Sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of days that are used to mark a priority item stale.
    #[arg(long, default_value_t = DEFAULT_STALE_DAYS)]
    stale_factor: u32,

    /// GitHub token used for authenticating with the GraphQL API.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Google credentials file used for authenticating with the Sheets API.
    #[arg(long, default_value = "./credentials.json")]
    creds: PathBuf,

    /// Spreadsheet ID to push the dashboard to (overrides the config file).
    #[arg(long)]
    sheet: Option<String>,

    /// Path to the dashboard config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rows instead of writing them.
    #[arg(long)]
    dry_run: bool,

    /// Also append the open pull request review summary.
    #[arg(long)]
    pull_requests: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Both rustls providers end up in the dependency graph, so pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(summary_exit_code(&summary))
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut dashboard = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(sheet) = args.sheet {
        dashboard = dashboard.with_dashboard_spreadsheet_id(sheet);
    }

    let config = RunnerConfig::new(args.token, args.creds, dashboard)
        .with_stale_days(args.stale_factor)
        .with_dry_run(args.dry_run)
        .with_pull_requests(args.pull_requests);

    let runner = Runner::new(config).await?;
    runner.run(chrono::Utc::now()).await
}

/// Exit code for a completed run: 1 when any sheet write failed, otherwise 0.
fn summary_exit_code(summary: &RunSummary) -> u8 {
    u8::from(summary.has_failures())
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Milestone: {}", summary.milestone);
    println!("  Issues fetched: {}", summary.issues_fetched);
    println!("  Issue rows: {}", summary.issue_rows);
    println!("  Tracked tests: {}", summary.tracked_tests);
    println!("  Participants: {}", summary.participants);
    for (repository, count) in &summary.recent_issues {
        println!("  New issues in {repository}: {count}");
    }
    if let Some(count) = summary.pull_requests {
        println!("  Open pull requests: {count}");
    }

    for outcome in &summary.writes {
        match outcome {
            WriteOutcome::Written { rows, .. } | WriteOutcome::Skipped { rows, .. } => {
                println!("  {}: {} ({rows} rows)", outcome.range(), outcome.as_str());
            }
            WriteOutcome::Failed { error, .. } => {
                println!("  {}: {} ({error})", outcome.range(), outcome.as_str());
            }
        }
    }
}
