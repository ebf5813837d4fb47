//! CLI runner for the storefront journeys.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use storefront_e2e::report::{RunReport, ScenarioResult};
use storefront_e2e::scenarios;
use storefront_e2e::settings::Settings;
use storefront_session::Driver;

#[derive(Parser)]
#[command(
    name = "storefront-e2e",
    version,
    about = "Browser-driven end-to-end journeys for the storefront demo site"
)]
struct Cli {
    /// Path to a JSON settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run journeys against the live site.
    Run {
        /// Only journeys whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,

        /// Run with a visible browser window.
        #[arg(long)]
        headed: bool,

        /// Override the target base URL.
        #[arg(long)]
        base_url: Option<String>,

        /// Write a JSON run report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List available journeys.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::List => {
            for scenario in scenarios::all() {
                println!(
                    "{:<32} [{}] {}",
                    scenario.name,
                    scenario.tags.join(","),
                    scenario.description
                );
            }
            Ok(())
        }
        Command::Run {
            filter,
            headed,
            base_url,
            report,
        } => {
            if headed {
                settings.driver.headless = false;
            }
            if let Some(url) = base_url {
                settings.driver.base_url = url;
            }

            let selected = scenarios::filtered(filter.as_deref());
            anyhow::ensure!(!selected.is_empty(), "no journeys match the filter");

            let driver = Driver::launch(settings.driver.clone()).await?;
            let started_at = Utc::now();
            let mut results = Vec::with_capacity(selected.len());

            for scenario in &selected {
                info!(scenario = scenario.name, "running");
                let begun = Instant::now();
                let outcome = scenario.execute(&driver, &settings).await;
                let latency_ms = begun.elapsed().as_millis() as u64;
                match outcome {
                    Ok(()) => {
                        info!(scenario = scenario.name, latency_ms, "passed");
                        results.push(ScenarioResult::passed(scenario.name, latency_ms));
                    }
                    Err(err) => {
                        error!(scenario = scenario.name, latency_ms, "failed: {err}");
                        results.push(ScenarioResult::failed(
                            scenario.name,
                            latency_ms,
                            err.to_string(),
                        ));
                    }
                }
            }

            driver.shutdown().await;

            let run_report = RunReport::new(started_at, results);
            if let Some(path) = report {
                run_report.write_json(&path)?;
            }

            println!(
                "{} passed, {} failed of {} journeys",
                run_report.passed,
                run_report.failed,
                run_report.results.len()
            );
            for result in run_report.results.iter().filter(|r| !r.ok) {
                println!(
                    "  FAILED {}: {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown")
                );
            }

            if !run_report.all_passed() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
