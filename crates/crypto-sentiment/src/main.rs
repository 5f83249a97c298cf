use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use shared::{Config, Pipeline};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crypto-sentiment")]
#[command(version)]
#[command(
    about = "Score today's crypto headlines and write a dated sentiment report",
    long_about = "Fetches crypto headlines (CryptoPanic, then NewsAPI, then the CoinDesk RSS feed), \
                  scores them and writes reports/report-<date>.json and .md.\n\n\
                  Environment: CRYPTOPANIC_KEY, NEWSAPI_KEY, WEBHOOK_URL, REPORTS_DIR, RUST_LOG"
)]
struct Args {}

fn init_logging() {
    // Logs go to stderr, stdout carries only the final summary line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let _args = Args::parse();
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env();
    let pipeline = Pipeline::from_config(&config)?;

    let outcome = pipeline.run(Utc::now()).await?;

    let line = outcome
        .summary
        .to_json_line()
        .context("Failed to serialize summary")?;
    println!("{}", line);

    Ok(())
}
