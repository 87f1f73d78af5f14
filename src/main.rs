//! # nyt_newswire
//!
//! Fetches payloads from the New York Times Times Newswire and Most Popular
//! APIs and stores each one, unmodified, as a timestamped JSON file.
//!
//! ## Usage
//!
//! ```sh
//! export NY_API_KEY=...
//! nyt_newswire --storage-dir ./data/raw content --source nyt --section arts
//! nyt_newswire popular shared --period 7
//! nyt_newswire sections
//! ```
//!
//! ## Flow
//!
//! 1. **Config**: read `NY_API_KEY` and the optional host override; fail
//!    before any request if the key is missing
//! 2. **Storage check**: the output directory must exist and be writable
//! 3. **Validation** (optional): fetch the section list and check `--section`
//! 4. **Fetch**: one GET, no retries
//! 5. **Write**: one JSON file named after the timestamp and parameters

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod sections;
mod utils;

use api::NewswireClient;
use cli::Cli;
use config::Config;
use error::Result;
use models::redacted;
use outputs::json::output_filename_now;
use utils::check_writable_dir;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    match run(args).await {
        Ok(()) => {
            let elapsed = start_time.elapsed();
            info!(?elapsed, "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(stage = e.stage(), error = %e, "Run failed");
            eprintln!("error: {} stage failed: {e}", e.stage());
            ExitCode::FAILURE
        }
    }
}

#[instrument(level = "info", skip_all)]
async fn run(args: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(dir) = args.storage_dir {
        config = config.with_storage_dir(dir);
    }
    info!(base_url = %config.base_url, storage_dir = %config.storage_dir.display(), "Configuration loaded");

    let endpoint = args.command.endpoint();
    let client = NewswireClient::new(config)?;

    if args.dry_run {
        let url = client.request_url(&endpoint)?;
        let filename = output_filename_now(endpoint.file_prefix(), &endpoint.filename_params());
        println!("{}", redacted(&url));
        println!("{}", client.config().storage_dir.join(filename).display());
        return Ok(());
    }

    let storage_dir = client.config().storage_dir.clone();
    check_writable_dir(&storage_dir).await?;

    if let Some(section) = args.command.section_to_check() {
        let sections = client.fetch_sections().await?;
        sections.check(section)?;
        info!(%section, "Section is listed");
    }

    let path = client.fetch_to_file(&endpoint, &storage_dir).await?;
    println!("{}", path.display());
    Ok(())
}
