//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `score_events` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Reading a play record and reporting the outcome
//!
//! All core functionality is implemented in the library crate.

use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use reqwest::Url;

use score_events::initialization::init_logger_with;
use score_events::{build_score_event, Config, EventTransport, PlayRecord};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the endpoint can come from flags or the environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&config).await {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("score_events error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Builds the event and prints or posts it. Returns whether delivery succeeded.
async fn run(config: &Config) -> Result<bool> {
    let raw = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;
    let play: PlayRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse play record {}", config.input.display()))?;

    let event = build_score_event(&play.score, &play.beatmap, &play.extras);
    let document = event.to_json().context("Failed to encode score event")?;

    if config.dry_run {
        println!("{document}");
        return Ok(true);
    }

    let url = match config.url.as_deref() {
        Some(url) => validate_endpoint(url)?,
        None => bail!("No endpoint given (use --url or SCORE_EVENTS_URL), or pass --dry-run"),
    };

    let transport =
        EventTransport::new(&config.transport()).context("Failed to initialize HTTP client")?;
    let delivered = transport.post(url.as_str(), &document).await;
    transport.shutdown().await;

    if delivered {
        info!(
            "Posted {} event for {} to {url}",
            event.score.grade, event.beatmap.md5
        );
    } else {
        warn!("Score event could not be delivered to {url}");
    }
    Ok(delivered)
}

/// Parses the endpoint URL and checks it uses http or https.
fn validate_endpoint(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid endpoint URL: {url}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => bail!("Unsupported endpoint scheme '{scheme}' in {url}"),
    }
}
