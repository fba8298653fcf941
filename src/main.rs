//! Chain Metric Adapters — Entry Point
//!
//! Runs every registered adapter once for a single UTC day and prints
//! one JSON line per (protocol, chain) on stdout.
//!
//! Wiring sequence:
//! 1. Load config.toml (path from METRICS_CONFIG) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create the shared HTTP client
//! 4. Build the adapter registry
//! 5. Collect the configured (or current) day
//! 6. Emit reports; exit non-zero if any entry failed

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use chain_metric_adapters::adapters::http::{HttpClient, HttpClientConfig};
use chain_metric_adapters::config;
use chain_metric_adapters::domain::time::{day_label, now_unix, start_of_day_utc};
use chain_metric_adapters::usecases::{AdapterRegistry, Collector, Outcome};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path =
        std::env::var("METRICS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.collector.log_level)
            }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let timestamp = config.collector.timestamp.unwrap_or_else(now_unix);
    let day = start_of_day_utc(timestamp)
        .with_context(|| format!("Timestamp {timestamp} is out of range"))?;

    info!(
        name = %config.collector.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        timestamp,
        day = ?day_label(day),
        "Starting metric collection"
    );

    // ── 3. Shared HTTP client ───────────────────────────────
    let client = Arc::new(
        HttpClient::new(HttpClientConfig::from(&config.http))
            .context("Failed to create HTTP client")?,
    );

    // ── 4. Adapter registry ─────────────────────────────────
    let registry = Arc::new(AdapterRegistry::from_config(&config, &client));

    // ── 5. Collect ──────────────────────────────────────────
    let collector = Collector::new(Arc::clone(&registry));
    let reports = collector.collect_day(timestamp).await;

    // ── 6. Emit ─────────────────────────────────────────────
    let mut failed = 0usize;
    for report in &reports {
        if matches!(report.outcome, Outcome::Failed(_)) {
            failed += 1;
        }
        println!("{}", report.to_json());
    }

    if failed > 0 {
        warn!(failed, total = reports.len(), "Some adapters failed");
        anyhow::bail!("{failed} of {} adapters failed", reports.len());
    }

    info!(total = reports.len(), "Collection complete");
    Ok(())
}
