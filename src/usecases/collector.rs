//! Collector - One-Day Run Across the Registry
//!
//! For a target timestamp, resolves `start` then `fetch` for every
//! registered (protocol, chain). Entries share nothing, so they run
//! concurrently; each yields exactly one `CollectionReport`.

use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::registry::{AdapterKind, AdapterRegistry, RegistryEntry};
use crate::domain::chain::Chain;
use crate::domain::metric::{FetchOptions, MetricRecord};
use crate::domain::time::{start_of_day_utc, ONE_DAY_SECONDS};
use crate::error::AdapterError;

/// Result of running one entry.
#[derive(Debug)]
pub enum Outcome {
  /// The adapter produced a record.
  Collected(MetricRecord),
  /// The target day ends before the adapter's first data point.
  NotStarted {
    /// Adapter start timestamp.
    start: i64,
  },
  /// `start` or `fetch` failed.
  Failed(AdapterError),
}

/// Outcome of one (protocol, chain) pair.
#[derive(Debug)]
pub struct CollectionReport {
  /// Protocol name.
  pub protocol: String,
  /// Metric family.
  pub kind: AdapterKind,
  /// Chain.
  pub chain: Chain,
  /// What happened.
  pub outcome: Outcome,
}

impl CollectionReport {
  /// One JSON object per report, suitable for line-delimited output.
  pub fn to_json(&self) -> Value {
    let mut line = json!({
      "protocol": self.protocol,
      "kind": self.kind,
      "chain": self.chain,
    });
    let (status, detail) = match &self.outcome {
      Outcome::Collected(record) => ("collected", json!({ "record": record })),
      Outcome::NotStarted { start } => ("not_started", json!({ "start": start })),
      Outcome::Failed(e) => ("failed", json!({ "error": e.to_string() })),
    };
    line["status"] = json!(status);
    if let (Some(line), Value::Object(detail)) = (line.as_object_mut(), detail) {
      line.extend(detail);
    }
    line
  }
}

/// Runs every registered adapter for one day.
pub struct Collector {
  registry: Arc<AdapterRegistry>,
}

impl Collector {
  /// Create a collector over `registry`.
  pub const fn new(registry: Arc<AdapterRegistry>) -> Self {
    Self { registry }
  }

  /// Collect the UTC day containing `timestamp`.
  #[instrument(skip(self))]
  pub async fn collect_day(&self, timestamp: i64) -> Vec<CollectionReport> {
    let options = FetchOptions::for_day(timestamp);

    let runs = self.registry.entries().map(|entry| async move {
      let outcome = match options {
        Some(options) => run_entry(&entry, &options).await,
        None => Outcome::Failed(AdapterError::InvalidTimestamp(timestamp)),
      };
      CollectionReport {
        protocol: entry.protocol.to_string(),
        kind: entry.kind,
        chain: entry.chain,
        outcome,
      }
    });

    let reports = join_all(runs).await;

    let failed = reports
      .iter()
      .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
      .count();
    info!(entries = reports.len(), failed, "Collection finished");

    reports
  }
}

async fn run_entry(entry: &RegistryEntry<'_>, options: &FetchOptions) -> Outcome {
  let start = match entry.source.start().await {
    Ok(start) => start,
    Err(e) => {
      warn!(protocol = entry.protocol, chain = %entry.chain, error = %e, "start failed");
      return Outcome::Failed(e);
    }
  };

  let day_end = options
    .start_timestamp
    .or_else(|| start_of_day_utc(options.timestamp))
    .map_or(options.timestamp, |day| day + ONE_DAY_SECONDS);
  if start >= day_end {
    info!(protocol = entry.protocol, chain = %entry.chain, start, "Day precedes adapter start");
    return Outcome::NotStarted { start };
  }

  match entry.source.fetch(options).await {
    Ok(record) => {
      info!(
        protocol = entry.protocol,
        chain = %entry.chain,
        timestamp = record.timestamp,
        "Metric collected"
      );
      Outcome::Collected(record)
    }
    Err(e) => {
      warn!(protocol = entry.protocol, chain = %entry.chain, error = %e, "fetch failed");
      Outcome::Failed(e)
    }
  }
}
