//! Metric Source Port - Daily Metric Interface
//!
//! One implementation per (protocol, chain). Calls are stateless
//! request/response cycles and may run concurrently.

use async_trait::async_trait;

use crate::domain::metric::{AdapterMeta, FetchOptions, MetricRecord};
use crate::error::AdapterError;

/// Capability exposed by every adapter entry in the registry.
#[async_trait]
pub trait MetricSource: Send + Sync + 'static {
  /// Earliest unix timestamp (seconds) for which the source has data.
  ///
  /// Either a configured constant or derived from the source itself.
  async fn start(&self) -> Result<i64, AdapterError>;

  /// Metric for the day selected by `options`.
  ///
  /// The returned record's `timestamp` is day-aligned. A day the source
  /// has no row for yields `None` fields, not an error.
  async fn fetch(&self, options: &FetchOptions) -> Result<MetricRecord, AdapterError>;

  /// Descriptive metadata (methodology text).
  fn meta(&self) -> AdapterMeta {
    AdapterMeta::default()
  }
}
