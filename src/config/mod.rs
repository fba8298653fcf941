//! Configuration Module - TOML-based Collector Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! Endpoint URLs, chain lists and start timestamps are externalized
//! here - adapters receive them through their constructors.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::domain::chain::Chain;

/// Top-level configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before any adapter is built.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Collector identity and run parameters.
  pub collector: CollectorConfig,
  /// Shared HTTP transport settings.
  #[serde(default)]
  pub http: HttpConfig,
  /// Native DEX volume adapter (REST).
  pub native: NativeConfig,
  /// Filament fee adapter (subgraph).
  pub filament: FilamentConfig,
}

/// Collector identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
  /// Human-readable collector name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Target unix timestamp; the current time when absent.
  pub timestamp: Option<i64>,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
  /// Maximum in-flight requests across all adapters.
  #[serde(default = "default_max_concurrent")]
  pub max_concurrent: usize,
  /// Retries on transient errors (0 = single attempt).
  #[serde(default)]
  pub max_retries: u32,
  /// Base delay between retries (exponential backoff), milliseconds.
  #[serde(default = "default_retry_delay")]
  pub retry_base_delay_ms: u64,
  /// User-Agent header sent with every request.
  #[serde(default = "default_user_agent")]
  pub user_agent: String,
}

impl HttpConfig {
  /// Request timeout as a `Duration`.
  pub const fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }

  /// Retry base delay as a `Duration`.
  pub const fn retry_base_delay(&self) -> Duration {
    Duration::from_millis(self.retry_base_delay_ms)
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout_seconds: default_timeout(),
      max_concurrent: default_max_concurrent(),
      max_retries: 0,
      retry_base_delay_ms: default_retry_delay(),
      user_agent: default_user_agent(),
    }
  }
}

/// Native analytics overview configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NativeConfig {
  /// Analytics overview endpoint, queried with `?chain=<id>`.
  pub endpoint: String,
  /// Chains to register, one adapter each.
  #[serde(default = "default_native_chains")]
  pub chains: Vec<Chain>,
}

/// Filament subgraph configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FilamentConfig {
  /// Subgraph gateway URL.
  pub endpoint: String,
  /// Chain the subgraph indexes.
  #[serde(default = "default_filament_chain")]
  pub chain: Chain,
  /// First timestamp with fee data.
  #[serde(default = "default_filament_start")]
  pub start: i64,
  /// Window used for the `totalFees` query.
  #[serde(default)]
  pub total_fees_window: TotalFeesWindow,
}

/// How the `totalFees` figure is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalFeesWindow {
  /// Same bounded window as `dailyFees`; both figures are equal.
  #[default]
  SameAsDaily,
  /// From the adapter's start timestamp up to the window end.
  SinceStart,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_timeout() -> u64 {
  30
}

const fn default_max_concurrent() -> usize {
  10
}

const fn default_retry_delay() -> u64 {
  200
}

fn default_user_agent() -> String {
  concat!("chain-metric-adapters/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_native_chains() -> Vec<Chain> {
  vec![Chain::Ethereum, Chain::Bsc]
}

const fn default_filament_chain() -> Chain {
  Chain::Sei
}

const fn default_filament_start() -> i64 {
  1_725_741_586
}
