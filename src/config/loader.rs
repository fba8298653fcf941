//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    native_chains = config.native.chains.len(),
    filament_chain = %config.filament.chain,
    total_fees_window = ?config.filament.total_fees_window,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).context("Failed to parse config TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty http(s) endpoints
/// - At least one native chain
/// - Usable transport limits
fn validate_config(config: &AppConfig) -> Result<()> {
  validate_endpoint("native.endpoint", &config.native.endpoint)?;
  validate_endpoint("filament.endpoint", &config.filament.endpoint)?;

  anyhow::ensure!(
    !config.native.chains.is_empty(),
    "native.chains must list at least one chain"
  );

  anyhow::ensure!(
    config.http.timeout_seconds > 0,
    "http.timeout_seconds must be positive"
  );
  anyhow::ensure!(
    config.http.max_concurrent > 0,
    "http.max_concurrent must be positive"
  );

  anyhow::ensure!(
    config.filament.start >= 0,
    "filament.start must be a unix timestamp, got {}",
    config.filament.start
  );

  Ok(())
}

fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
  anyhow::ensure!(!endpoint.trim().is_empty(), "{field} must not be empty");
  anyhow::ensure!(
    endpoint.starts_with("http://") || endpoint.starts_with("https://"),
    "{field} must be an http(s) URL, got {endpoint}"
  );
  Ok(())
}
