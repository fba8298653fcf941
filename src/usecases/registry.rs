//! Adapter Registry - Protocol and Chain Lookup
//!
//! Maps a protocol name to its per-chain `MetricSource`s. Lookups are
//! read-only after construction, so the registry is shared behind an
//! `Arc` without locking.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::adapters::filament::{self, FilamentFeeSource};
use crate::adapters::http::HttpClient;
use crate::adapters::native::{self, NativeVolumeSource};
use crate::config::AppConfig;
use crate::domain::chain::Chain;
use crate::ports::MetricSource;

/// Which metric family an adapter reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
  /// Trading volume.
  Dexs,
  /// Protocol fees.
  Fees,
}

impl fmt::Display for AdapterKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Dexs => f.write_str("dexs"),
      Self::Fees => f.write_str("fees"),
    }
  }
}

/// All chains of one protocol.
#[derive(Clone)]
pub struct ProtocolAdapter {
  /// Metric family.
  pub kind: AdapterKind,
  /// Source per chain.
  pub chains: BTreeMap<Chain, Arc<dyn MetricSource>>,
}

/// One (protocol, chain) pair as yielded by `AdapterRegistry::entries`.
#[derive(Clone)]
pub struct RegistryEntry<'a> {
  /// Protocol name.
  pub protocol: &'a str,
  /// Metric family.
  pub kind: AdapterKind,
  /// Chain.
  pub chain: Chain,
  /// Source.
  pub source: &'a Arc<dyn MetricSource>,
}

/// Protocol name -> `ProtocolAdapter`.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
  protocols: BTreeMap<String, ProtocolAdapter>,
}

impl AdapterRegistry {
  /// Empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registry with every configured adapter.
  pub fn from_config(config: &AppConfig, client: &Arc<HttpClient>) -> Self {
    let mut registry = Self::new();

    for source in NativeVolumeSource::from_config(client, &config.native) {
      let chain = source.chain();
      registry.register(native::PROTOCOL, AdapterKind::Dexs, chain, Arc::new(source));
    }

    let fees = FilamentFeeSource::new(Arc::clone(client), &config.filament);
    let chain = fees.chain();
    registry.register(filament::PROTOCOL, AdapterKind::Fees, chain, Arc::new(fees));

    info!(
      protocols = registry.protocols.len(),
      entries = registry.len(),
      "Adapter registry built"
    );

    registry
  }

  /// Add or replace the source for `(protocol, chain)`.
  ///
  /// The protocol's kind is set on first registration.
  pub fn register(
    &mut self,
    protocol: &str,
    kind: AdapterKind,
    chain: Chain,
    source: Arc<dyn MetricSource>,
  ) {
    self
      .protocols
      .entry(protocol.to_string())
      .or_insert_with(|| ProtocolAdapter {
        kind,
        chains: BTreeMap::new(),
      })
      .chains
      .insert(chain, source);
  }

  /// Adapter set for a protocol.
  pub fn protocol(&self, protocol: &str) -> Option<&ProtocolAdapter> {
    self.protocols.get(protocol)
  }

  /// Source for `(protocol, chain)`.
  pub fn get(&self, protocol: &str, chain: Chain) -> Option<&Arc<dyn MetricSource>> {
    self.protocols.get(protocol)?.chains.get(&chain)
  }

  /// Every (protocol, chain) pair, ordered by protocol then chain.
  pub fn entries(&self) -> impl Iterator<Item = RegistryEntry<'_>> {
    self.protocols.iter().flat_map(|(protocol, adapter)| {
      adapter.chains.iter().map(move |(&chain, source)| RegistryEntry {
        protocol: protocol.as_str(),
        kind: adapter.kind,
        chain,
        source,
      })
    })
  }

  /// Number of (protocol, chain) pairs.
  pub fn len(&self) -> usize {
    self.protocols.values().map(|p| p.chains.len()).sum()
  }

  /// Whether no adapter is registered.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::HttpClientConfig;
  use crate::config::loader::parse_config;

  const CONFIG: &str = r#"
    [collector]
    name = "test"

    [native]
    endpoint = "http://localhost/analytics/overview"

    [filament]
    endpoint = "https://localhost/gn"
  "#;

  #[test]
  fn test_from_config_registers_every_chain() {
    let config = parse_config(CONFIG).unwrap();
    let client = Arc::new(HttpClient::new(HttpClientConfig::default()).unwrap());
    let registry = AdapterRegistry::from_config(&config, &client);

    assert_eq!(registry.len(), 3);
    assert!(registry.get("native", Chain::Ethereum).is_some());
    assert!(registry.get("native", Chain::Bsc).is_some());
    assert!(registry.get("native", Chain::Sei).is_none());
    assert!(registry.get("filament", Chain::Sei).is_some());
    assert_eq!(registry.protocol("filament").unwrap().kind, AdapterKind::Fees);
  }

  #[test]
  fn test_entries_order() {
    let config = parse_config(CONFIG).unwrap();
    let client = Arc::new(HttpClient::new(HttpClientConfig::default()).unwrap());
    let registry = AdapterRegistry::from_config(&config, &client);

    let pairs: Vec<(String, Chain)> = registry
      .entries()
      .map(|e| (e.protocol.to_string(), e.chain))
      .collect();
    assert_eq!(
      pairs,
      vec![
        ("filament".to_string(), Chain::Sei),
        ("native".to_string(), Chain::Ethereum),
        ("native".to_string(), Chain::Bsc),
      ]
    );
  }

  #[test]
  fn test_empty_registry() {
    assert!(AdapterRegistry::new().is_empty());
  }
}
