//! Native DEX Volume Adapter - Analytics Overview REST Source
//!
//! Reads `GET <endpoint>?chain=<chain>`, a JSON array with one row per
//! UTC day, and reports the row matching the requested day as
//! `dailyVolume`. The earliest row's date is the adapter start.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::adapters::http::HttpClient;
use crate::config::NativeConfig;
use crate::domain::chain::Chain;
use crate::domain::metric::{FetchOptions, MetricRecord};
use crate::domain::time::start_of_day_utc;
use crate::domain::volume::{self, AnalyticsEntry};
use crate::error::AdapterError;
use crate::ports::MetricSource;

/// Protocol name in the registry.
pub const PROTOCOL: &str = "native";

/// Daily volume source for one chain.
#[derive(Debug, Clone)]
pub struct NativeVolumeSource {
    client: Arc<HttpClient>,
    endpoint: String,
    chain: Chain,
}

impl NativeVolumeSource {
    /// Create a source reading `endpoint` for `chain`.
    pub fn new(client: Arc<HttpClient>, endpoint: impl Into<String>, chain: Chain) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            chain,
        }
    }

    /// One source per configured chain.
    pub fn from_config(client: &Arc<HttpClient>, config: &NativeConfig) -> Vec<Self> {
        config
            .chains
            .iter()
            .map(|&chain| Self::new(Arc::clone(client), config.endpoint.clone(), chain))
            .collect()
    }

    /// Chain this source reports on.
    pub const fn chain(&self) -> Chain {
        self.chain
    }

    fn overview_url(&self) -> String {
        format!("{}?chain={}", self.endpoint, self.chain)
    }

    async fn overview(&self) -> Result<Vec<AnalyticsEntry>, AdapterError> {
        let entries: Vec<AnalyticsEntry> = self.client.get_json(&self.overview_url()).await?;
        debug!(chain = %self.chain, rows = entries.len(), "Analytics overview fetched");
        Ok(entries)
    }
}

#[async_trait]
impl MetricSource for NativeVolumeSource {
    #[instrument(skip(self), fields(protocol = PROTOCOL, chain = %self.chain))]
    async fn start(&self) -> Result<i64, AdapterError> {
        let entries = self.overview().await?;
        volume::earliest_date(&entries).ok_or(AdapterError::NoData { chain: self.chain })
    }

    #[instrument(skip(self), fields(protocol = PROTOCOL, chain = %self.chain))]
    async fn fetch(&self, options: &FetchOptions) -> Result<MetricRecord, AdapterError> {
        let day = start_of_day_utc(options.timestamp)
            .ok_or(AdapterError::InvalidTimestamp(options.timestamp))?;

        let entries = self.overview().await?;
        let daily_volume = volume::daily_volume(&entries, day);
        if daily_volume.is_none() {
            debug!(day, "No analytics row for day");
        }

        Ok(MetricRecord::volume(day, daily_volume))
    }
}
