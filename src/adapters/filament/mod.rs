//! Filament Fee Adapter - Subgraph Source on Sei
//!
//! Sums `totalFees` (18-decimal base units) over the requested window
//! and reports whole-token `dailyFees` and `totalFees` strings.
//!
//! With `TotalFeesWindow::SameAsDaily` the "total" query runs over the
//! same bounded window as the daily one, so both figures are equal.
//! `SinceStart` widens it to begin at the adapter start timestamp.

pub mod query;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::adapters::http::{graphql, HttpClient};
use crate::config::{FilamentConfig, TotalFeesWindow};
use crate::domain::chain::Chain;
use crate::domain::fees::{self, TOKEN_DECIMALS};
use crate::domain::metric::{AdapterMeta, FetchOptions, MetricRecord};
use crate::domain::time::start_of_day_utc;
use crate::error::AdapterError;
use crate::ports::MetricSource;

use query::{FeeWindow, TradingFeesData, TRADING_FEES_QUERY};

/// Protocol name in the registry.
pub const PROTOCOL: &str = "filament";

const METHODOLOGY_TOTAL_FEES: &str =
    "Tracks the cumulative fees (borrowing fees + trading fees) generated by all transactions.";
const METHODOLOGY_DAILY_FEES: &str =
    "Tracks the fees (borrowing fees + trading fees) generated by transactions on a daily basis.";

/// Daily/total fee source backed by the Filament subgraph.
#[derive(Debug, Clone)]
pub struct FilamentFeeSource {
    client: Arc<HttpClient>,
    endpoint: String,
    chain: Chain,
    start: i64,
    total_window: TotalFeesWindow,
}

impl FilamentFeeSource {
    /// Create a source from config.
    pub fn new(client: Arc<HttpClient>, config: &FilamentConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            chain: config.chain,
            start: config.start,
            total_window: config.total_fees_window,
        }
    }

    /// Chain the subgraph indexes.
    pub const fn chain(&self) -> Chain {
        self.chain
    }

    /// Bounds of the `totalFees` query for a `[start, end]` daily window.
    pub fn total_window(&self, start: i64, end: i64) -> FeeWindow {
        match self.total_window {
            TotalFeesWindow::SameAsDaily => FeeWindow::new(start, end),
            TotalFeesWindow::SinceStart => FeeWindow::new(self.start.min(start), end),
        }
    }

    /// Run the fee query and sum the window in whole tokens.
    async fn fees_in_window(&self, window: FeeWindow) -> Result<String, AdapterError> {
        let data: TradingFeesData =
            graphql::request(&self.client, &self.endpoint, TRADING_FEES_QUERY, &window).await?;

        debug!(
            from = %window.from,
            to = %window.to,
            rows = data.total_trading_fees.len(),
            "Trading fee rows fetched"
        );

        let total = fees::total_in_tokens(
            data.total_trading_fees.iter().map(|row| row.total_fees.as_str()),
            TOKEN_DECIMALS,
        )?;
        Ok(total)
    }
}

#[async_trait]
impl MetricSource for FilamentFeeSource {
    async fn start(&self) -> Result<i64, AdapterError> {
        Ok(self.start)
    }

    #[instrument(skip(self), fields(protocol = PROTOCOL, chain = %self.chain))]
    async fn fetch(&self, options: &FetchOptions) -> Result<MetricRecord, AdapterError> {
        let (Some(start), Some(end)) = (options.start_timestamp, options.end_timestamp) else {
            return Err(AdapterError::MissingTimestamps);
        };

        let day = start_of_day_utc(start).ok_or(AdapterError::InvalidTimestamp(start))?;

        let daily_fees = self.fees_in_window(FeeWindow::new(start, end)).await?;
        let total_fees = self.fees_in_window(self.total_window(start, end)).await?;

        Ok(MetricRecord::fees(day, daily_fees, total_fees))
    }

    fn meta(&self) -> AdapterMeta {
        AdapterMeta::with_methodology([
            ("totalFees", METHODOLOGY_TOTAL_FEES),
            ("dailyFees", METHODOLOGY_DAILY_FEES),
        ])
    }
}
