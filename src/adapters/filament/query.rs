//! Filament subgraph query document and row types.

use serde::{Deserialize, Serialize};

/// Trading fee rows with a timestamp in `[$from, $to]`.
pub const TRADING_FEES_QUERY: &str = r"
  query stats($from: String!, $to: String!) {
    totalTradingFees(
      where: {
        timestamp_gte: $from
        timestamp_lte: $to
      }
    ) {
      timestamp_
      block_number
      account
      totalFees
    }
  }
";

/// Query variables; the subgraph takes timestamps as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeWindow {
    /// Inclusive lower bound (unix seconds).
    pub from: String,
    /// Inclusive upper bound (unix seconds).
    pub to: String,
}

impl FeeWindow {
    /// Window over `[from, to]`.
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// `data` of the trading fee query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingFeesData {
    /// Matching rows.
    pub total_trading_fees: Vec<TradingFeeRow>,
}

/// One fee event as indexed by the subgraph.
#[derive(Debug, Clone, Deserialize)]
pub struct TradingFeeRow {
    /// Block timestamp.
    #[serde(rename = "timestamp_", default)]
    pub timestamp: Option<String>,
    /// Block number.
    #[serde(default)]
    pub block_number: Option<String>,
    /// Trader account.
    #[serde(default)]
    pub account: Option<String>,
    /// Fees in token base units, as a decimal string.
    #[serde(rename = "totalFees")]
    pub total_fees: String,
}
