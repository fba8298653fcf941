//! Daily metric records and the request shape adapters receive.
//!
//! A `MetricRecord` is built per call and handed back to the caller;
//! nothing here is cached or persisted.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time::{start_of_day_utc, ONE_DAY_SECONDS};

/// One day's aggregate metric for one chain.
///
/// Fields left as `None` were not produced by the adapter (or, for
/// `daily_volume`, had no matching source row).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// Day-aligned unix timestamp (seconds).
    pub timestamp: i64,
    /// Traded volume in USD, written as a JSON number.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub daily_volume: Option<Decimal>,
    /// Fees collected over the requested window, in whole tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_fees: Option<String>,
    /// Fees reported as the "total" figure, in whole tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fees: Option<String>,
}

impl MetricRecord {
    /// Volume record for a day.
    pub const fn volume(timestamp: i64, daily_volume: Option<Decimal>) -> Self {
        Self {
            timestamp,
            daily_volume,
            daily_fees: None,
            total_fees: None,
        }
    }

    /// Fee record for a day.
    pub const fn fees(timestamp: i64, daily_fees: String, total_fees: String) -> Self {
        Self {
            timestamp,
            daily_volume: None,
            daily_fees: Some(daily_fees),
            total_fees: Some(total_fees),
        }
    }
}

/// Arguments passed to `MetricSource::fetch`.
///
/// Volume adapters key off `timestamp`; window-based fee adapters need
/// both bounds and reject the call when either is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchOptions {
    /// Target timestamp (unix seconds), not necessarily aligned.
    pub timestamp: i64,
    /// Inclusive lower bound of the query window.
    pub start_timestamp: Option<i64>,
    /// Inclusive upper bound of the query window.
    pub end_timestamp: Option<i64>,
}

impl FetchOptions {
    /// Bare timestamp with no window.
    pub const fn at(timestamp: i64) -> Self {
        Self {
            timestamp,
            start_timestamp: None,
            end_timestamp: None,
        }
    }

    /// Window covering the UTC day that contains `timestamp`.
    ///
    /// Returns `None` for timestamps chrono cannot represent.
    pub fn for_day(timestamp: i64) -> Option<Self> {
        let start = start_of_day_utc(timestamp)?;
        Some(Self {
            timestamp,
            start_timestamp: Some(start),
            end_timestamp: Some(start + ONE_DAY_SECONDS),
        })
    }
}

/// Static description attached to an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdapterMeta {
    /// Metric name (`dailyFees`, `totalFees`, ...) to a plain-text
    /// description of how it is computed.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub methodology: BTreeMap<String, String>,
}

impl AdapterMeta {
    /// Metadata with methodology entries.
    pub fn with_methodology<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            methodology: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_volume_record_serializes_camel_case() {
        let record = MetricRecord::volume(1_725_667_200, Some(dec!(1234.5)));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], 1_725_667_200);
        assert_eq!(json["dailyVolume"], 1234.5);
        assert!(json.get("dailyFees").is_none());
    }

    #[test]
    fn test_volume_round_trips_from_number() {
        let record: MetricRecord =
            serde_json::from_str(r#"{"timestamp":86400,"dailyVolume":5000.25}"#).unwrap();
        assert_eq!(record.daily_volume, Some(dec!(5000.25)));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"timestamp":86400,"dailyVolume":5000.25}"#
        );
    }

    #[test]
    fn test_missing_volume_is_omitted() {
        let record = MetricRecord::volume(0, None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"timestamp":0}"#);
    }

    #[test]
    fn test_for_day_window() {
        let opts = FetchOptions::for_day(1_725_742_786).unwrap();
        assert_eq!(opts.start_timestamp, Some(1_725_667_200));
        assert_eq!(opts.end_timestamp, Some(1_725_753_600));
        assert_eq!(opts.timestamp, 1_725_742_786);
    }

    #[test]
    fn test_at_has_no_window() {
        let opts = FetchOptions::at(42);
        assert!(opts.start_timestamp.is_none());
        assert!(opts.end_timestamp.is_none());
    }
}
