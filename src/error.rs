//! Adapter error taxonomy.
//!
//! A missing match is never an error (the record carries `None`);
//! everything else surfaces here unmodified.

use crate::domain::chain::Chain;
use crate::domain::fees::InvalidAmount;

/// Errors returned by `MetricSource` implementations and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// A window-based adapter was called without both bounds.
    #[error("startTimestamp and endTimestamp must be provided")]
    MissingTimestamps,

    /// Timestamp outside the representable calendar range.
    #[error("timestamp {0} cannot be aligned to a UTC day")]
    InvalidTimestamp(i64),

    /// Connection, TLS, timeout or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("{url} returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Response body, possibly empty.
        body: String,
    },

    /// Response body is not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("graphql error: {0}")]
    GraphQl(String),

    /// The GraphQL endpoint answered with neither `data` nor `errors`.
    #[error("graphql response has no data")]
    EmptyResponse,

    /// The source returned no rows, so no start date exists.
    #[error("no analytics data available for {chain}")]
    NoData {
        /// Chain whose series was empty.
        chain: Chain,
    },

    /// A fee amount could not be parsed as a decimal.
    #[error(transparent)]
    InvalidDecimal(#[from] InvalidAmount),
}

impl AdapterError {
    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
