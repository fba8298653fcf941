//! Domain layer - metric records and the arithmetic behind them.
//!
//! Pure functions and plain data: no HTTP, no runtime. Adapters feed
//! source rows in and get normalized `MetricRecord`s back.

pub mod chain;
pub mod fees;
pub mod metric;
pub mod time;
pub mod volume;

pub use chain::Chain;
pub use metric::{AdapterMeta, FetchOptions, MetricRecord};
pub use volume::AnalyticsEntry;
