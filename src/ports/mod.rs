//! Ports Layer - Adapter Boundary
//!
//! Defines the capability every protocol adapter implements so the
//! registry and the collector never see transport details.
//!
//! Port categories:
//! - `MetricSource`: earliest data timestamp + daily metric fetch

pub mod metric_source;

pub use metric_source::MetricSource;
