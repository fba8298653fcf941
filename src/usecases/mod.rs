//! Use Cases Layer - Application Workflows
//!
//! Wires adapters into a registry and runs them for a target day.
//!
//! Use cases:
//! - `AdapterRegistry`: protocol -> chain -> `MetricSource`
//! - `Collector`: one-day collection across every registered entry

pub mod collector;
pub mod registry;

pub use collector::{CollectionReport, Collector, Outcome};
pub use registry::{AdapterKind, AdapterRegistry};
