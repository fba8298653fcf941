//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements `crate::ports::MetricSource` against concrete analytics
//! sources. Each sub-module is one protocol; `http` is the shared
//! transport they all go through.
//!
//! Adapter categories:
//! - `http`: reqwest client and GraphQL envelope
//! - `native`: DEX volume from a REST analytics overview
//! - `filament`: protocol fees from a subgraph

pub mod filament;
pub mod http;
pub mod native;

pub use filament::FilamentFeeSource;
pub use native::NativeVolumeSource;
