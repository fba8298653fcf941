//! HTTP Transport Adapter
//!
//! Sub-modules:
//! - `client`: reqwest wrapper with timeout, concurrency limit and retries
//! - `graphql`: GraphQL request/response envelope over the same client

pub mod client;
pub mod graphql;

pub use client::{HttpClient, HttpClientConfig};
