//! GraphQL over HTTP - Subgraph Query Envelope
//!
//! Subgraph gateways take a JSON POST of `{query, variables}` and answer
//! with `{data, errors}`. Errors in the envelope become
//! `AdapterError::GraphQl`; transport failures pass through unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::client::HttpClient;
use crate::error::AdapterError;

/// Request body for a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    /// Query document.
    pub query: &'a str,
    /// Query variables.
    pub variables: V,
}

/// Response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result, absent when the query failed.
    pub data: Option<T>,
    /// Errors reported by the endpoint.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message.
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap `data`, turning an `errors` array into an error.
    pub fn into_data(self) -> Result<T, AdapterError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(AdapterError::GraphQl(messages.join("; ")));
        }
        self.data.ok_or(AdapterError::EmptyResponse)
    }
}

/// POST a query to `endpoint` and return its `data`.
pub async fn request<V, T>(
    client: &HttpClient,
    endpoint: &str,
    query: &str,
    variables: V,
) -> Result<T, AdapterError>
where
    V: Serialize + Send,
    T: DeserializeOwned,
{
    let body = GraphQlRequest { query, variables };
    let response: GraphQlResponse<T> = client.post_json(endpoint, &body).await?;
    response.into_data()
}
