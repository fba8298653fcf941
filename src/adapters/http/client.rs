//! Analytics HTTP Client - Shared REST/GraphQL Transport
//!
//! Wraps reqwest with a request timeout, a concurrency limit and
//! optional retries for every outbound analytics call. With the default
//! `max_retries = 0` each call is exactly one request and any failure
//! is returned to the caller as-is.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::AdapterError;

/// Configuration for the analytics HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Retries on transient errors.
    pub max_retries: u32,
    /// Base delay between retries (exponential backoff).
    pub retry_base_delay: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for HttpClientConfig {
    fn from(config: &HttpConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_concurrent: config.max_concurrent.max(1),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Concurrency-limited JSON client shared by all adapters.
#[derive(Debug)]
pub struct HttpClient {
    /// Underlying HTTP client.
    http: Client,
    /// Client configuration.
    config: HttpClientConfig,
    /// Concurrency limiter.
    semaphore: Arc<Semaphore>,
}

impl HttpClient {
    /// Create a new client.
    pub fn new(config: HttpClientConfig) -> Result<Self, AdapterError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(5)
            .build()?;

        let semaphore = Arc::new(Semaphore::new(config.max_concurrent));

        Ok(Self {
            http,
            config,
            semaphore,
        })
    }

    /// GET `url` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AdapterError> {
        let request = self.http.get(url);
        let body = self.execute_with_retry(request, "GET", url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST `payload` as JSON to `url` and decode the JSON body.
    pub async fn post_json<B, T>(&self, url: &str, payload: &B) -> Result<T, AdapterError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(url).json(payload);
        let body = self.execute_with_retry(request, "POST", url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request, retrying transient failures up to `max_retries`.
    async fn execute_with_retry(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<Vec<u8>, AdapterError> {
        // The semaphore is owned here and never closed.
        let _permit = self.semaphore.acquire().await.ok();

        let mut attempt = 0;
        loop {
            let Some(req) = request.try_clone() else {
                // Streaming bodies cannot be replayed; send once.
                return Self::send_once(request, url).await;
            };

            match Self::send_once(req, url).await {
                Ok(body) => {
                    debug!(method, url, bytes = body.len(), "Request succeeded");
                    return Ok(body);
                }
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = backoff_delay(self.config.retry_base_delay, attempt);
                    warn!(
                        method,
                        url,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "Transient failure, retrying"
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(request: RequestBuilder, url: &str) -> Result<Vec<u8>, AdapterError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AdapterError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }
}

/// Delay before retry number `attempt` (1-based): `base * 2^(attempt - 1)`,
/// saturating instead of overflowing for large attempt counts.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
}
