//! Bounded retry with linear backoff for transient gRPC failures.
//!
//! Only a fixed allow-list of status codes is retried. Local errors
//! (validation, credentials, reconnect, deadline) are surfaced on the first
//! occurrence.

use std::future::Future;
use std::time::Duration;

use tonic::Code;

use crate::error::{GrpcError, GrpcResult};

/// Status codes that are safe to retry without side effects.
pub const RETRYABLE_CODES: [Code; 3] = [Code::Unavailable, Code::ResourceExhausted, Code::Aborted];

/// Retry policy applied per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt (total attempts = max_retries + 1)
    pub max_retries: u32,
    /// Delay added per retry: retry `n` waits `n * backoff_increment`
    pub backoff_increment: Duration,
    pub retryable_codes: Vec<Code>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_increment: Duration::from_millis(100),
            retryable_codes: RETRYABLE_CODES.to_vec(),
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_increment(mut self, increment: Duration) -> Self {
        self.backoff_increment = increment;
        self
    }

    /// Single attempt, no retries.
    pub fn disabled() -> Self {
        Self::default().with_max_retries(0)
    }

    pub fn is_retryable(&self, err: &GrpcError) -> bool {
        match err {
            GrpcError::Status(status) => self.retryable_codes.contains(&status.code()),
            _ => false,
        }
    }

    /// Delay before the given retry (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        self.backoff_increment.saturating_mul(retry)
    }
}

/// Run `operation` with the default retry policy.
pub async fn retry<F, Fut, T>(operation: F) -> GrpcResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = GrpcResult<T>>,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Run `operation`, retrying transient failures with linear backoff.
///
/// When the budget is exhausted the last observed error is returned.
pub async fn retry_with_backoff<F, Fut, T>(mut operation: F, config: RetryConfig) -> GrpcResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = GrpcResult<T>>,
{
    let mut retries = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if retries < config.max_retries && config.is_retryable(&err) => {
                retries += 1;
                let delay = config.backoff(retries);
                tracing::warn!(
                    target: "grpc_client",
                    retry = retries,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    code = ?err.code(),
                    "Transient gRPC failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
