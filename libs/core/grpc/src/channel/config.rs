use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tonic::transport::Endpoint;

use crate::context::DEFAULT_REQUEST_TIMEOUT;
use crate::error::GrpcError;
use crate::retry::RetryConfig;

/// Client-side strategy for choosing among the addresses a host resolves to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadBalancingPolicy {
  /// Always dial the first resolved address
  PickFirst,
  /// Rotate through resolved addresses on every dial
  #[default]
  RoundRobin,
}

impl fmt::Display for LoadBalancingPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LoadBalancingPolicy::PickFirst => f.write_str("pick_first"),
      LoadBalancingPolicy::RoundRobin => f.write_str("round_robin"),
    }
  }
}

impl FromStr for LoadBalancingPolicy {
  type Err = GrpcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "pick_first" | "pick-first" => Ok(LoadBalancingPolicy::PickFirst),
      "round_robin" | "round-robin" => Ok(LoadBalancingPolicy::RoundRobin),
      other => Err(GrpcError::InvalidConfig(format!(
        "unknown load balancing policy: {other}"
      ))),
    }
  }
}

/// Everything needed to dial the remote endpoint
///
/// Provides builder pattern for customizing the target, HTTP/2 and TCP
/// settings, and the per-call retry policy.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // Target
  pub host: String,
  pub port: u16,
  pub load_balancing: LoadBalancingPolicy,

  // Per-call settings
  pub request_timeout: Duration,
  pub retry: RetryConfig,

  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,

  // Window sizes (HTTP/2 flow control)
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      host: "localhost".to_string(),
      port: 50051,
      load_balancing: LoadBalancingPolicy::RoundRobin,
      request_timeout: DEFAULT_REQUEST_TIMEOUT,
      retry: RetryConfig::default(),
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
    }
  }
}

impl ChannelConfig {
  /// Create a configuration for `host:port` with production defaults
  pub fn new(host: impl Into<String>, port: u16) -> Self {
    Self {
      host: host.into(),
      port,
      ..Self::default()
    }
  }

  /// `host:port` as passed to DNS
  pub fn target(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  /// Set the load balancing policy
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new("authorize.local", 50051)
  ///     .with_load_balancing(LoadBalancingPolicy::PickFirst);
  /// ```
  pub fn with_load_balancing(mut self, policy: LoadBalancingPolicy) -> Self {
    self.load_balancing = policy;
    self
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the default timeout for calls made without a deadline
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new("authorize.local", 50051)
  ///     .with_request_timeout(Duration::from_secs(120));
  /// ```
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = timeout;
    self
  }

  pub fn with_retry(mut self, retry: RetryConfig) -> Self {
    self.retry = retry;
    self
  }

  /// Set the HTTP/2 keep-alive interval
  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.http2_keep_alive_interval = Some(interval);
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Set both connection and stream window sizes to the same value
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.initial_connection_window_size = Some(size);
    self.initial_stream_window_size = Some(size);
    self
  }

  /// Apply the HTTP/2 settings to a tonic Endpoint
  ///
  /// TCP settings and the connect timeout are honoured by the connector, and
  /// per-call deadlines by the transport, so neither is set here.
  pub(crate) fn apply_to_endpoint(&self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle);

    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }
    endpoint.http2_adaptive_window(self.http2_adaptive_window)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.load_balancing, LoadBalancingPolicy::RoundRobin);
    assert_eq!(config.request_timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.initial_connection_window_size, Some(1024 * 1024));
    assert_eq!(config.retry, RetryConfig::default());
    assert!(config.tcp_nodelay);
    assert!(config.http2_adaptive_window);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new("authorize.internal", 443)
      .with_load_balancing(LoadBalancingPolicy::PickFirst)
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(120))
      .with_retry(RetryConfig::disabled())
      .with_window_size(2 * 1024 * 1024);

    assert_eq!(config.target(), "authorize.internal:443");
    assert_eq!(config.load_balancing, LoadBalancingPolicy::PickFirst);
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.request_timeout, Duration::from_secs(120));
    assert_eq!(config.retry.max_retries, 0);
    assert_eq!(config.initial_stream_window_size, Some(2 * 1024 * 1024));
  }

  #[test]
  fn test_disable_keep_alive() {
    let config = ChannelConfig::default().without_keep_alive();
    assert_eq!(config.http2_keep_alive_interval, None);
  }

  #[test]
  fn test_parse_load_balancing_policy() {
    assert_eq!(
      "round_robin".parse::<LoadBalancingPolicy>().unwrap(),
      LoadBalancingPolicy::RoundRobin
    );
    assert_eq!(
      "PICK_FIRST".parse::<LoadBalancingPolicy>().unwrap(),
      LoadBalancingPolicy::PickFirst
    );
    assert!(matches!(
      "random".parse::<LoadBalancingPolicy>(),
      Err(GrpcError::InvalidConfig(_))
    ));
  }
}
