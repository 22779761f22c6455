pub mod config;
pub mod connector;

pub use config::{ChannelConfig, LoadBalancingPolicy};
pub use connector::{AddressPicker, Connector};

use std::sync::Arc;

use async_trait::async_trait;
use tonic::transport::Endpoint;

use crate::connection::{ConnectionFactory, GrpcConnection};
use crate::credentials::AutoRefreshingCredentials;
use crate::error::{GrpcError, GrpcResult};

/// Dials [`GrpcConnection`]s to one configured target
///
/// Every dial goes through the same [`Connector`], so round robin keeps
/// rotating across reconnects. With credentials, each dial first makes sure
/// the cached certificate is not about to expire; the handshake itself checks
/// again for every new socket.
///
/// ## Example
/// ```ignore
/// use grpc_client::{ChannelConfig, ChannelFactory};
///
/// let factory = ChannelFactory::new(ChannelConfig::new("authorize.local", 50051));
/// let connection = factory.connect().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ChannelFactory {
  config: ChannelConfig,
  credentials: Option<Arc<AutoRefreshingCredentials>>,
  connector: Connector,
}

impl ChannelFactory {
  /// Plaintext dialing
  pub fn new(config: ChannelConfig) -> Self {
    let connector = Connector::new(&config);
    Self {
      config,
      credentials: None,
      connector,
    }
  }

  /// Mutual TLS dialing with the given credential provider
  pub fn with_credentials(config: ChannelConfig, credentials: Arc<AutoRefreshingCredentials>) -> Self {
    let connector = Connector::new(&config).with_credentials(Arc::clone(&credentials));
    Self {
      config,
      credentials: Some(credentials),
      connector,
    }
  }

  pub fn config(&self) -> &ChannelConfig {
    &self.config
  }

  pub fn credentials(&self) -> Option<&Arc<AutoRefreshingCredentials>> {
    self.credentials.as_ref()
  }

  fn endpoint(&self) -> GrpcResult<Endpoint> {
    let host = if self.config.host.contains(':') {
      format!("[{}]", self.config.host)
    } else {
      self.config.host.clone()
    };
    let addr = format!("http://{}:{}", host, self.config.port);

    let endpoint = Endpoint::from_shared(addr.clone()).map_err(|e| {
      tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
      GrpcError::InvalidUri(e)
    })?;

    Ok(self.config.apply_to_endpoint(endpoint))
  }

  /// Dial and wait until the connection is established
  pub async fn connect(&self) -> GrpcResult<GrpcConnection> {
    if let Some(credentials) = &self.credentials {
      credentials.ensure_valid_credentials().await?;
    }

    let endpoint = self.endpoint()?;
    let target = self.config.target();

    tracing::debug!(
      target: "grpc_client",
      addr = %target,
      lb_policy = %self.config.load_balancing,
      tls = self.credentials.is_some(),
      "Creating gRPC channel"
    );

    let channel = endpoint
      .connect_with_connector(self.connector.clone())
      .await
      .map_err(|e| {
        tracing::error!(
          target: "grpc_client",
          addr = %target,
          error = ?e,
          "Failed to connect to gRPC service"
        );
        GrpcError::ConnectionFailed(e)
      })?;

    Ok(GrpcConnection::ready(channel, target))
  }

  /// Build a connection that dials on first request
  pub fn connect_lazy(&self) -> GrpcResult<GrpcConnection> {
    let endpoint = self.endpoint()?;
    let target = self.config.target();

    tracing::debug!(
      target: "grpc_client",
      addr = %target,
      "Creating lazy gRPC channel (connects on first request)"
    );

    let channel = endpoint.connect_with_connector_lazy(self.connector.clone());
    Ok(GrpcConnection::lazy(channel, target))
  }
}

#[async_trait]
impl ConnectionFactory for ChannelFactory {
  type Connection = GrpcConnection;

  async fn build_connection(&self) -> GrpcResult<GrpcConnection> {
    self.connect().await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::connection::{Connection, ConnectionState};
  use crate::credentials::test_support::{SwappableFetcher, TestPki};
  use crate::credentials::{CERTIFICATE_GRACE_PERIOD, CredentialsError, MockCredentialsFetcher};
  use mockall::Sequence;

  fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
  }

  #[test]
  fn test_invalid_uri() {
    let factory = ChannelFactory::new(ChannelConfig::new("not a valid host", 50051));
    let result = factory.connect_lazy();
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_lazy_connection_starts_idle() {
    let factory = ChannelFactory::new(ChannelConfig::new("127.0.0.1", 50051));
    let connection = factory.connect_lazy().unwrap();

    assert_eq!(connection.state(), ConnectionState::Idle);
    assert_eq!(connection.target(), "127.0.0.1:50051");
  }

  #[tokio::test]
  async fn test_connection_failed() {
    let factory = ChannelFactory::new(ChannelConfig::new("127.0.0.1", closed_port()));
    let result = factory.build_connection().await;

    let err = result.unwrap_err();
    assert!(matches!(err, GrpcError::ConnectionFailed(_)));
    assert_eq!(err.code(), tonic::Code::Unavailable);
  }

  #[tokio::test]
  async fn test_dial_refreshes_expiring_credentials_first() {
    let pki = TestPki::new();
    let fetcher = Arc::new(SwappableFetcher::new(pki.issue(TestPki::not_after(time::Duration::hours(1)))));
    let credentials = AutoRefreshingCredentials::initialize(fetcher.clone(), "authorize/test", "localhost")
      .await
      .unwrap();
    fetcher.swap(pki.issue(TestPki::not_after(time::Duration::days(30))));

    let factory = ChannelFactory::with_credentials(
      ChannelConfig::new("127.0.0.1", closed_port()),
      Arc::new(credentials),
    );
    let _ = factory.connect().await;

    assert_eq!(fetcher.calls(), 2);
    let expiry = factory.credentials().unwrap().expiry();
    assert!(expiry > chrono::Utc::now() + chrono::Duration::from_std(CERTIFICATE_GRACE_PERIOD).unwrap());
  }

  #[tokio::test]
  async fn test_dial_aborts_when_refresh_fails() {
    let pki = TestPki::new();
    let expiring = pki.issue(TestPki::not_after(time::Duration::hours(1)));

    let mut fetcher = MockCredentialsFetcher::new();
    let mut seq = Sequence::new();
    fetcher
      .expect_fetch()
      .times(1)
      .in_sequence(&mut seq)
      .returning(move |_| Ok(expiring.clone()));
    fetcher
      .expect_fetch()
      .times(1)
      .in_sequence(&mut seq)
      .returning(|name| {
        Err(CredentialsError::Fetch {
          secret_name: name.to_string(),
          reason: "access denied".to_string(),
        })
      });

    let credentials = AutoRefreshingCredentials::initialize(Arc::new(fetcher), "authorize/test", "localhost")
      .await
      .unwrap();
    let factory = ChannelFactory::with_credentials(
      ChannelConfig::new("127.0.0.1", closed_port()),
      Arc::new(credentials),
    );

    let err = factory.build_connection().await.unwrap_err();
    assert!(matches!(err, GrpcError::Credentials(CredentialsError::Fetch { .. })));
  }
}
