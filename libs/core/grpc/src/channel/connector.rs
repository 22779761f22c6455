use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use hyper_util::rt::TokioIo;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tonic::transport::Uri;
use tower::Service;

use super::config::{ChannelConfig, LoadBalancingPolicy};
use crate::credentials::AutoRefreshingCredentials;
use crate::error::{GrpcError, GrpcResult};

/// Byte stream handed to hyper: plain TCP or TLS over TCP.
pub trait Io: AsyncRead + AsyncWrite + Send + Unpin + 'static {}

impl<T> Io for T where T: AsyncRead + AsyncWrite + Send + Unpin + 'static {}

/// Orders resolved addresses according to the load balancing policy.
#[derive(Debug)]
pub struct AddressPicker {
  policy: LoadBalancingPolicy,
  next: AtomicUsize,
}

impl AddressPicker {
  pub fn new(policy: LoadBalancingPolicy) -> Self {
    Self {
      policy,
      next: AtomicUsize::new(0),
    }
  }

  /// Addresses in the order they should be tried.
  ///
  /// Round robin starts one position further on every dial; pick first always
  /// starts at the first resolved address.
  pub fn order(&self, mut addrs: Vec<SocketAddr>) -> Vec<SocketAddr> {
    if self.policy == LoadBalancingPolicy::RoundRobin && !addrs.is_empty() {
      let start = self.next.fetch_add(1, Ordering::Relaxed) % addrs.len();
      addrs.rotate_left(start);
    }
    addrs
  }
}

/// Dials the configured host for tonic, optionally wrapping the socket in TLS.
///
/// The URI tonic passes in is ignored: resolution and address selection happen
/// here so the load balancing policy sees every address the host resolves to.
#[derive(Debug, Clone)]
pub struct Connector {
  host: Arc<str>,
  port: u16,
  picker: Arc<AddressPicker>,
  credentials: Option<Arc<AutoRefreshingCredentials>>,
  connect_timeout: Duration,
  tcp_nodelay: bool,
}

impl Connector {
  pub fn new(config: &ChannelConfig) -> Self {
    Self {
      host: Arc::from(config.host.as_str()),
      port: config.port,
      picker: Arc::new(AddressPicker::new(config.load_balancing)),
      credentials: None,
      connect_timeout: config.connect_timeout,
      tcp_nodelay: config.tcp_nodelay,
    }
  }

  pub fn with_credentials(mut self, credentials: Arc<AutoRefreshingCredentials>) -> Self {
    self.credentials = Some(credentials);
    self
  }

  async fn resolve(&self) -> GrpcResult<Vec<SocketAddr>> {
    let target = format!("{}:{}", self.host, self.port);
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((&*self.host, self.port))
      .await
      .map_err(|e| GrpcError::Resolve {
        target: target.clone(),
        reason: e.to_string(),
      })?
      .collect();

    if addrs.is_empty() {
      return Err(GrpcError::Resolve {
        target,
        reason: "no addresses".to_string(),
      });
    }
    Ok(addrs)
  }

  async fn connect(self) -> GrpcResult<TokioIo<Box<dyn Io>>> {
    let mut last_error = None;

    for addr in self.picker.order(self.resolve().await?) {
      match tokio::time::timeout(self.connect_timeout, self.connect_addr(addr)).await {
        Ok(Ok(io)) => {
          tracing::debug!(target: "grpc_client", %addr, tls = self.credentials.is_some(), "Connected");
          return Ok(TokioIo::new(io));
        }
        Ok(Err(e)) => {
          tracing::debug!(target: "grpc_client", %addr, error = %e, "Address failed, trying next");
          last_error = Some(e);
        }
        Err(_) => {
          tracing::debug!(target: "grpc_client", %addr, "Connect timed out, trying next");
          last_error = Some(GrpcError::ConnectionTimeout(self.connect_timeout));
        }
      }
    }

    Err(last_error.unwrap_or_else(|| GrpcError::Resolve {
      target: format!("{}:{}", self.host, self.port),
      reason: "no addresses".to_string(),
    }))
  }

  async fn connect_addr(&self, addr: SocketAddr) -> GrpcResult<Box<dyn Io>> {
    let stream = TcpStream::connect(addr).await.map_err(GrpcError::Handshake)?;
    stream.set_nodelay(self.tcp_nodelay).map_err(GrpcError::Handshake)?;

    match &self.credentials {
      Some(credentials) => Ok(Box::new(credentials.handshake(stream).await?)),
      None => Ok(Box::new(stream)),
    }
  }
}

impl Service<Uri> for Connector {
  type Response = TokioIo<Box<dyn Io>>;
  type Error = GrpcError;
  type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

  fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    Poll::Ready(Ok(()))
  }

  fn call(&mut self, _uri: Uri) -> Self::Future {
    Box::pin(self.clone().connect())
  }
}
