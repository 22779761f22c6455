use std::time::Duration;
use thiserror::Error;

use crate::credentials::CredentialsError;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors produced by the resilient transport and the clients built on it
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection failed: {0}")]
  ConnectionFailed(tonic::transport::Error),

  /// Connection timeout
  #[error("Connection timeout after {0:?}")]
  ConnectionTimeout(Duration),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  /// Target host did not resolve to any address
  #[error("Failed to resolve {target}: {reason}")]
  Resolve { target: String, reason: String },

  /// TCP connect or TLS handshake failed on the wire
  #[error("Handshake failed: {0}")]
  Handshake(#[source] std::io::Error),

  /// Client certificate material could not be fetched or parsed
  #[error("Credentials error: {0}")]
  Credentials(#[from] CredentialsError),

  /// The reconnect callback could not produce a replacement connection
  #[error("failed to reconnect: {0}")]
  Reconnect(#[source] Box<GrpcError>),

  /// Bulk request exceeds the local batch limit; never sent over the wire
  #[error("request length limit exceeded. max: {max} actual: {actual}")]
  RequestLengthLimit { max: usize, actual: usize },

  /// The call deadline elapsed before a response arrived
  #[error("deadline exceeded after {0:?}")]
  DeadlineExceeded(Duration),

  /// Remote call failed with a gRPC status
  #[error(transparent)]
  Status(#[from] tonic::Status),
}

impl GrpcError {
  /// The gRPC status code this error is reported as.
  pub fn code(&self) -> tonic::Code {
    match self {
      GrpcError::Status(status) => status.code(),
      GrpcError::InvalidUri(_) | GrpcError::InvalidConfig(_) | GrpcError::RequestLengthLimit { .. } => {
        tonic::Code::InvalidArgument
      }
      GrpcError::DeadlineExceeded(_) | GrpcError::ConnectionTimeout(_) => tonic::Code::DeadlineExceeded,
      GrpcError::Credentials(_) => tonic::Code::Unauthenticated,
      GrpcError::Reconnect(inner) => inner.code(),
      GrpcError::ConnectionFailed(_) | GrpcError::Resolve { .. } | GrpcError::Handshake(_) => {
        tonic::Code::Unavailable
      }
    }
  }

  /// True for errors that were raised locally and never touched the network.
  pub fn is_local(&self) -> bool {
    matches!(
      self,
      GrpcError::RequestLengthLimit { .. } | GrpcError::InvalidConfig(_) | GrpcError::InvalidUri(_)
    )
  }
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::Status(status) => status,
      other => tonic::Status::new(other.code(), other.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_length_limit_message() {
    let err = GrpcError::RequestLengthLimit { max: 1000, actual: 1001 };
    assert_eq!(
      err.to_string(),
      "request length limit exceeded. max: 1000 actual: 1001"
    );
    assert!(err.is_local());
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
  }

  #[test]
  fn test_reconnect_wraps_inner_error() {
    let inner = GrpcError::Credentials(CredentialsError::Fetch {
      secret_name: "authorize/sandbox/grpc/client/iam".to_string(),
      reason: "access denied".to_string(),
    });
    let err = GrpcError::Reconnect(Box::new(inner));
    assert!(err.to_string().starts_with("failed to reconnect: "));
    assert!(err.to_string().contains("access denied"));
    assert_eq!(err.code(), tonic::Code::Unauthenticated);
    assert!(!err.is_local());
  }

  #[test]
  fn test_status_passes_through_unchanged() {
    let status = tonic::Status::resource_exhausted("slow down");
    let err = GrpcError::from(status);
    assert_eq!(err.code(), tonic::Code::ResourceExhausted);

    let back: tonic::Status = err.into();
    assert_eq!(back.code(), tonic::Code::ResourceExhausted);
    assert_eq!(back.message(), "slow down");
  }

  #[test]
  fn test_deadline_maps_to_deadline_exceeded() {
    let status: tonic::Status = GrpcError::DeadlineExceeded(Duration::from_secs(60)).into();
    assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
  }
}
