//! # gRPC Client Library
//!
//! Resilient gRPC client transport: keeps a long-lived connection usable
//! across server restarts, transient network failures and client certificate
//! expiry, without callers managing any of it.
//!
//! ## Features
//!
//! - **Reconnect on bad state**: before each call the current connection is
//!   checked; a `TransientFailure` or `Shutdown` connection is replaced through
//!   a [`ConnectionFactory`] and the call runs once on the replacement
//! - **Retry Logic**: linear backoff (100ms, 200ms, ...) for `Unavailable`,
//!   `ResourceExhausted` and `Aborted`
//! - **Auto-refreshing mTLS**: [`AutoRefreshingCredentials`] re-fetches the
//!   client certificate through a [`CredentialsFetcher`] before it expires
//! - **Deadlines**: calls without a deadline get the default request timeout
//! - **Client-side load balancing**: pick first or round robin over the
//!   resolved addresses
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{CallContext, ChannelConfig, ChannelFactory, DEFAULT_REQUEST_TIMEOUT, ResilientTransport};
//! use rpc::authorize::authorize_service_client::AuthorizeServiceClient;
//!
//! let factory = Arc::new(ChannelFactory::new(ChannelConfig::new("authorize.local", 50051)));
//! let transport = ResilientTransport::new(factory.connect().await?).with_reconnect(factory);
//!
//! let cx = CallContext::background().or_default_timeout(DEFAULT_REQUEST_TIMEOUT);
//! transport
//!     .call(cx, |conn| async move {
//!         AuthorizeServiceClient::new(conn.channel()).deep_ping(Void {}).await
//!     })
//!     .await?;
//! ```
//!
//! ### With Credentials
//! ```ignore
//! use grpc_client::{AutoRefreshingCredentials, ChannelFactory, DirectoryCredentialsFetcher};
//!
//! let fetcher = Arc::new(DirectoryCredentialsFetcher::new("/etc/authorize/certs"));
//! let credentials = AutoRefreshingCredentials::initialize(fetcher, "authorize/prod/grpc/client/iam", "authorize.local").await?;
//! let factory = ChannelFactory::with_credentials(config, Arc::new(credentials));
//! ```

pub mod channel;
pub mod connection;
pub mod context;
pub mod credentials;
pub mod error;
pub mod interceptors;
pub mod retry;
pub mod transport;

// Re-export main types and functions for convenience
pub use channel::{ChannelConfig, ChannelFactory, LoadBalancingPolicy};
pub use connection::{Connection, ConnectionFactory, ConnectionSlot, ConnectionState, GrpcConnection};
pub use context::{CallContext, DEFAULT_REQUEST_TIMEOUT};
pub use credentials::{
    AutoRefreshingCredentials, CERTIFICATE_GRACE_PERIOD, CredentialsError, CredentialsFetcher, DataStore,
    DirectoryCredentialsFetcher, TlsMaterial, secret_key_arn, secret_key_name,
};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::ReconnectInterceptor;
pub use retry::{RETRYABLE_CODES, RetryConfig, retry, retry_with_backoff};
pub use transport::ResilientTransport;
