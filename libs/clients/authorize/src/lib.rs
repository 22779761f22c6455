//! Authorize Client
//!
//! Typed facade over the Authorize gRPC API. Every call goes through
//! [`grpc_client::ResilientTransport`]:
//!
//! ```text
//! ┌──────────────────┐
//! │ AuthorizeClient  │  ← default timeout, bulk validation, typed results
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  Retry (linear)  │  ← Unavailable / ResourceExhausted / Aborted
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │    Reconnect     │  ← replaces TransientFailure / Shutdown connections
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Channel (+mTLS)  │  ← certificates refreshed before they expire
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use authorize_client::{AuthorizeClient, CallContext, ChannelConfig, Origin};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AuthorizeClient::dial(ChannelConfig::new("authorize.local", 50051)).await?;
//!
//! let resource = Origin {
//!     id: "site-1".to_string(),
//!     r#type: "site".to_string(),
//!     provider: String::new(),
//! };
//! let allowed = client
//!     .is_authorized(CallContext::background(), "user-1", "read", Some(resource))
//!     .await?;
//!
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod operations;

pub use client::{AuthorizeClient, MAX_MESSAGE_SIZE};
pub use config::AuthorizeClientConfig;
pub use operations::{BulkAuthorization, REQUEST_LENGTH_LIMIT, ResourceRelation};

// Re-export the types callers need alongside the client
pub use grpc_client::{CallContext, ChannelConfig, GrpcError, GrpcResult, LoadBalancingPolicy};
pub use rpc::authorize::Origin;
