//! Call wrappers applied around every RPC issued through the transport.
//!
//! tonic's `Interceptor` only sees the outgoing request synchronously, so
//! wrappers that need to await (reconnecting, refreshing) take the call as a
//! closure instead.

pub mod reconnect;

pub use reconnect::ReconnectInterceptor;
