//! Connection handles, their health, and the slot holding the current one.

mod grpc;
mod slot;

pub use grpc::GrpcConnection;
pub use slot::ConnectionSlot;

use std::fmt;

use async_trait::async_trait;

use crate::error::GrpcResult;

/// Client-side view of channel health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Ready,
    TransientFailure,
    Shutdown,
}

impl ConnectionState {
    /// Idle, Connecting and Ready connections take calls as-is; anything else
    /// is replaced first.
    pub fn is_usable(self) -> bool {
        matches!(
            self,
            ConnectionState::Idle | ConnectionState::Connecting | ConnectionState::Ready
        )
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            ConnectionState::Idle => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Ready => 2,
            ConnectionState::TransientFailure => 3,
            ConnectionState::Shutdown => 4,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Idle,
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Ready,
            3 => ConnectionState::TransientFailure,
            _ => ConnectionState::Shutdown,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Idle => "IDLE",
            ConnectionState::Connecting => "CONNECTING",
            ConnectionState::Ready => "READY",
            ConnectionState::TransientFailure => "TRANSIENT_FAILURE",
            ConnectionState::Shutdown => "SHUTDOWN",
        };
        f.write_str(name)
    }
}

/// One channel to the remote endpoint.
pub trait Connection: Send + Sync + 'static {
    fn state(&self) -> ConnectionState;

    /// Feed back the outcome of a call made on this connection.
    fn observe(&self, _error: Option<&tonic::Status>) {}

    /// Mark the connection as permanently closed.
    fn close(&self);
}

/// Builds a brand-new connection when the current one is unusable.
///
/// Implementations must obtain valid credentials on every call instead of
/// reusing whatever the previous connection was dialed with.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    type Connection: Connection;

    async fn build_connection(&self) -> GrpcResult<Self::Connection>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use crate::error::GrpcError;
    use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug)]
    pub struct FakeConnection {
        pub id: usize,
        state: AtomicU8,
        closed: AtomicBool,
    }

    impl FakeConnection {
        pub fn new(id: usize, state: ConnectionState) -> Self {
            Self {
                id,
                state: AtomicU8::new(state.as_u8()),
                closed: AtomicBool::new(false),
            }
        }

        pub fn set_state(&self, state: ConnectionState) {
            self.state.store(state.as_u8(), Ordering::SeqCst);
        }

        pub fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }
    }

    impl Connection for FakeConnection {
        fn state(&self) -> ConnectionState {
            ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
        }

        fn observe(&self, error: Option<&tonic::Status>) {
            match error {
                None => self.set_state(ConnectionState::Ready),
                Some(status) if status.code() == tonic::Code::Unavailable => {
                    self.set_state(ConnectionState::TransientFailure)
                }
                Some(_) => {}
            }
        }

        fn close(&self) {
            self.closed.store(true, Ordering::SeqCst);
            self.set_state(ConnectionState::Shutdown);
        }
    }

    /// Hands out Ready connections numbered from 1; can be told to fail.
    #[derive(Default)]
    pub struct FakeFactory {
        builds: AtomicUsize,
        fail: AtomicBool,
        delay: Option<Duration>,
    }

    impl FakeFactory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            let factory = Self::default();
            factory.fail.store(true, Ordering::SeqCst);
            factory
        }

        pub fn builds(&self) -> usize {
            self.builds.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConnectionFactory for FakeFactory {
        type Connection = FakeConnection;

        async fn build_connection(&self) -> GrpcResult<FakeConnection> {
            let id = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(GrpcError::InvalidConfig("dial refused".to_string()));
            }
            Ok(FakeConnection::new(id, ConnectionState::Ready))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_states() {
        assert!(ConnectionState::Idle.is_usable());
        assert!(ConnectionState::Connecting.is_usable());
        assert!(ConnectionState::Ready.is_usable());
        assert!(!ConnectionState::TransientFailure.is_usable());
        assert!(!ConnectionState::Shutdown.is_usable());
    }

    #[test]
    fn test_unknown_state_decodes_as_shutdown() {
        assert_eq!(ConnectionState::from_u8(42), ConnectionState::Shutdown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConnectionState::TransientFailure.to_string(), "TRANSIENT_FAILURE");
    }
}
