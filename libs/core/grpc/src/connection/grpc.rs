use std::sync::atomic::{AtomicU8, Ordering};

use tonic::transport::Channel;

use super::{Connection, ConnectionState};

/// A tonic channel plus the health the client has observed on it.
///
/// tonic does not expose connectivity state, so it is tracked here: an
/// eagerly dialed channel starts Ready and a lazy one Idle, a call failing
/// with `Unavailable` moves it to TransientFailure, a successful call back to
/// Ready, and `close` to Shutdown (terminal).
#[derive(Debug)]
pub struct GrpcConnection {
    channel: Channel,
    target: String,
    state: AtomicU8,
}

impl GrpcConnection {
    /// Wrap a channel whose connection has already been established.
    pub fn ready(channel: Channel, target: impl Into<String>) -> Self {
        Self::with_state(channel, target, ConnectionState::Ready)
    }

    /// Wrap a channel that connects on first use.
    pub fn lazy(channel: Channel, target: impl Into<String>) -> Self {
        Self::with_state(channel, target, ConnectionState::Idle)
    }

    fn with_state(channel: Channel, target: impl Into<String>, state: ConnectionState) -> Self {
        Self {
            channel,
            target: target.into(),
            state: AtomicU8::new(state.as_u8()),
        }
    }

    /// Cheap clone of the underlying channel for building a stub.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Move to `next` unless the connection was closed; Shutdown is terminal.
    fn transition(&self, next: ConnectionState) {
        let shutdown = ConnectionState::Shutdown.as_u8();
        let update = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current != shutdown).then_some(next.as_u8())
            });
        if update.is_err() {
            tracing::trace!(
                target: "grpc_client",
                target_addr = %self.target,
                ignored = ?next,
                "Connection already shut down"
            );
        }
    }
}

impl Connection for GrpcConnection {
    fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn observe(&self, error: Option<&tonic::Status>) {
        match error {
            None => self.transition(ConnectionState::Ready),
            Some(status) if status.code() == tonic::Code::Unavailable => {
                tracing::debug!(
                    target: "grpc_client",
                    target_addr = %self.target,
                    status_message = status.message(),
                    "Call reported channel unavailable"
                );
                self.transition(ConnectionState::TransientFailure);
            }
            Some(_) => {}
        }
    }

    fn close(&self) {
        let previous = self.state.swap(ConnectionState::Shutdown.as_u8(), Ordering::AcqRel);
        if previous != ConnectionState::Shutdown.as_u8() {
            tracing::debug!(target: "grpc_client", target_addr = %self.target, "Closing gRPC connection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::transport::Endpoint;

    fn lazy_connection() -> GrpcConnection {
        let channel = Endpoint::from_static("http://[::1]:50051").connect_lazy();
        GrpcConnection::lazy(channel, "[::1]:50051")
    }

    #[tokio::test]
    async fn test_lazy_connection_starts_idle() {
        let connection = lazy_connection();
        assert_eq!(connection.state(), ConnectionState::Idle);
        assert_eq!(connection.target(), "[::1]:50051");
    }

    #[tokio::test]
    async fn test_unavailable_marks_transient_failure() {
        let connection = lazy_connection();

        connection.observe(Some(&tonic::Status::unavailable("tcp connect error")));
        assert_eq!(connection.state(), ConnectionState::TransientFailure);

        connection.observe(None);
        assert_eq!(connection.state(), ConnectionState::Ready);
    }

    #[tokio::test]
    async fn test_other_errors_leave_state_alone() {
        let connection = lazy_connection();
        connection.observe(Some(&tonic::Status::not_found("no such resource")));
        assert_eq!(connection.state(), ConnectionState::Idle);
    }

    #[tokio::test]
    async fn test_shutdown_is_terminal() {
        let connection = lazy_connection();
        connection.close();
        connection.observe(None);
        assert_eq!(connection.state(), ConnectionState::Shutdown);

        connection.observe(Some(&tonic::Status::unavailable("tcp connect error")));
        assert_eq!(connection.state(), ConnectionState::Shutdown);
    }
}
