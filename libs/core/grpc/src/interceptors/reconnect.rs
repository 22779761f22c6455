use std::future::Future;
use std::sync::Arc;

use crate::connection::{Connection, ConnectionFactory, ConnectionSlot};
use crate::error::{GrpcError, GrpcResult};

/// Replaces an unusable connection before running a call on it.
///
/// Each interception reads the current connection once. A usable one (Idle,
/// Connecting, Ready) runs the call directly and its outcome is returned
/// unchanged, errors included. An unusable one is replaced through the
/// configured [`ConnectionFactory`] and the call runs exactly once on the
/// replacement. There is no internal loop: transient failures are left to the
/// retry policy wrapped around this interceptor.
///
/// Without a factory the interceptor is a pass-through.
///
/// # Example
/// ```ignore
/// let slot = Arc::new(ConnectionSlot::new(connection));
/// let interceptor = ReconnectInterceptor::new(slot).with_reconnect(factory);
///
/// let reply = interceptor
///     .intercept(|conn| async move {
///         AuthorizeServiceClient::new(conn.channel()).deep_ping(Void {}).await
///     })
///     .await?;
/// ```
pub struct ReconnectInterceptor<C: Connection> {
    slot: Arc<ConnectionSlot<C>>,
    reconnect: Option<Arc<dyn ConnectionFactory<Connection = C>>>,
}

impl<C: Connection> ReconnectInterceptor<C> {
    pub fn new(slot: Arc<ConnectionSlot<C>>) -> Self {
        Self {
            slot,
            reconnect: None,
        }
    }

    /// Install the reconnect callback.
    pub fn with_reconnect(mut self, factory: Arc<dyn ConnectionFactory<Connection = C>>) -> Self {
        self.reconnect = Some(factory);
        self
    }

    pub fn slot(&self) -> &Arc<ConnectionSlot<C>> {
        &self.slot
    }

    pub fn has_reconnect(&self) -> bool {
        self.reconnect.is_some()
    }

    pub async fn intercept<F, Fut, T>(&self, call: F) -> GrpcResult<T>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = Result<T, tonic::Status>>,
    {
        let connection = self.slot.current();
        let state = connection.state();

        let connection = match &self.reconnect {
            Some(factory) if !state.is_usable() => {
                tracing::info!(target: "grpc_client", %state, "Calling reconnect function");
                self.slot
                    .reconnect(&connection, factory.as_ref())
                    .await
                    .map_err(|err| {
                        tracing::error!(target: "grpc_client", error = %err, "Failed to reconnect");
                        GrpcError::Reconnect(Box::new(err))
                    })?
            }
            _ => connection,
        };

        let result = call(Arc::clone(&connection)).await;
        connection.observe(result.as_ref().err());
        result.map_err(GrpcError::from)
    }
}

impl<C: Connection> Clone for ReconnectInterceptor<C> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            reconnect: self.reconnect.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionState;
    use crate::connection::fakes::{FakeConnection, FakeFactory};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn interceptor_with(
        state: ConnectionState,
        factory: Arc<FakeFactory>,
    ) -> ReconnectInterceptor<FakeConnection> {
        let slot = Arc::new(ConnectionSlot::new(FakeConnection::new(0, state)));
        ReconnectInterceptor::new(slot).with_reconnect(factory)
    }

    async fn connection_id(interceptor: &ReconnectInterceptor<FakeConnection>) -> GrpcResult<usize> {
        interceptor.intercept(|conn| async move { Ok(conn.id) }).await
    }

    #[tokio::test]
    async fn test_usable_states_never_reconnect() {
        for state in [
            ConnectionState::Idle,
            ConnectionState::Connecting,
            ConnectionState::Ready,
        ] {
            let factory = Arc::new(FakeFactory::new());
            let interceptor = interceptor_with(state, factory.clone());

            assert_eq!(connection_id(&interceptor).await.unwrap(), 0);
            assert_eq!(factory.builds(), 0, "no reconnect expected for {state}");
        }
    }

    #[tokio::test]
    async fn test_unusable_states_reconnect_once() {
        for state in [ConnectionState::TransientFailure, ConnectionState::Shutdown] {
            let factory = Arc::new(FakeFactory::new());
            let interceptor = interceptor_with(state, factory.clone());
            let calls = AtomicUsize::new(0);

            let id = interceptor
                .intercept(|conn| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async move { Ok(conn.id) }
                })
                .await
                .unwrap();

            assert_eq!(id, 1, "call runs on the replacement connection");
            assert_eq!(factory.builds(), 1, "exactly one reconnect for {state}");
            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(interceptor.slot().current().id, 1);
        }
    }

    #[tokio::test]
    async fn test_failed_call_after_reconnect_is_not_retried() {
        let factory = Arc::new(FakeFactory::new());
        let interceptor = interceptor_with(ConnectionState::Shutdown, factory.clone());
        let calls = AtomicUsize::new(0);

        let result: GrpcResult<()> = interceptor
            .intercept(|_conn| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(tonic::Status::unavailable("still restarting")) }
            })
            .await;

        assert_eq!(result.unwrap_err().code(), tonic::Code::Unavailable);
        assert_eq!(factory.builds(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            interceptor.slot().current().state(),
            ConnectionState::TransientFailure,
            "the outcome is recorded so the next attempt reconnects again"
        );
    }

    #[tokio::test]
    async fn test_reconnect_failure_skips_call() {
        let factory = Arc::new(FakeFactory::failing());
        let interceptor = interceptor_with(ConnectionState::TransientFailure, factory.clone());
        let calls = AtomicUsize::new(0);

        let result = interceptor
            .intercept(|conn| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(conn.id) }
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, GrpcError::Reconnect(_)));
        assert!(err.to_string().starts_with("failed to reconnect"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ready_connection_errors_pass_through() {
        let factory = Arc::new(FakeFactory::new());
        let interceptor = interceptor_with(ConnectionState::Ready, factory.clone());

        let result: GrpcResult<()> = interceptor
            .intercept(|_conn| async { Err(tonic::Status::internal("boom")) })
            .await;

        assert_eq!(result.unwrap_err().code(), tonic::Code::Internal);
        assert_eq!(factory.builds(), 0);
    }

    #[tokio::test]
    async fn test_without_factory_is_pass_through() {
        let slot = Arc::new(ConnectionSlot::new(FakeConnection::new(0, ConnectionState::Shutdown)));
        let interceptor = ReconnectInterceptor::new(slot);
        assert!(!interceptor.has_reconnect());

        assert_eq!(connection_id(&interceptor).await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_share_one_reconnect() {
        let factory = Arc::new(FakeFactory::slow(Duration::from_millis(50)));
        let interceptor = interceptor_with(ConnectionState::TransientFailure, factory.clone());

        let (a, b, c, d) = tokio::join!(
            connection_id(&interceptor),
            connection_id(&interceptor),
            connection_id(&interceptor),
            connection_id(&interceptor),
        );

        for id in [a, b, c, d] {
            assert_eq!(id.unwrap(), 1);
        }
        assert_eq!(factory.builds(), 1);
    }
}
