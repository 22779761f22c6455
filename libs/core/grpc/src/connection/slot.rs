use std::sync::{Arc, PoisonError, RwLock};

use super::{Connection, ConnectionFactory};
use crate::error::GrpcResult;

/// Holds the current connection.
///
/// Readers take an `Arc` snapshot and issue their call on it; replacement
/// swaps the `Arc` and never mutates a connection in place. Replacement is
/// single-flight: callers racing to replace the same stale connection wait
/// for the first one and reuse its result.
#[derive(Debug)]
pub struct ConnectionSlot<C> {
    current: RwLock<Arc<C>>,
    reconnect_gate: tokio::sync::Mutex<()>,
}

impl<C: Connection> ConnectionSlot<C> {
    pub fn new(connection: C) -> Self {
        Self {
            current: RwLock::new(Arc::new(connection)),
            reconnect_gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn current(&self) -> Arc<C> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace `stale` with a connection from `factory`.
    ///
    /// If another caller already replaced `stale` with a usable connection,
    /// that one is returned and `factory` is not invoked. The replaced
    /// connection is closed; callers still holding it finish on their own
    /// snapshot.
    pub async fn reconnect<F>(&self, stale: &Arc<C>, factory: &F) -> GrpcResult<Arc<C>>
    where
        F: ConnectionFactory<Connection = C> + ?Sized,
    {
        let _guard = self.reconnect_gate.lock().await;

        let current = self.current();
        if !Arc::ptr_eq(&current, stale) && current.state().is_usable() {
            tracing::debug!(
                target: "grpc_client",
                state = %current.state(),
                "Connection already replaced by a concurrent caller"
            );
            return Ok(current);
        }

        let fresh = Arc::new(factory.build_connection().await?);
        let previous = std::mem::replace(
            &mut *self.current.write().unwrap_or_else(PoisonError::into_inner),
            Arc::clone(&fresh),
        );
        previous.close();

        Ok(fresh)
    }

    /// Close the current connection.
    pub fn close(&self) {
        self.current().close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionState;
    use crate::connection::fakes::{FakeConnection, FakeFactory};

    #[tokio::test]
    async fn test_reconnect_swaps_and_closes_previous() {
        let slot = ConnectionSlot::new(FakeConnection::new(0, ConnectionState::Shutdown));
        let factory = FakeFactory::new();

        let stale = slot.current();
        let fresh = slot.reconnect(&stale, &factory).await.unwrap();

        assert_eq!(fresh.id, 1);
        assert_eq!(slot.current().id, 1);
        assert!(stale.is_closed());
        assert_eq!(factory.builds(), 1);
    }

    #[tokio::test]
    async fn test_reconnect_reuses_replacement_from_concurrent_caller() {
        let slot = ConnectionSlot::new(FakeConnection::new(0, ConnectionState::TransientFailure));
        let factory = FakeFactory::new();

        let stale = slot.current();
        slot.reconnect(&stale, &factory).await.unwrap();
        let again = slot.reconnect(&stale, &factory).await.unwrap();

        assert_eq!(again.id, 1);
        assert_eq!(factory.builds(), 1);
    }

    #[tokio::test]
    async fn test_failed_reconnect_keeps_current() {
        let slot = ConnectionSlot::new(FakeConnection::new(0, ConnectionState::Shutdown));
        let factory = FakeFactory::failing();

        let stale = slot.current();
        assert!(slot.reconnect(&stale, &factory).await.is_err());
        assert_eq!(slot.current().id, 0);
        assert!(!stale.is_closed());
    }
}
