//! The resilient call pipeline: deadline, then retry, then reconnect, then
//! exactly one call on the current connection per attempt.

use std::future::Future;
use std::sync::Arc;

use crate::connection::{Connection, ConnectionFactory, ConnectionSlot};
use crate::context::CallContext;
use crate::error::{GrpcError, GrpcResult};
use crate::interceptors::ReconnectInterceptor;
use crate::retry::{RetryConfig, retry_with_backoff};

/// Owns the current connection and runs calls against it.
///
/// The retry loop sits outside the reconnect interceptor, so every attempt
/// re-checks connection health and may land on a fresh connection.
pub struct ResilientTransport<C: Connection> {
    interceptor: ReconnectInterceptor<C>,
    retry: RetryConfig,
}

impl<C: Connection> ResilientTransport<C> {
    pub fn new(connection: C) -> Self {
        Self {
            interceptor: ReconnectInterceptor::new(Arc::new(ConnectionSlot::new(connection))),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_reconnect(mut self, factory: Arc<dyn ConnectionFactory<Connection = C>>) -> Self {
        self.interceptor = self.interceptor.with_reconnect(factory);
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Snapshot of the connection calls currently go to.
    pub fn current(&self) -> Arc<C> {
        self.interceptor.slot().current()
    }

    pub fn close(&self) {
        self.interceptor.slot().close();
    }

    /// Run `call` under the context deadline.
    ///
    /// `call` is invoked once per attempt with the connection chosen for that
    /// attempt. When the deadline elapses the in-flight attempt (or backoff
    /// sleep) is dropped and [`GrpcError::DeadlineExceeded`] is returned.
    pub async fn call<F, Fut, T>(&self, cx: CallContext, call: F) -> GrpcResult<T>
    where
        F: Fn(Arc<C>) -> Fut,
        Fut: Future<Output = Result<T, tonic::Status>>,
    {
        let call = &call;
        let interceptor = &self.interceptor;
        let attempts = retry_with_backoff(move || interceptor.intercept(call), self.retry.clone());

        let (Some(deadline), Some(budget)) = (cx.deadline(), cx.remaining()) else {
            return attempts.await;
        };

        match tokio::time::timeout_at(deadline, attempts).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    target: "grpc_client",
                    timeout_ms = budget.as_millis() as u64,
                    "Call deadline exceeded"
                );
                Err(GrpcError::DeadlineExceeded(budget))
            }
        }
    }
}

impl<C: Connection> Clone for ResilientTransport<C> {
    fn clone(&self) -> Self {
        Self {
            interceptor: self.interceptor.clone(),
            retry: self.retry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionState;
    use crate::connection::fakes::{FakeConnection, FakeFactory};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    fn transport(factory: Arc<FakeFactory>) -> ResilientTransport<FakeConnection> {
        ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready)).with_reconnect(factory)
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_triggers_reconnect_on_next_attempt() {
        let factory = Arc::new(FakeFactory::new());
        let transport = transport(factory.clone());
        let seen = Mutex::new(Vec::new());

        let id = transport
            .call(CallContext::background(), |conn| {
                seen.lock().unwrap().push(conn.id);
                async move {
                    if conn.id == 0 {
                        Err(tonic::Status::unavailable("server restarting"))
                    } else {
                        Ok(conn.id)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        assert_eq!(factory.builds(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_retried_with_linear_backoff() {
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready));
        let started = Instant::now();
        let attempts = Mutex::new(Vec::new());

        let result = transport
            .call(CallContext::background(), |_conn| {
                let mut attempts = attempts.lock().unwrap();
                attempts.push(started.elapsed());
                let failing = attempts.len() <= 4;
                async move {
                    if failing {
                        Err(tonic::Status::resource_exhausted("throttled"))
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
        let attempts = attempts.lock().unwrap();
        assert_eq!(
            *attempts,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(300),
                Duration::from_millis(600),
                Duration::from_millis(1000),
            ]
        );
    }

    #[tokio::test]
    async fn test_non_retryable_status_returned_once() {
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready));
        let calls = AtomicUsize::new(0);

        let result: GrpcResult<()> = transport
            .call(CallContext::background(), |_conn| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(tonic::Status::permission_denied("nope")) }
            })
            .await;

        assert_eq!(result.unwrap_err().code(), tonic::Code::PermissionDenied);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reconnect_failure_not_retried() {
        let factory = Arc::new(FakeFactory::failing());
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Shutdown))
            .with_reconnect(factory.clone());

        let result = transport
            .call(CallContext::background(), |conn| async move { Ok(conn.id) })
            .await;

        assert!(matches!(result, Err(GrpcError::Reconnect(_))));
        assert_eq!(factory.builds(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded_on_hung_call() {
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready));

        let result: GrpcResult<()> = transport
            .call(CallContext::with_timeout(Duration::from_millis(100)), |_conn| {
                std::future::pending()
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, GrpcError::DeadlineExceeded(d) if d == Duration::from_millis(100)));
        assert_eq!(err.code(), tonic::Code::DeadlineExceeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_cuts_retry_backoff_short() {
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready));
        let calls = AtomicUsize::new(0);

        let result: GrpcResult<()> = transport
            .call(CallContext::with_timeout(Duration::from_millis(250)), |_conn| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(tonic::Status::aborted("conflict")) }
            })
            .await;

        assert!(matches!(result, Err(GrpcError::DeadlineExceeded(_))));
        // Attempts at 0ms and 100ms; the third would start at 300ms.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_close_shuts_down_current() {
        let transport = ResilientTransport::new(FakeConnection::new(0, ConnectionState::Ready));
        transport.close();

        assert!(transport.current().is_closed());
        assert_eq!(transport.current().state(), ConnectionState::Shutdown);
    }
}
