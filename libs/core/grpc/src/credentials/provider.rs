use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;

use super::{CredentialsError, CredentialsFetcher, TlsMaterial};
use crate::error::{GrpcError, GrpcResult};

/// How long before expiry a certificate is proactively refreshed.
pub const CERTIFICATE_GRACE_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// TLS client credentials that refresh themselves before the certificate
/// expires.
///
/// The first fetch happens in [`initialize`](Self::initialize). After that,
/// every [`handshake`](Self::handshake) checks the cached expiry and, once
/// inside the grace period, fetches and parses new material before
/// connecting. Refreshes are serialized per instance: concurrent handshakes
/// that find the material stale wait for one fetch and reuse its result.
///
/// A failed refresh is reported to the handshake that triggered it; the
/// previous material stays cached and the next handshake tries again.
///
/// Cloning yields an independent view: it shares the fetcher but copies the
/// cached material as of clone time. Share one instance through `Arc` to
/// share the cache.
pub struct AutoRefreshingCredentials {
    fetcher: Arc<dyn CredentialsFetcher>,
    secret_name: Arc<str>,
    grace_period: Duration,
    server_name: RwLock<ServerName<'static>>,
    material: RwLock<Arc<TlsMaterial>>,
    refresh_gate: tokio::sync::Mutex<()>,
}

impl AutoRefreshingCredentials {
    /// Fetch and parse the initial material. Failure here is fatal to the
    /// dial that requested it; nothing is retried.
    pub async fn initialize(
        fetcher: Arc<dyn CredentialsFetcher>,
        secret_name: impl Into<String>,
        server_name: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let secret_name: Arc<str> = secret_name.into().into();
        let server_name = parse_server_name(server_name.into())?;
        let material = load(fetcher.as_ref(), &secret_name).await?;

        tracing::debug!(
            target: "grpc_client",
            secret_name = %secret_name,
            expiry = %material.expiry(),
            "Loaded client certificates"
        );

        Ok(Self {
            fetcher,
            secret_name,
            grace_period: CERTIFICATE_GRACE_PERIOD,
            server_name: RwLock::new(server_name),
            material: RwLock::new(Arc::new(material)),
            refresh_gate: tokio::sync::Mutex::new(()),
        })
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Expiry of the currently cached chain.
    pub fn expiry(&self) -> DateTime<Utc> {
        self.snapshot().expiry()
    }

    pub fn server_name(&self) -> ServerName<'static> {
        self.server_name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the server identity expected by subsequent handshakes.
    pub fn override_server_name(&self, server_name: impl Into<String>) -> Result<(), CredentialsError> {
        let parsed = parse_server_name(server_name.into())?;
        *self
            .server_name
            .write()
            .unwrap_or_else(PoisonError::into_inner) = parsed;
        Ok(())
    }

    pub fn refresh_due(&self) -> bool {
        self.snapshot().refresh_due(Utc::now(), self.grace_period)
    }

    /// Return material that is outside the grace period, refreshing first if
    /// needed.
    pub async fn ensure_valid_credentials(&self) -> Result<Arc<TlsMaterial>, CredentialsError> {
        let current = self.snapshot();
        if !current.refresh_due(Utc::now(), self.grace_period) {
            return Ok(current);
        }

        let _guard = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited for the gate
        let current = self.snapshot();
        if !current.refresh_due(Utc::now(), self.grace_period) {
            return Ok(current);
        }

        tracing::info!(
            target: "grpc_client",
            secret_name = %self.secret_name,
            expiry = %current.expiry(),
            grace_period_secs = self.grace_period.as_secs(),
            "Client certificate inside grace period, refreshing"
        );

        match load(self.fetcher.as_ref(), &self.secret_name).await {
            Ok(material) => {
                let material = Arc::new(material);
                *self.material.write().unwrap_or_else(PoisonError::into_inner) =
                    Arc::clone(&material);
                tracing::info!(
                    target: "grpc_client",
                    secret_name = %self.secret_name,
                    expiry = %material.expiry(),
                    "Client certificate refreshed"
                );
                Ok(material)
            }
            Err(err) => {
                tracing::warn!(
                    target: "grpc_client",
                    secret_name = %self.secret_name,
                    error = %err,
                    "Certificate refresh failed, keeping cached credentials"
                );
                Err(err)
            }
        }
    }

    /// Run the client side of a TLS handshake over `io`.
    pub async fn handshake<IO>(&self, io: IO) -> GrpcResult<TlsStream<IO>>
    where
        IO: AsyncRead + AsyncWrite + Unpin,
    {
        let material = self.ensure_valid_credentials().await?;
        let connector = TlsConnector::from(material.config());
        connector
            .connect(self.server_name(), io)
            .await
            .map_err(GrpcError::Handshake)
    }

    fn snapshot(&self) -> Arc<TlsMaterial> {
        Arc::clone(&self.material.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Clone for AutoRefreshingCredentials {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            secret_name: Arc::clone(&self.secret_name),
            grace_period: self.grace_period,
            server_name: RwLock::new(self.server_name()),
            material: RwLock::new(self.snapshot()),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }
}

impl fmt::Debug for AutoRefreshingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoRefreshingCredentials")
            .field("secret_name", &self.secret_name)
            .field("server_name", &self.server_name())
            .field("grace_period", &self.grace_period)
            .field("expiry", &self.expiry())
            .finish_non_exhaustive()
    }
}

async fn load(fetcher: &dyn CredentialsFetcher, secret_name: &str) -> Result<TlsMaterial, CredentialsError> {
    let store = fetcher.fetch(secret_name).await?;
    TlsMaterial::from_data_store(&store)
}

fn parse_server_name(name: String) -> Result<ServerName<'static>, CredentialsError> {
    ServerName::try_from(name.clone()).map_err(|_| CredentialsError::InvalidServerName(name))
}
