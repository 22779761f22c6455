//! Client certificate material and the auto-refreshing TLS provider.
//!
//! Certificates come from a [`CredentialsFetcher`] (a secret store in
//! production, a directory or a test double elsewhere). All caching lives in
//! [`AutoRefreshingCredentials`]; fetchers are plain, possibly slow, I/O.

mod material;
mod provider;

#[cfg(test)]
pub(crate) mod test_support;

pub use material::{TlsMaterial, certificate_expiry, refresh_due};
pub use provider::{AutoRefreshingCredentials, CERTIFICATE_GRACE_PERIOD};

use std::fmt;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while fetching or parsing client certificate material
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("failed to get secret value from '{secret_name}': {reason}")]
    Fetch { secret_name: String, reason: String },

    #[error("failed to parse client certificate: {0}")]
    InvalidCertificate(String),

    #[error("client certificate chain is empty")]
    EmptyCertificateChain,

    #[error("failed to parse client private key: {0}")]
    InvalidPrivateKey(String),

    #[error("failed to append certs: {0}")]
    InvalidCaBundle(String),

    #[error("failed to load client certs: {0}")]
    Tls(#[from] rustls::Error),

    #[error("invalid server name '{0}'")]
    InvalidServerName(String),
}

/// Raw PEM material for one client identity
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DataStore {
    /// Certificate chain, leaf first
    pub crt: Vec<u8>,
    pub key: Vec<u8>,
    /// Trusted CA bundle used to verify the server
    pub ca: Vec<u8>,
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("crt_len", &self.crt.len())
            .field("key", &"<redacted>")
            .field("ca_len", &self.ca.len())
            .finish()
    }
}

/// Source of client certificate material, keyed by a logical secret name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialsFetcher: Send + Sync {
    async fn fetch(&self, secret_name: &str) -> Result<DataStore, CredentialsError>;
}

/// Reads `<root>/<secret_name>/{crt,key,ca}.pem`.
///
/// Useful for local development and for secrets mounted into a pod as files.
#[derive(Debug, Clone)]
pub struct DirectoryCredentialsFetcher {
    root: PathBuf,
}

impl DirectoryCredentialsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn secret_dir(&self, secret_name: &str) -> Result<PathBuf, CredentialsError> {
        let relative = Path::new(secret_name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if secret_name.is_empty() || escapes {
            return Err(CredentialsError::Fetch {
                secret_name: secret_name.to_string(),
                reason: "secret name must be a relative path without '..'".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl CredentialsFetcher for DirectoryCredentialsFetcher {
    async fn fetch(&self, secret_name: &str) -> Result<DataStore, CredentialsError> {
        let dir = self.secret_dir(secret_name)?;
        let read = |file: &'static str| {
            let path = dir.join(file);
            async move {
                tokio::fs::read(&path).await.map_err(|e| {
                    tracing::error!(
                        target: "grpc_client",
                        secret_name,
                        path = %path.display(),
                        error = %e,
                        "failed to get secrets"
                    );
                    CredentialsError::Fetch {
                        secret_name: secret_name.to_string(),
                        reason: format!("{}: {e}", path.display()),
                    }
                })
            }
        };

        Ok(DataStore {
            crt: read("crt.pem").await?,
            key: read("key.pem").await?,
            ca: read("ca.pem").await?,
        })
    }
}

/// Secret-store name holding the client certificate of `service` in `stage`.
pub fn secret_key_name(service: &str, stage: &str) -> String {
    format!("authorize/{stage}/grpc/client/{service}")
}

/// Fully-qualified AWS Secrets Manager ARN for [`secret_key_name`].
pub fn secret_key_arn(account_id: &str, region: &str, service: &str, stage: &str) -> String {
    format!(
        "arn:aws:secretsmanager:{region}:{account_id}:secret:{}",
        secret_key_name(service, stage)
    )
}
