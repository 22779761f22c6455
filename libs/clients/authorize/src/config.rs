use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use core_config::{env_duration_secs, env_optional, env_or_default, env_parse, ConfigError, FromEnv};
use grpc_client::{
    ChannelConfig, DEFAULT_REQUEST_TIMEOUT, DirectoryCredentialsFetcher, GrpcResult, LoadBalancingPolicy,
};

use crate::AuthorizeClient;

/// Where and how to reach the Authorize service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizeClientConfig {
    pub host: String,
    pub port: u16,
    pub load_balancing: LoadBalancingPolicy,
    pub request_timeout: Duration,
    /// Client certificate secret; plaintext when unset
    pub secret_name: Option<String>,
    /// Root of the directory credential store
    pub certs_dir: Option<PathBuf>,
}

impl Default for AuthorizeClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 50051,
            load_balancing: LoadBalancingPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            secret_name: None,
            certs_dir: None,
        }
    }
}

impl AuthorizeClientConfig {
    pub fn channel_config(&self) -> ChannelConfig {
        ChannelConfig::new(self.host.clone(), self.port)
            .with_load_balancing(self.load_balancing)
            .with_request_timeout(self.request_timeout)
    }

    /// Dial with mutual TLS when a secret is configured, plaintext otherwise.
    pub async fn connect(&self) -> GrpcResult<AuthorizeClient> {
        match (&self.secret_name, &self.certs_dir) {
            (Some(secret_name), Some(certs_dir)) => {
                let fetcher = Arc::new(DirectoryCredentialsFetcher::new(certs_dir.clone()));
                AuthorizeClient::dial_with_credentials(self.channel_config(), fetcher, secret_name.clone()).await
            }
            _ => AuthorizeClient::dial(self.channel_config()).await,
        }
    }
}

impl FromEnv for AuthorizeClientConfig {
    /// Reads from environment variables:
    /// - AUTHORIZE_HOST: defaults to localhost
    /// - AUTHORIZE_PORT: defaults to 50051
    /// - AUTHORIZE_LB_POLICY: `round_robin` (default) or `pick_first`
    /// - AUTHORIZE_REQUEST_TIMEOUT_SECS: defaults to 60
    /// - AUTHORIZE_SECRET_NAME: enables mutual TLS; requires AUTHORIZE_CERTS_DIR
    /// - AUTHORIZE_CERTS_DIR: directory holding `<secret>/{crt,key,ca}.pem`
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let secret_name = env_optional("AUTHORIZE_SECRET_NAME");
        let certs_dir = env_optional("AUTHORIZE_CERTS_DIR").map(PathBuf::from);
        if secret_name.is_some() && certs_dir.is_none() {
            return Err(ConfigError::MissingEnvVar("AUTHORIZE_CERTS_DIR".to_string()));
        }

        Ok(Self {
            host: env_or_default("AUTHORIZE_HOST", &defaults.host),
            port: env_parse("AUTHORIZE_PORT", defaults.port)?,
            load_balancing: env_parse("AUTHORIZE_LB_POLICY", defaults.load_balancing)?,
            request_timeout: env_duration_secs("AUTHORIZE_REQUEST_TIMEOUT_SECS", defaults.request_timeout)?,
            secret_name,
            certs_dir,
        })
    }
}
