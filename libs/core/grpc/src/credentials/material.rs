use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig, RootCertStore};
use x509_parser::prelude::{FromDer, X509Certificate};

use super::{CredentialsError, DataStore};

/// Handshake-ready client TLS configuration plus the expiry of its chain.
///
/// Built once per refresh and never mutated; a refresh replaces the whole
/// value.
#[derive(Debug, Clone)]
pub struct TlsMaterial {
    config: Arc<ClientConfig>,
    expiry: DateTime<Utc>,
}

impl TlsMaterial {
    /// Parse PEM material into a rustls client configuration.
    ///
    /// The chain must contain at least one certificate, the key must be
    /// accepted for it, and the CA bundle must yield at least one trust
    /// anchor.
    pub fn from_data_store(store: &DataStore) -> Result<Self, CredentialsError> {
        let chain = CertificateDer::pem_slice_iter(&store.crt)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CredentialsError::InvalidCertificate(e.to_string()))?;
        if chain.is_empty() {
            return Err(CredentialsError::EmptyCertificateChain);
        }
        let expiry = certificate_expiry(&chain)?;

        let key = PrivateKeyDer::from_pem_slice(&store.key)
            .map_err(|e| CredentialsError::InvalidPrivateKey(e.to_string()))?;

        let ca_certs = CertificateDer::pem_slice_iter(&store.ca)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CredentialsError::InvalidCaBundle(e.to_string()))?;
        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(ca_certs);
        if added == 0 {
            return Err(CredentialsError::InvalidCaBundle(format!(
                "no usable CA certificate ({ignored} rejected)"
            )));
        }

        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let mut config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_root_certificates(roots)
            .with_client_auth_cert(chain, key)?;
        config.alpn_protocols = vec![b"h2".to_vec()];

        Ok(Self {
            config: Arc::new(config),
            expiry,
        })
    }

    pub fn config(&self) -> Arc<ClientConfig> {
        Arc::clone(&self.config)
    }

    /// Earliest `notAfter` of the client chain.
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    pub fn refresh_due(&self, now: DateTime<Utc>, grace_period: Duration) -> bool {
        refresh_due(self.expiry, now, grace_period)
    }
}

/// Earliest `notAfter` across every certificate in `chain`.
///
/// An empty chain yields the minimum representable time, so it is always due
/// for refresh.
pub fn certificate_expiry(chain: &[CertificateDer<'_>]) -> Result<DateTime<Utc>, CredentialsError> {
    let mut earliest: Option<DateTime<Utc>> = None;
    for der in chain {
        let (_, cert) = X509Certificate::from_der(der.as_ref())
            .map_err(|e| CredentialsError::InvalidCertificate(e.to_string()))?;
        let timestamp = cert.validity().not_after.timestamp();
        let not_after = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            CredentialsError::InvalidCertificate(format!("notAfter out of range: {timestamp}"))
        })?;
        earliest = Some(earliest.map_or(not_after, |current| current.min(not_after)));
    }
    Ok(earliest.unwrap_or(DateTime::<Utc>::MIN_UTC))
}

/// `now >= expiry - grace_period`
pub fn refresh_due(expiry: DateTime<Utc>, now: DateTime<Utc>, grace_period: Duration) -> bool {
    let threshold = TimeDelta::from_std(grace_period)
        .ok()
        .and_then(|grace| expiry.checked_sub_signed(grace));
    match threshold {
        Some(threshold) => now >= threshold,
        // Underflow: the window starts before the earliest representable time
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::test_support::TestPki;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    #[test]
    fn test_refresh_due_boundaries() {
        let now = Utc::now();
        let grace = TimeDelta::hours(24);

        assert!(refresh_due(now + grace - TimeDelta::seconds(1), now, DAY));
        assert!(refresh_due(now + grace, now, DAY));
        assert!(!refresh_due(now + grace + TimeDelta::hours(1), now, DAY));
        assert!(refresh_due(now - TimeDelta::days(3), now, DAY));
    }

    #[test]
    fn test_empty_chain_is_always_due() {
        let expiry = certificate_expiry(&[]).unwrap();
        assert_eq!(expiry, DateTime::<Utc>::MIN_UTC);
        assert!(refresh_due(expiry, Utc::now(), DAY));
        assert!(refresh_due(expiry, Utc::now(), Duration::ZERO));
    }

    #[test]
    fn test_from_data_store_reads_leaf_expiry() {
        let pki = TestPki::new();
        let not_after = TestPki::not_after(time::Duration::days(30));
        let store = pki.issue(not_after);

        let material = TlsMaterial::from_data_store(&store).unwrap();
        assert_eq!(material.expiry().timestamp(), not_after.unix_timestamp());
        assert_eq!(material.config().alpn_protocols, vec![b"h2".to_vec()]);
    }

    #[test]
    fn test_expiry_is_minimum_across_chain() {
        let pki = TestPki::new();
        let intermediate_not_after = TestPki::not_after(time::Duration::days(2));
        let leaf_not_after = TestPki::not_after(time::Duration::days(90));
        let store = pki.issue_via_intermediate(intermediate_not_after, leaf_not_after);

        let material = TlsMaterial::from_data_store(&store).unwrap();
        assert_eq!(
            material.expiry().timestamp(),
            intermediate_not_after.unix_timestamp(),
            "an intermediate expiring before the leaf is the effective expiry"
        );
    }

    #[test]
    fn test_garbage_certificate_is_rejected_as_empty_chain() {
        let pki = TestPki::new();
        let mut store = pki.issue(TestPki::not_after(time::Duration::days(30)));
        store.crt = b"not a certificate".to_vec();

        let err = TlsMaterial::from_data_store(&store).unwrap_err();
        assert!(matches!(err, CredentialsError::EmptyCertificateChain));
    }

    #[test]
    fn test_missing_private_key_is_rejected() {
        let pki = TestPki::new();
        let mut store = pki.issue(TestPki::not_after(time::Duration::days(30)));
        store.key = Vec::new();

        let err = TlsMaterial::from_data_store(&store).unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidPrivateKey(_)));
    }

    #[test]
    fn test_unusable_ca_bundle_is_rejected() {
        let pki = TestPki::new();
        let mut store = pki.issue(TestPki::not_after(time::Duration::days(30)));
        store.ca = b"-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----\n".to_vec();

        let err = TlsMaterial::from_data_store(&store).unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidCaBundle(_)));
    }

    #[test]
    fn test_mismatched_key_is_rejected() {
        let pki = TestPki::new();
        let a = pki.issue(TestPki::not_after(time::Duration::days(30)));
        let b = pki.issue(TestPki::not_after(time::Duration::days(30)));
        let store = DataStore {
            crt: a.crt,
            key: b.key,
            ca: a.ca,
        };

        let err = TlsMaterial::from_data_store(&store).unwrap_err();
        assert!(matches!(err, CredentialsError::Tls(_)), "unexpected error: {err}");
    }
}
