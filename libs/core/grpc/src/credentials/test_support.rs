//! Certificate fixtures and fetcher doubles shared by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, DnType, ExtendedKeyUsagePurpose, IsCa,
    KeyPair, KeyUsagePurpose,
};
use rustls::pki_types::CertificateDer;
use time::OffsetDateTime;

use super::{CredentialsError, CredentialsFetcher, DataStore};

pub(crate) struct TestPki {
    ca: Certificate,
    ca_key: KeyPair,
}

impl TestPki {
    pub fn new() -> Self {
        let ca_key = KeyPair::generate().unwrap();
        let ca = ca_params("authorize test ca").self_signed(&ca_key).unwrap();
        Self { ca, ca_key }
    }

    /// Whole-second instant `valid_for` from now.
    pub fn not_after(valid_for: time::Duration) -> OffsetDateTime {
        (OffsetDateTime::now_utc() + valid_for)
            .replace_nanosecond(0)
            .unwrap()
    }

    pub fn ca_der(&self) -> CertificateDer<'static> {
        self.ca.der().clone()
    }

    /// Leaf for `localhost`, signed directly by the CA.
    pub fn issue(&self, not_after: OffsetDateTime) -> DataStore {
        let key = KeyPair::generate().unwrap();
        let leaf = leaf_params(not_after)
            .signed_by(&key, &self.ca, &self.ca_key)
            .unwrap();

        DataStore {
            crt: leaf.pem().into_bytes(),
            key: key.serialize_pem().into_bytes(),
            ca: self.ca.pem().into_bytes(),
        }
    }

    /// Leaf signed by an intermediate; the chain PEM carries both.
    pub fn issue_via_intermediate(
        &self,
        intermediate_not_after: OffsetDateTime,
        leaf_not_after: OffsetDateTime,
    ) -> DataStore {
        let intermediate_key = KeyPair::generate().unwrap();
        let mut params = ca_params("authorize test intermediate");
        params.not_after = intermediate_not_after;
        let intermediate = params
            .signed_by(&intermediate_key, &self.ca, &self.ca_key)
            .unwrap();

        let key = KeyPair::generate().unwrap();
        let leaf = leaf_params(leaf_not_after)
            .signed_by(&key, &intermediate, &intermediate_key)
            .unwrap();

        DataStore {
            crt: format!("{}{}", leaf.pem(), intermediate.pem()).into_bytes(),
            key: key.serialize_pem().into_bytes(),
            ca: self.ca.pem().into_bytes(),
        }
    }
}

fn ca_params(common_name: &str) -> CertificateParams {
    let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
    params.distinguished_name.push(DnType::CommonName, common_name);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages = vec![
        KeyUsagePurpose::KeyCertSign,
        KeyUsagePurpose::CrlSign,
        KeyUsagePurpose::DigitalSignature,
    ];
    params
}

fn leaf_params(not_after: OffsetDateTime) -> CertificateParams {
    let mut params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
    params.distinguished_name.push(DnType::CommonName, "localhost");
    params.extended_key_usages = vec![
        ExtendedKeyUsagePurpose::ServerAuth,
        ExtendedKeyUsagePurpose::ClientAuth,
    ];
    params.not_after = not_after;
    params
}

/// Fetcher whose material can be swapped between calls; counts fetches.
pub(crate) struct SwappableFetcher {
    store: Mutex<DataStore>,
    calls: AtomicUsize,
}

impl SwappableFetcher {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Mutex::new(store),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn swap(&self, store: DataStore) {
        *self.store.lock().unwrap() = store;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialsFetcher for SwappableFetcher {
    async fn fetch(&self, _secret_name: &str) -> Result<DataStore, CredentialsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.store.lock().unwrap().clone())
    }
}
