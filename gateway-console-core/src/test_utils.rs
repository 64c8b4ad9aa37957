//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{CertificateEditor, EditorContext};
use crate::traits::{ConfigRegistry, DefaultLabels, InMemoryConfigRegistry, InMemoryUrlState};
use crate::types::{Certificate, Config, FieldValues, ResourceKind};

/// ISRG Root X1 (the Let's Encrypt root), valid until 2035.
pub const TEST_ROOT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIFazCCA1OgAwIBAgIRAIIQz7DSQONZRGPgu2OCiwAwDQYJKoZIhvcNAQELBQAw
TzELMAkGA1UEBhMCVVMxKTAnBgNVBAoTIEludGVybmV0IFNlY3VyaXR5IFJlc2Vh
cmNoIEdyb3VwMRUwEwYDVQQDEwxJU1JHIFJvb3QgWDEwHhcNMTUwNjA0MTEwNDM4
WhcNMzUwNjA0MTEwNDM4WjBPMQswCQYDVQQGEwJVUzEpMCcGA1UEChMgSW50ZXJu
ZXQgU2VjdXJpdHkgUmVzZWFyY2ggR3JvdXAxFTATBgNVBAMTDElTUkcgUm9vdCBY
MTCCAiIwDQYJKoZIhvcNAQEBBQADggIPADCCAgoCggIBAK3oJHP0FDfzm54rVygc
h77ct984kIxuPOZXoHj3dcKi/vVqbvYATyjb3miGbESTtrFj/RQSa78f0uoxmyF+
0TM8ukj13Xnfs7j/EvEhmkvBioZxaUpmZmyPfjxwv60pIgbz5MDmgK7iS4+3mX6U
A5/TR5d8mUgjU+g4rk8Kb4Mu0UlXjIB0ttov0DiNewNwIRt18jA8+o+u3dpjq+sW
T8KOEUt+zwvo/7V3LvSye0rgTBIlDHCNAymg4VMk7BPZ7hm/ELNKjD+Jo2FR3qyH
B5T0Y3HsLuJvW5iB4YlcNHlsdu87kGJ55tukmi8mxdAQ4Q7e2RCOFvu396j3x+UC
B5iPNgiV5+I3lg02dZ77DnKxHZu8A/lJBdiB3QW0KtZB6awBdpUKD9jf1b0SHzUv
KBds0pjBqAlkd25HN7rOrFleaJ1/ctaJxQZBKT5ZPt0m9STJEadao0xAH0ahmbWn
OlFuhjuefXKnEgV4We0+UXgVCwOPjdAvBbI+e0ocS3MFEvzG6uBQE3xDk3SzynTn
jh8BCNAw1FtxNrQHusEwMFxIt4I7mKZ9YIqioymCzLq9gwQbooMDQaHWBfEbwrbw
qHyGO0aoSCqI3Haadr8faqU9GY/rOPNk3sgrDQoo//fb4hVC1CLQJ13hef4Y53CI
rU7m2Ys6xt0nUW7/vGT1M0NPAgMBAAGjQjBAMA4GA1UdDwEB/wQEAwIBBjAPBgNV
HRMBAf8EBTADAQH/MB0GA1UdDgQWBBR5tFnme7bl5AFzgAiIyBpY9umbbjANBgkq
hkiG9w0BAQsFAAOCAgEAVR9YqbyyqFDQDLHYGmkgJykIrGF1XIpu+ILlaS/V9lZL
ubhzEFnTIZd+50xx+7LSYK05qAvqFyFWhfFQDlnrzuBZ6brJFe+GnY+EgPbk6ZGQ
3BebYhtF8GaV0nxvwuo77x/Py9auJ/GpsMiu/X1+mvoiBOv/2X/qkSsisRcOj/KK
NFtY2PwByVS5uCbMiogziUwthDyC3+6WVwW6LLv3xLfHTjuCvjHIInNzktHCgKQ5
ORAzI4JMPJ+GslWYHb4phowim57iaztXOoJwTdwJx4nLCgdNbOhdjsnvzqvHu7Ur
TkXWStAmzOVyyghqpZXjFaH3pO3JLF+l+/+sKAIuvtd7u+Nxe5AW0wdeRlN8NwdC
jNPElpzVmbUq4JUagEiuTDkHzsxHpFKVK7q4+63SM1N95R1NbdWhscdCb+ZAJzVc
oyi3B43njTOQ5yOf+1CceWxG1bQVs5ZufpsMljq4Ui0/1lvh+wjChP4kqKOJ2qxq
4RgqsahDYVvTH9w7jXbyLeiNdd8XM2w9U/t7y0Ff/9yi0GE44Za4rF2LN9d11TPA
mRGunUHBcnWEvgJBQl9nJEiU0Zsnvgc/ubhPgXRR4Xq37Z0j4r7g1SgEEzwxA57d
emyPxgcYxn/eR44/KJ4EBs+lVDR3veyJm+kXQ99b21/+jh5Xos1AnX5iItreGCc=
-----END CERTIFICATE-----
";

// ===== MockConfigRegistry =====

/// Registry mock: real in-memory semantics plus failure injection and
/// call counters.
pub struct MockConfigRegistry {
    inner: InMemoryConfigRegistry,
    /// If Some, update returns this error (for testing rejection paths)
    update_error: RwLock<Option<String>>,
    /// If Some, remove returns this error
    remove_error: RwLock<Option<String>>,
    update_calls: AtomicUsize,
    remove_calls: AtomicUsize,
}

impl MockConfigRegistry {
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: InMemoryConfigRegistry::with_config(config),
            update_error: RwLock::new(None),
            remove_error: RwLock::new(None),
            update_calls: AtomicUsize::new(0),
            remove_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_update_error(&self, err: Option<String>) {
        *self.update_error.write().await = err;
    }

    pub async fn set_remove_error(&self, err: Option<String>) {
        *self.remove_error.write().await = err;
    }

    /// Mutating update calls that reached the registry
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Mutating remove calls that reached the registry
    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }

    /// Current stored configuration
    pub async fn config(&self) -> Config {
        self.inner.load().await.unwrap()
    }
}

#[async_trait]
impl ConfigRegistry for MockConfigRegistry {
    async fn load(&self) -> CoreResult<Config> {
        self.inner.load().await
    }

    async fn update(
        &self,
        kind: ResourceKind,
        name: &str,
        values: &FieldValues,
    ) -> CoreResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.update_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.inner.update(kind, name, values).await
    }

    async fn remove(&self, kind: ResourceKind, name: &str) -> CoreResult<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.remove_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.inner.remove(kind, name).await
    }
}

// ===== Factory methods =====

/// Create a `Certificate` record for tests, keyed by its domain
pub fn test_certificate(domains: &str) -> Certificate {
    Certificate {
        domains: Some(domains.to_string()),
        acme: Some("lets_encrypt".to_string()),
        is_default: Some(false),
        ..Certificate::default()
    }
}

/// Create a `Config` seeded with one test record per name
pub fn config_with(names: &[&str]) -> Config {
    let mut config = Config::default();
    for name in names {
        config
            .certificates
            .insert((*name).to_string(), test_certificate(name));
    }
    config
}

/// Create a test `EditorContext` over a seeded configuration
pub fn create_test_context(
    config: Config,
) -> (
    Arc<EditorContext>,
    Arc<MockConfigRegistry>,
    Arc<InMemoryUrlState>,
) {
    let registry = Arc::new(MockConfigRegistry::with_config(config));
    let url_state = Arc::new(InMemoryUrlState::new());

    let ctx = Arc::new(EditorContext::new(
        registry.clone(),
        url_state.clone(),
        Arc::new(DefaultLabels),
    ));

    (ctx, registry, url_state)
}

/// Create a test `CertificateEditor` over a seeded configuration
pub fn create_test_editor(
    config: Config,
) -> (
    CertificateEditor,
    Arc<MockConfigRegistry>,
    Arc<InMemoryUrlState>,
) {
    let (ctx, registry, url_state) = create_test_context(config);
    let editor = CertificateEditor::new(ctx);
    (editor, registry, url_state)
}
