//! Configuration registry abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{validate_resource_name, Config, FieldValues, ResourceKind};

/// Configuration Registry Trait
///
/// Owns the authoritative keyed collections of the gateway configuration.
/// Provides a default memory implementation of `InMemoryConfigRegistry`;
/// frontends inject file- or service-backed implementations.
///
/// Errors from `update`/`remove` are propagated to the editor untouched:
/// the editor performs no retries and no local recovery.
#[async_trait]
pub trait ConfigRegistry: Send + Sync {
    /// Load a snapshot of the current configuration
    async fn load(&self) -> CoreResult<Config>;

    /// Upsert a named resource from a partial value map
    ///
    /// Merges `values` into the existing record (or a fresh empty one),
    /// validates the result, and persists it.
    ///
    /// # Arguments
    /// * `kind` - Resource kind
    /// * `name` - Resource name (must be a legal, non-sentinel name)
    /// * `values` - Field values submitted by an editor surface
    async fn update(
        &self,
        kind: ResourceKind,
        name: &str,
        values: &FieldValues,
    ) -> CoreResult<()>;

    /// Delete a named resource
    ///
    /// Removing a name that does not exist is `ResourceNotFound`.
    async fn remove(&self, kind: ResourceKind, name: &str) -> CoreResult<()>;
}

/// In-memory configuration registry
///
/// Default implementation, available on all platforms. Holds the whole
/// configuration behind an async `RwLock`; used by tests and by frontends
/// that keep configuration purely in memory.
#[derive(Clone)]
pub struct InMemoryConfigRegistry {
    config: Arc<RwLock<Config>>,
}

impl InMemoryConfigRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(Config::default())),
        }
    }

    /// Create a registry seeded with an initial configuration
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }
}

impl Default for InMemoryConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRegistry for InMemoryConfigRegistry {
    async fn load(&self) -> CoreResult<Config> {
        Ok(self.config.read().await.clone())
    }

    async fn update(
        &self,
        kind: ResourceKind,
        name: &str,
        values: &FieldValues,
    ) -> CoreResult<()> {
        validate_resource_name(name)?;
        let mut config = self.config.write().await;
        match kind {
            ResourceKind::Certificate => {
                let mut record = config.certificates.get(name).cloned().unwrap_or_default();
                record.merge_values(values)?;
                record.validate()?;
                config.certificates.insert(name.to_string(), record);
            }
        }
        Ok(())
    }

    async fn remove(&self, kind: ResourceKind, name: &str) -> CoreResult<()> {
        let mut config = self.config.write().await;
        match kind {
            ResourceKind::Certificate => {
                if config.certificates.remove(name).is_none() {
                    return Err(CoreError::ResourceNotFound {
                        kind,
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, serde_json::Value)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn update_creates_then_merges() {
        let registry = InMemoryConfigRegistry::new();

        registry
            .update(
                ResourceKind::Certificate,
                "a.com",
                &values(&[("domains", json!("a.com"))]),
            )
            .await
            .unwrap();

        registry
            .update(
                ResourceKind::Certificate,
                "a.com",
                &values(&[("is_default", json!(true))]),
            )
            .await
            .unwrap();

        let config = registry.load().await.unwrap();
        let record = &config.certificates["a.com"];
        assert_eq!(record.domains.as_deref(), Some("a.com"));
        assert_eq!(record.is_default, Some(true));
    }

    #[tokio::test]
    async fn update_rejects_illegal_names() {
        let registry = InMemoryConfigRegistry::new();

        let result = registry
            .update(ResourceKind::Certificate, "*", &FieldValues::new())
            .await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        let result = registry
            .update(ResourceKind::Certificate, "  ", &FieldValues::new())
            .await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn update_rejects_invalid_record() {
        let registry = InMemoryConfigRegistry::new();

        let result = registry
            .update(
                ResourceKind::Certificate,
                "a.com",
                &values(&[("tls_cert", json!("not pem material"))]),
            )
            .await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        // Nothing was stored
        let config = registry.load().await.unwrap();
        assert!(config.certificates.is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_or_errors() {
        let registry = InMemoryConfigRegistry::new();
        registry
            .update(
                ResourceKind::Certificate,
                "a.com",
                &values(&[("domains", json!("a.com"))]),
            )
            .await
            .unwrap();

        registry
            .remove(ResourceKind::Certificate, "a.com")
            .await
            .unwrap();
        assert!(registry.load().await.unwrap().certificates.is_empty());

        let result = registry.remove(ResourceKind::Certificate, "a.com").await;
        assert!(matches!(
            result,
            Err(CoreError::ResourceNotFound { name, .. }) if name == "a.com"
        ));
    }

    #[tokio::test]
    async fn seeded_registry_serves_initial_config() {
        let mut config = Config::default();
        config
            .certificates
            .insert("seed.com".to_string(), crate::types::Certificate::default());

        let registry = InMemoryConfigRegistry::with_config(config);
        let loaded = registry.load().await.unwrap();
        assert!(loaded.certificates.contains_key("seed.com"));
    }
}
