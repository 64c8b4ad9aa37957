//! TOML-file-backed configuration registry
//!
//! Reads are served from an in-memory cache. Every mutation builds the next
//! configuration, persists it by writing a sibling temp file and renaming it
//! over the original, and only then publishes the cache, so memory and disk
//! never diverge and a crash mid-write cannot truncate the file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use gateway_console_core::error::{CoreError, CoreResult};
use gateway_console_core::traits::ConfigRegistry;
use gateway_console_core::types::{validate_resource_name, Config, FieldValues, ResourceKind};

/// Configuration registry persisted to a TOML file
pub struct FileConfigRegistry {
    path: PathBuf,
    cache: RwLock<Config>,
}

impl FileConfigRegistry {
    /// Open a registry over a TOML file.
    ///
    /// A missing file is an empty configuration; it is created on the first
    /// mutation. A file that exists but does not parse is an error.
    pub async fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let config = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                toml::from_str(&raw).map_err(|e| CoreError::SerializationError(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(CoreError::StorageError(e.to_string())),
        };

        log::debug!(
            "Opened configuration file {}: {} certificates",
            path.display(),
            config.certificates.len()
        );
        Ok(Self {
            path,
            cache: RwLock::new(config),
        })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, config: &Config) -> CoreResult<()> {
        let raw = toml::to_string_pretty(config)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ConfigRegistry for FileConfigRegistry {
    async fn load(&self) -> CoreResult<Config> {
        Ok(self.cache.read().await.clone())
    }

    async fn update(
        &self,
        kind: ResourceKind,
        name: &str,
        values: &FieldValues,
    ) -> CoreResult<()> {
        validate_resource_name(name)?;
        let mut cache = self.cache.write().await;
        let mut next = cache.clone();
        match kind {
            ResourceKind::Certificate => {
                let mut record = next.certificates.get(name).cloned().unwrap_or_default();
                record.merge_values(values)?;
                record.validate()?;
                next.certificates.insert(name.to_string(), record);
            }
        }

        self.persist(&next).await?;
        *cache = next;
        Ok(())
    }

    async fn remove(&self, kind: ResourceKind, name: &str) -> CoreResult<()> {
        let mut cache = self.cache.write().await;
        let mut next = cache.clone();
        match kind {
            ResourceKind::Certificate => {
                if next.certificates.remove(name).is_none() {
                    return Err(CoreError::ResourceNotFound {
                        kind,
                        name: name.to_string(),
                    });
                }
            }
        }

        self.persist(&next).await?;
        *cache = next;
        Ok(())
    }
}
