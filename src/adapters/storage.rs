use crate::domain::ports::KeyValueStore;
use crate::utils::error::{Result, StorefrontError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '\0']) || key.starts_with('.') {
            return Err(StorefrontError::storage(key, "resolve", "invalid storage key"));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorefrontError::storage(key, "get", e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorefrontError::storage(key, "set", e.to_string()))?;

        // write-then-rename so readers never observe a half-written value
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, value)
            .await
            .map_err(|e| StorefrontError::storage(key, "set", e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StorefrontError::storage(key, "set", e.to_string()));
        }

        tracing::debug!(key, path = %path.display(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorefrontError::storage(key, "remove", e.to_string())),
        }
    }
}
