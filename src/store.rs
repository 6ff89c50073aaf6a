use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub const SELECTED_PERSONA_KEY: &str = "selectedPersona";
pub const CONTENT_LIBRARY_KEY: &str = "contentLibrary";

/// File-backed string key-value store holding serialized JSON values.
///
/// Unreadable or malformed state never fails a load: it is logged and the
/// store starts empty.
pub struct LocalStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl LocalStore {
    pub async fn load(path: PathBuf) -> Self {
        let entries = read_entries(&path).await;
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_raw(&self, key: &str) -> Option<String> {
        let guard = self.entries.read().await;
        guard.get(key).cloned()
    }

    /// Decodes a stored value, treating parse failures as absent.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed stored value");
                None
            }
        }
    }

    pub async fn set_raw(&self, key: &str, value: String) -> Result<(), String> {
        let mut guard = self.entries.write().await;
        guard.insert(key.to_string(), value);
        self.persist(&guard).await
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let payload = serde_json::to_string(value)
            .map_err(|err| format!("failed to serialize {}: {}", key, err))?;
        self.set_raw(key, payload).await
    }

    /// Read-modify-write of one JSON value under a single write lock, so
    /// concurrent updates to the same key never overwrite each other.
    /// A missing or malformed value starts from `T::default()`.
    pub async fn update_json<T, R, F>(&self, key: &str, apply: F) -> Result<R, String>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.entries.write().await;
        let mut value: T = match guard.get(key) {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                tracing::warn!(key, error = %err, "replacing malformed stored value");
                T::default()
            }),
            None => T::default(),
        };
        let result = apply(&mut value);
        let payload = serde_json::to_string(&value)
            .map_err(|err| format!("failed to serialize {}: {}", key, err))?;
        guard.insert(key.to_string(), payload);
        self.persist(&guard).await?;
        Ok(result)
    }

    pub async fn remove(&self, key: &str) -> Result<bool, String> {
        let mut guard = self.entries.write().await;
        let removed = guard.remove(key).is_some();
        if removed {
            self.persist(&guard).await?;
        }
        Ok(removed)
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|err| format!("failed to serialize state: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write state: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize state: {}", err))?;
        Ok(())
    }
}

async fn read_entries(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read state, starting empty");
            return BTreeMap::new();
        }
    };
    if data.trim().is_empty() {
        return BTreeMap::new();
    }
    serde_json::from_str(&data).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "failed to parse state, starting empty");
        BTreeMap::new()
    })
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create state dir: {}", err))
}
