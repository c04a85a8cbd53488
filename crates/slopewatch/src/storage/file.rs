//! File-backed key-value store used by the CLI.
//!
//! Each key lives in its own `<dir>/<key>.json` file, with every character
//! outside `[A-Za-z0-9_-]` in the key replaced by `_`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::backend::KeyValueStore;
use crate::error::{Error, Result};

/// Stores each value in a file under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file holding the value for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                debug!("Read {} bytes from {}", value.len(), path.display());
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        if !self.dir.exists() {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|source| Error::DirectoryCreate {
                    path: self.dir.clone(),
                    source,
                })?;
        }

        let path = self.path_for(key);
        tokio::fs::write(&path, value.as_bytes()).await?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "slopewatch_file_test_{}_{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        FileStore::new(dir)
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("@dados_ambientais"),
            PathBuf::from("/data/_dados_ambientais.json")
        );
        assert_eq!(
            store.path_for("a/b c"),
            PathBuf::from("/data/a_b_c.json")
        );
    }

    #[tokio::test]
    async fn test_get_missing_file() {
        let store = temp_store("missing");
        assert_eq!(store.get("records").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_dir_and_round_trips() {
        let store = temp_store("roundtrip");
        assert!(!store.dir().exists());

        store.set("records", "[]".to_string()).await.unwrap();
        assert!(store.dir().exists());
        assert_eq!(store.get("records").await.unwrap().as_deref(), Some("[]"));

        let _ = std::fs::remove_dir_all(store.dir());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = temp_store("remove");
        store.set("records", "[]".to_string()).await.unwrap();

        store.remove("records").await.unwrap();
        assert_eq!(store.get("records").await.unwrap(), None);
        store.remove("records").await.unwrap();

        let _ = std::fs::remove_dir_all(store.dir());
    }
}
