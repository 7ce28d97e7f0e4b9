//! File-backed [`LogStore`] implementation.
//!
//! Persists the serialized conversation log as one JSON file in the data
//! directory. Each `set` overwrites the whole file, so the stored blob is
//! always a complete serialization of the in-memory log.

use std::path::{Path, PathBuf};

use chatline_core::store::LogStore;
use chatline_types::error::StorageError;

/// Default file name of the persisted log inside the data directory.
pub const LOG_FILE_NAME: &str = "messages.json";

/// Stores the conversation log blob at a single file path.
#[derive(Debug, Clone)]
pub struct FileLogStore {
    path: PathBuf,
}

impl FileLogStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the conventional location inside a data directory.
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(LOG_FILE_NAME))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogStore for FileLogStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err.to_string())),
        }
    }

    async fn set(&self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| StorageError::Write(err.to_string()))?;
        }
        tokio::fs::write(&self.path, blob)
            .await
            .map_err(|err| StorageError::Write(err.to_string()))
    }

    async fn remove(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Remove(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileLogStore::in_data_dir(tmp.path());
        assert!(store.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = FileLogStore::in_data_dir(tmp.path());

        store.set(r#"[{"sender":"user","text":"hi","time":0}]"#).await.unwrap();
        let blob = store.get().await.unwrap().unwrap();
        assert!(blob.contains("\"hi\""));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = FileLogStore::in_data_dir(tmp.path());

        store.set("[1]").await.unwrap();
        store.set("[2]").await.unwrap();
        assert_eq!(store.get().await.unwrap().unwrap(), "[2]");
    }

    #[tokio::test]
    async fn test_set_creates_missing_data_dir() {
        let tmp = TempDir::new().unwrap();
        let store = FileLogStore::in_data_dir(&tmp.path().join("nested"));
        store.set("[]").await.unwrap();
        assert_eq!(store.get().await.unwrap().unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = FileLogStore::in_data_dir(tmp.path());

        store.remove().await.unwrap();
        store.set("[]").await.unwrap();
        store.remove().await.unwrap();
        assert!(store.get().await.unwrap().is_none());
    }
}
