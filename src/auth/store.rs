//! Durable key-value persistence for the session record.
//!
//! The store holds three independent string keys (token, user profile JSON,
//! expiry). There is no transaction across keys; a crash between writes can
//! leave a partial record, which restoration discards.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Device-local string key-value persistence surviving process restarts.
///
/// `get` never errors: a failed read is indistinguishable from an absent
/// key. Write and delete failures surface as errors, but callers treat them
/// as best-effort - the in-memory session stays authoritative for the
/// current process lifetime.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_all(&self, keys: &[&str]) -> Result<()>;
}

/// File-per-key store under a directory, the default persistence backend.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!(key, error = %e, "Failed to read credential key, treating as absent");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create session directory")?;
        tokio::fs::write(self.path(key), value)
            .await
            .with_context(|| format!("Failed to persist credential key {}", key))?;
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<()> {
        let mut first_err = None;
        for key in keys {
            match tokio::fs::remove_file(self.path(key)).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(
                            anyhow::Error::from(e)
                                .context(format!("Failed to remove credential key {}", key)),
                        );
                    }
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// In-memory store: process-lifetime sessions and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<()> {
        let mut entries = self.lock();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session"));

        assert!(store.get("token").await.is_none());

        store.set("token", "tok-123").await.unwrap();
        store.set("user", r#"{"nome":"Ana"}"#).await.unwrap();

        assert_eq!(store.get("token").await.as_deref(), Some("tok-123"));
        assert_eq!(store.get("user").await.as_deref(), Some(r#"{"nome":"Ana"}"#));
    }

    #[tokio::test]
    async fn test_file_store_remove_all() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("token", "t").await.unwrap();
        store.set("expires_at", "123").await.unwrap();

        // "user" was never written; remove_all must not error on it
        store
            .remove_all(&["token", "user", "expires_at"])
            .await
            .unwrap();

        assert!(store.get("token").await.is_none());
        assert!(store.get("expires_at").await.is_none());
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("token").await.is_none());

        store.set("token", "tok").await.unwrap();
        assert_eq!(store.get("token").await.as_deref(), Some("tok"));

        store.remove_all(&["token", "user"]).await.unwrap();
        assert!(store.get("token").await.is_none());
    }
}
