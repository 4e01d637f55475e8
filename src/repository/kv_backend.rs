use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Failures of the raw storage backend. These never escape past
/// `StorageClient`; callers above the client boundary see `None`, a dropped
/// write, or an empty key list instead.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("operation error: {0}")]
    Operation(String),
}

/// Raw key-value transport. Values are opaque text blobs; serialization is
/// the client's concern.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// `Ok(None)` means the key was never written. A transport failure is an
    /// `Err`; the distinction matters only at this seam.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
    async fn list(&self, prefix: &str) -> Result<Vec<String>, KvError>;
}

/// In-process backend for tests and embedders that run without external
/// storage.
#[derive(Debug, Default)]
pub struct MemoryKvBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvBackend for MemoryKvBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        debug!(key = %key, "storing value in memory backend");
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let entries = self.entries.lock().await;
        let mut keys: Vec<String> = entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}
