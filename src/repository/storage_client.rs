use crate::repository::kv_backend::KvBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Key under which the whole user collection is persisted.
pub const USERS_KEY: &str = "crm_users";
/// Key under which the whole lead collection is persisted.
pub const LEADS_KEY: &str = "crm_leads";

/// The application's only I/O boundary. Values are JSON text blobs.
///
/// The contract deliberately swallows failures: a read error is
/// indistinguishable from an absent key, a write error is logged and
/// dropped, and a failed listing is empty. The in-memory state above this
/// client stays authoritative for the session either way.
#[derive(Clone)]
pub struct StorageClient {
    backend: Arc<dyn KvBackend>,
}

impl StorageClient {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Missing key, transport failure, and malformed payload all come back
    /// as `None`.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("malformed payload under key {key}, treating as absent: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("key {key} not found");
                None
            }
            Err(e) => {
                warn!("read of key {key} failed, treating as absent: {e}");
                None
            }
        }
    }

    /// Fire-and-forget write; failures are logged and dropped.
    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize value for key {key}, write dropped: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(key, &raw).await {
            warn!("write of key {key} failed, state kept in memory only: {e}");
        } else {
            debug!("persisted key {key}");
        }
    }

    /// Keys under `prefix`; empty on failure.
    #[instrument(skip(self), fields(prefix = %prefix))]
    pub async fn list(&self, prefix: &str) -> Vec<String> {
        match self.backend.list(prefix).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("listing keys under {prefix} failed: {e}");
                Vec::new()
            }
        }
    }
}
