use crate::config::RedisConfig;
use crate::repository::kv_backend::{KvBackend, KvError};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::{debug, error, info, instrument};

/// Redis-backed storage transport. One multiplexed connection is shared via
/// `ConnectionManager`, which reconnects on its own.
#[derive(Clone)]
pub struct RedisKvBackend {
    manager: ConnectionManager,
}

impl RedisKvBackend {
    #[instrument(skip(config), fields(host = %config.host, port = config.port, db = config.database))]
    pub async fn connect(config: RedisConfig) -> Result<Self, KvError> {
        info!("connecting storage backend");

        config.validate().map_err(|e| {
            error!("invalid storage configuration: {e}");
            KvError::Config(e.to_string())
        })?;

        let client = Client::open(config.connection_url()).map_err(|e| {
            error!("failed to create redis client: {e}");
            KvError::Connection(format!("client creation failed: {e}"))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            error!("failed to establish redis connection: {e}");
            KvError::Connection(format!("connection failed: {e}"))
        })?;

        let backend = Self { manager };
        backend.ping().await?;
        info!("storage backend ready");
        Ok(backend)
    }

    async fn ping(&self) -> Result<(), KvError> {
        let mut conn = self.manager.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| KvError::Operation(format!("ping failed: {e}")))?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(KvError::Operation(format!("unexpected ping reply: {reply}")))
        }
    }
}

#[async_trait]
impl KvBackend for RedisKvBackend {
    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| KvError::Operation(format!("get failed: {e}")))?;
        debug!(found = value.is_some(), "fetched key");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(key = %key))]
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| KvError::Operation(format!("set failed: {e}")))?;
        debug!("stored key");
        Ok(())
    }

    #[instrument(skip(self), fields(prefix = %prefix))]
    async fn list(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let mut conn = self.manager.clone();
        let mut keys: Vec<String> = conn
            .keys(format!("{prefix}*"))
            .await
            .map_err(|e| KvError::Operation(format!("keys failed: {e}")))?;
        keys.sort();
        Ok(keys)
    }
}
