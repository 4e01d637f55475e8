pub mod kv_backend;
pub mod redis_backend;
pub mod storage_client;

pub use kv_backend::{KvBackend, KvError, MemoryKvBackend};
pub use redis_backend::RedisKvBackend;
pub use storage_client::{StorageClient, LEADS_KEY, USERS_KEY};
