use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: u8,
    pub connection_timeout_secs: u64,
    pub command_timeout_secs: u64,
    pub use_tls: bool,
}

impl RedisConfig {
    /// Load Redis configuration from environment variables
    ///
    /// Expected environment variables:
    /// - REDIS_HOST: Redis server host (e.g., "localhost")
    /// - REDIS_PORT: Redis server port (defaults to 6379)
    /// - REDIS_USERNAME: Optional username for Redis (Redis 6.0+)
    /// - REDIS_PASSWORD: Optional password for Redis
    /// - REDIS_DATABASE: Database number (defaults to 0)
    /// - REDIS_CONNECTION_TIMEOUT: Connection timeout in seconds (defaults to 5)
    /// - REDIS_COMMAND_TIMEOUT: Command timeout in seconds (defaults to 10)
    /// - REDIS_USE_TLS: Whether to use TLS/SSL (defaults to false)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("loading Redis configuration from environment");

        let host = env::var("REDIS_HOST")
            .map_err(|_| ConfigError::EnvVarNotFound("REDIS_HOST".to_string()))?;

        let port = env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("invalid REDIS_PORT: {e}")))?;

        let username = env::var("REDIS_USERNAME").ok();
        let password = env::var("REDIS_PASSWORD").ok();

        let database = env::var("REDIS_DATABASE")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("invalid REDIS_DATABASE: {e}")))?;

        let connection_timeout_secs = env::var("REDIS_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("invalid REDIS_CONNECTION_TIMEOUT: {e}")))?;

        let command_timeout_secs = env::var("REDIS_COMMAND_TIMEOUT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("invalid REDIS_COMMAND_TIMEOUT: {e}")))?;

        let use_tls = env::var("REDIS_USE_TLS")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or_else(|_| {
                warn!("invalid REDIS_USE_TLS value, defaulting to false");
                false
            });

        let config = Self {
            host,
            port,
            username,
            password,
            database,
            connection_timeout_secs,
            command_timeout_secs,
            use_tls,
        };
        debug!(host = %config.host, port = config.port, db = config.database, "Redis configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue("host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port must be greater than 0".to_string()));
        }
        if self.database > 15 {
            warn!("Redis database number is high: {} (Redis default max is 15)", self.database);
        }
        if self.connection_timeout_secs == 0 || self.command_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "timeouts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the Redis connection URL
    pub fn connection_url(&self) -> String {
        let protocol = if self.use_tls { "rediss" } else { "redis" };

        let auth_part = match (&self.username, &self.password) {
            (Some(username), Some(password)) => format!("{username}:{password}@"),
            (None, Some(password)) => format!(":{password}@"),
            _ => String::new(),
        };

        format!(
            "{}://{}{}:{}/{}",
            protocol, auth_part, self.host, self.port, self.database
        )
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            username: None,
            password: None,
            database: 0,
            connection_timeout_secs: 5,
            command_timeout_secs: 10,
            use_tls: false,
        }
    }
}
