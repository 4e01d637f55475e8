use crate::config::ConfigError;
use std::env;

/// Optional override for the seeded admin account, applied only when the
/// collections are bootstrapped for the first time. Both `ADMIN_USERNAME`
/// and `ADMIN_PASSWORD` must be set; `ADMIN_NAME` falls back to the default
/// display name.
#[derive(Debug, Clone)]
pub struct AdminSeedConfig {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
}

impl AdminSeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AdminSeedConfig {
            username: env::var("ADMIN_USERNAME")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_USERNAME".to_string()))?,
            password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?,
            name: env::var("ADMIN_NAME").ok(),
        })
    }
}
