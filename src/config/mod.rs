use crate::error::{Result, UsuariosError};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://usuarios.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Key/value configuration source
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot of the process environment
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let port = match config.get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| UsuariosError::config("PORT", e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: config.get_or("HOST", DEFAULT_HOST),
            port,
            database_url: config.get_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            log_filter: config.get_or("RUST_LOG", DEFAULT_LOG_FILTER),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
