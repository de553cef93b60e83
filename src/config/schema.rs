//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Built-in secret used when DAYBOOK_SECRET is unset. The server refuses to
/// start with this value unless `server.dev_mode` is enabled.
pub const DEV_SECRET: &str = "daybook-dev-secret-change-me";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow running with the built-in development secret
    #[serde(default)]
    pub dev_mode: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5555
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dev_mode: false,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// tokio-postgres connection string
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "host=localhost port=5432 user=postgres password=postgres dbname=daybook".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing session tokens
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Session token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

fn default_secret_key() -> String {
    DEV_SECRET.to_string()
}

fn default_token_ttl_hours() -> i64 {
    10
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl Config {
    /// Whether the signing secret is still the built-in development default
    pub fn uses_dev_secret(&self) -> bool {
        self.auth.secret_key == DEV_SECRET
    }
}
