//! Rolodex configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Rolodex configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolodexConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote directory configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Record store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = allow any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            cors_origins: Vec::new(),
        }
    }
}

/// Remote person directory configuration
///
/// When `url` is set, the `allPersons` query reads the remote directory
/// instead of the local store. Mutations and the other queries always use
/// the local store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL returning a JSON array of person records
    pub url: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: None,
            request_timeout_secs: 10,
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Optional JSON file with person records loaded at startup
    pub seed_file: Option<PathBuf>,
}
