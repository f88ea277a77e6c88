//! Configuration for quoteforged.
//!
//! Loads settings from quoteforged.toml (path overridable via
//! $QUOTEFORGED_CONFIG) or falls back to defaults.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default config file path.
pub const CONFIG_PATH: &str = "quoteforged.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "QUOTEFORGED_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding insurer logo files.
    #[serde(default = "default_logo_dir")]
    pub logo_dir: String,

    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Uploads smaller than this are rejected as not-a-real-workbook.
    #[serde(default = "default_min_upload_bytes")]
    pub min_upload_bytes: usize,
}

fn default_listen_addr() -> String {
    // Localhost only; a fronting proxy owns external exposure.
    "127.0.0.1:7870".to_string()
}

fn default_logo_dir() -> String {
    "logos".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_min_upload_bytes() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            logo_dir: default_logo_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            min_upload_bytes: default_min_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// Load from the configured path, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                warn!("Using default config ({}: {})", path, e);
                Self::default()
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
