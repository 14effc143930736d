//! Settings structures for Loadboard-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching loadboard.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub eligibility: EligibilitySettings,
    pub search: SearchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            store: StoreSettings::default(),
            eligibility: EligibilitySettings::default(),
            search: SearchSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MONGO_URI") {
            self.store.uri = val;
        }
        if let Ok(val) = std::env::var("DB_NAME") {
            self.store.database = val;
        }
        if let Ok(val) = std::env::var("FMCSA_API_KEY") {
            self.eligibility.api_key = val;
        }
        if let Ok(val) = std::env::var("LOADBOARD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("LOADBOARD_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8787,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Document store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection holding load records
    pub collection: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "freight".to_string(),
            collection: "loads".to_string(),
        }
    }
}

/// Carrier eligibility registry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilitySettings {
    /// Registry base URL
    pub base_url: String,
    /// API key passed as the webKey query parameter
    pub api_key: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for EligibilitySettings {
    fn default() -> Self {
        Self {
            base_url: "https://mobile.fmcsa.dot.gov/qc/services".to_string(),
            api_key: String::new(),
            request_timeout: 10.0,
        }
    }
}

/// Load search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Candidate window multiplier for application-side ranking
    pub oversample_factor: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            oversample_factor: crate::OVERSAMPLE_FACTOR,
        }
    }
}
