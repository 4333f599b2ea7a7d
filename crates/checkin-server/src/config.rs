//! Server configuration

use serde::{Deserialize, Serialize};

/// Backend configuration, loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub listen_addr: String,
    /// Path of the append-only record file.
    pub records_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".into(),
            records_path: "vehicle_records.txt".into(),
        }
    }
}

impl ServerConfig {
    /// Load from file.
    pub fn load(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(std::io::Error::other)
    }
}
