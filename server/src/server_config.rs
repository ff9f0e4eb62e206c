use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use common::config::Validate;
use common::defaults;

pub const DEFAULT_CONFIG_FILE: &str = "snake_leaderboard_server.yaml";
pub const DEFAULT_SCORES_FILE: &str = "snake_scores.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    Memory,
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_address: String,
    pub grpc_address: String,
    pub storage: StorageConfig,
    pub leaderboard_limit: usize,
    pub max_player_name_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_address: defaults::DEFAULT_HTTP_ADDRESS.to_string(),
            grpc_address: defaults::DEFAULT_GRPC_ADDRESS.to_string(),
            storage: StorageConfig::File {
                path: PathBuf::from(DEFAULT_SCORES_FILE),
            },
            leaderboard_limit: defaults::LEADERBOARD_LIMIT,
            max_player_name_len: defaults::MAX_PLAYER_NAME_LEN,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.http_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("http_address '{}': {}", self.http_address, e))?;
        self.grpc_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("grpc_address '{}': {}", self.grpc_address, e))?;

        if self.leaderboard_limit == 0 {
            return Err("leaderboard_limit must be greater than 0".to_string());
        }
        if self.max_player_name_len == 0 {
            return Err("max_player_name_len must be greater than 0".to_string());
        }
        if let StorageConfig::File { path } = &self.storage
            && path.as_os_str().is_empty()
        {
            return Err("storage file path must not be empty".to_string());
        }
        Ok(())
    }
}
