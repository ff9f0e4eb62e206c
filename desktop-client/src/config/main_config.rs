use std::path::PathBuf;

use common::config::Validate;
use common::defaults;
use common::games::snake::GameSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "snake_high_score.yaml";

/// Relative paths live next to the executable.
pub fn resolve_data_path(file_name: &str) -> PathBuf {
    let path = PathBuf::from(file_name);
    if path.is_absolute() {
        return path;
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(path);
    }
    path
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(resolve_data_path(CONFIG_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// `None` plays offline with an in-process leaderboard.
    pub server_address: Option<String>,
    /// Last name entered in the game-over dialog.
    pub player_name: String,
    pub high_score_file: String,
    pub game: GameSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(address) = &self.server_address
            && !(address.starts_with("http://") || address.starts_with("https://"))
        {
            return Err(format!("server address '{}' must start with http:// or https://", address));
        }
        if self.player_name.chars().count() > defaults::MAX_PLAYER_NAME_LEN {
            return Err(format!(
                "player_name must be at most {} characters",
                defaults::MAX_PLAYER_NAME_LEN
            ));
        }
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        self.game.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: Some(defaults::DEFAULT_SERVER_URL.to_string()),
            player_name: String::new(),
            high_score_file: HIGH_SCORE_FILE_NAME.to_string(),
            game: GameSettings::default(),
        }
    }
}
