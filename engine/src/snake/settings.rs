use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer, ensure};

pub const DEFAULT_CONFIG_FILE: &str = "snake_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Fixed food-placement seed; a fresh one is drawn per game when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_tick_limit")]
    pub tick_limit: u64,
}

fn default_tick_limit() -> u64 {
    10_000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            seed: None,
            tick_limit: default_tick_limit(),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        ensure(self.rows >= 1, "rows must be at least 1")?;
        ensure(self.cols >= 4, "cols must be at least 4")?;
        ensure(
            self.rows <= 500 && self.cols <= 500,
            "grid dimensions must not exceed 500x500",
        )?;
        ensure(self.tick_limit > 0, "tick_limit must be greater than 0")
    }
}
