use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{GameSettings, Statistics};

use super::AiDelayConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const STATISTICS_FILE_NAME: &str = "tictactoe_stats.yaml";

fn get_default_path(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| get_default_path(CONFIG_FILE_NAME)))
}

pub fn get_statistics_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Statistics, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| get_default_path(STATISTICS_FILE_NAME)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub ai_delay: AiDelayConfig,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.ai_delay.validate()?;
        Ok(())
    }
}

/// Where the client keeps its settings and the running score.
pub struct Storage<P: ConfigContentProvider> {
    pub settings: ConfigManager<P, ClientConfig>,
    pub statistics: ConfigManager<P, Statistics>,
}

impl Storage<FileContentConfigProvider> {
    pub fn from_files(settings_path: Option<PathBuf>, statistics_path: Option<PathBuf>) -> Self {
        Self {
            settings: get_config_manager(settings_path),
            statistics: get_statistics_manager(statistics_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigError, ConfigSerializer};
    use tictactoe_common::games::tictactoe::{Difficulty, GameMode, Player};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: ClientConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = ClientConfig {
            game: GameSettings {
                mode: GameMode::VsComputer,
                difficulty: Difficulty::Unbeatable,
                human_mark: Player::O,
            },
            ai_delay: AiDelayConfig { min_ms: 0, max_ms: 50 },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        manager.set_config(&config).unwrap();

        let fresh = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let content = r#"
            game:
              mode: TwoPlayers
              difficulty: Hard
              human_mark: X
        "#;
        let serializer = YamlConfigSerializer::new();
        let config: ClientConfig = serializer.deserialize(content).unwrap();
        assert_eq!(config.game.mode, GameMode::TwoPlayers);
        assert_eq!(config.ai_delay, AiDelayConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              mode: VsComputer
              difficulty: Impossible
              human_mark: X
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_out_of_range_delay_fails_validation() {
        let content = "ai_delay:\n  min_ms: 900\n  max_ms: 100\n";
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
        let _ = std::fs::remove_file(file_path);
    }
}
