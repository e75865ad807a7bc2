pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::FirstPlayer;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub show_history: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_history: true }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_saved_by_manager_is_loaded_back() {
        let config = Config {
            game: GameConfig {
                first_player: FirstPlayer::Random,
                seed: Some(99),
            },
            display: DisplayConfig { show_history: false },
            log: LogConfig {
                prefix: Some("Client".to_string()),
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let fresh = get_config_manager(&file_path);
        assert_eq!(fresh.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_empty_log_prefix_is_rejected() {
        let content = r#"
            game:
              first_player: Bot
              seed: null
            display:
              show_history: true
            log:
              prefix: "  "
        "#;

        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.as_str());
        provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_first_player_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize(
            "game:\n  first_player: Nobody\n  seed: 1\ndisplay:\n  show_history: true\nlog:\n  prefix: null\n",
        );
        assert!(result.is_err());
    }
}
