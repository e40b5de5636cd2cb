use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::BotSettings;
use tictactoe_common::logger::LogLevel;

use super::{ConfigManager, FileContentConfigProvider, SymbolsConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub log_level: LogLevel,
    pub opening_shortcut: bool,
    #[serde(default)]
    pub show_search_stats: bool,
    pub symbols: SymbolsConfig,
}

impl Config {
    pub fn bot_settings(&self) -> BotSettings {
        BotSettings {
            opening_shortcut: self.opening_shortcut,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.symbols.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            opening_shortcut: true,
            show_search_stats: false,
            symbols: SymbolsConfig::default(),
        }
    }
}
