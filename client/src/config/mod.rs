mod config;
mod symbols_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, get_config_manager};
pub use symbols_config::SymbolsConfig;
