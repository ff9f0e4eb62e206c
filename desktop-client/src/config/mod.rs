mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{get_config_manager, resolve_data_path, Config};
