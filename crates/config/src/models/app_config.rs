use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    api_observability::{ApiConfig, ObservabilityConfig},
    store::StoreConfig,
};
use crate::validation::ConfigValidator;
use crate::{ConfigError, ConfigResult};

/// 未显式指定配置文件时依次查找的位置
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/evv.toml", "evv.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub observability: ObservabilityConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> ConfigResult<Self> {
        let mut builder = ConfigBuilder::builder()
            .set_default("api.bind_address", "0.0.0.0:8080")?
            .set_default("api.cors_enabled", true)?
            .set_default("api.cors_origins", vec!["*"])?
            .set_default("observability.log_level", "info")?
            .set_default("observability.log_format", "pretty")?
            .set_default("store.seed_on_startup", true)?
            .set_default("store.event_log_capacity", 256)?;

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(ConfigError::File(format!("配置文件不存在: {}", path)));
            }
        } else if let Some(path) = DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("EVV")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.cors_origins")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.api.validate()?;
        self.observability.validate()?;
        self.store.validate()?;
        Ok(())
    }
}
