//! CLI configuration

use std::path::PathBuf;

use certainty_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// CLI configuration, read from `<config dir>/certainty/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Knowledge base file used when `--kb` is not given
    pub knowledge_base: Option<PathBuf>,

    /// Output format used when `--output` is not given
    pub output: Option<OutputFormat>,

    /// Engine settings
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            tracing::debug!(path = %config_path.display(), "Loaded CLI config");
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("certainty").join("config.toml"))
    }
}
