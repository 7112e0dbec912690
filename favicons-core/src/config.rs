use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub source: PathBuf,
    pub dest_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: PathBuf::from(crate::DEFAULT_SOURCE),
            dest_dir: PathBuf::from(crate::DEFAULT_DEST_DIR),
            sizes: crate::DEFAULT_SIZES.to_vec(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    pub fn parse(s: &str) -> Result<Config, ConfigLoadError> {
        let config: Config = toml::from_str(s)
            .map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse_file(p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let config: Config = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(ConfigLoadError::Invalid(
                    "sizes must be greater than zero".to_owned(),
                ));
            }
            if !seen.insert(size) {
                return Err(ConfigLoadError::Invalid(format!(
                    "size {} is listed more than once",
                    size
                )));
            }
        }
        Ok(())
    }
}
