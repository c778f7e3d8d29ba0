//! Layered configuration loading.
//!
//! Precedence, lowest first: built-in defaults, `dumpit.toml`, environment
//! (including a `.env` file) and finally explicit overrides from the CLI.

use std::path::{Path, PathBuf};

use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{Config, ConfigSource};

pub mod error;

use error::ConfigLoadError;

pub const DEFAULT_CONFIG_FILE: &str = "dumpit.toml";

/// Effective configuration plus where it was read from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit config file. A missing explicit file is an error, unlike the
    /// default `dumpit.toml` lookup.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Ignore the process environment and `.env` files.
    pub fn without_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env = if self.skip_env {
            EnvConfig::default()
        } else {
            self.load_env_file()?;
            EnvConfig::from_env()?
        };
        self.load_with_env(env)
    }

    /// Same as [`load`](Self::load) with the environment layer supplied.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file, source) = self.read_file()?;

        let mut config = Config::default();
        config.carousel.merge(file.carousel);
        config.sound.merge(file.sound);
        config.carousel.merge(env.carousel);
        config.sound.merge(env.sound);
        config.validate()?;

        tracing::debug!(?source, "configuration loaded");
        Ok(ConfigLoad { config, source })
    }

    fn load_env_file(&self) -> Result<(), ConfigLoadError> {
        match &self.env_file {
            Some(path) => dotenvy::from_path(path).map_err(|err| {
                ConfigLoadError::EnvFile {
                    path: path.clone(),
                    message: err.to_string(),
                }
            }),
            None => {
                if let Err(err) = dotenvy::dotenv()
                    && !err.not_found()
                {
                    tracing::warn!("ignoring unreadable .env file: {err}");
                }
                Ok(())
            }
        }
    }

    fn read_file(&self) -> Result<(FileConfig, ConfigSource), ConfigLoadError> {
        let (path, required) = match &self.config_path {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok((FileConfig::default(), ConfigSource::Defaults));
        }
        let file = read_config_file(&path)?;
        Ok((file, ConfigSource::File(path)))
    }
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw =
        std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    FileConfig::parse_from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}
