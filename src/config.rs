use crate::consts;
use crate::game::CollisionPolicy;
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroU32};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Width of the board in cells
    pub(crate) grid_width: NonZeroU16,

    /// Height of the board in cells
    pub(crate) grid_height: NonZeroU16,

    /// Number of ticks per second
    pub(crate) speed: NonZeroU32,

    /// What to do when the snake runs into itself
    pub(crate) on_collision: CollisionPolicy,

    /// File to write log messages to.  If unset, nothing is logged.
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_width: consts::DEFAULT_GRID_WIDTH,
            grid_height: consts::DEFAULT_GRID_HEIGHT,
            speed: consts::DEFAULT_SPEED,
            on_collision: CollisionPolicy::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Time between movements of the snake
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.get()
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
