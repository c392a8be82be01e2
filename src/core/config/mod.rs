use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

mod loader;
mod paths;

use super::commands::DEFAULT_EDITOR;
use super::theme::DEFAULT_THEME;
use crate::flags::Flags;
use crate::net::DEFAULT_TIMEOUT;
pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Settings read from `~/.sprigrc` (or `--config`), falling back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: String,
    pub editor: String,
    pub http_timeout: Duration,
    pub editor_timeout: Option<Duration>,
    pub history_size: usize,
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            editor: DEFAULT_EDITOR.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            editor_timeout: None,
            history_size: DEFAULT_HISTORY_SIZE,
            history_file: None,
        }
    }
}

impl Config {
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new(flags.get_value("config").map(PathBuf::from));
        let mut config = Config {
            history_file: paths.history_path.clone(),
            ..Config::default()
        };

        ConfigLoader::new(&paths).load_configs(&mut config)?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(PathBuf),
    IoError(std::io::Error),
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "{}: no such file", path.display())
            }
            ConfigError::IoError(e) => write!(f, "read failed: {}", e),
            ConfigError::InvalidValue { line, key, value } => {
                write!(f, "line {}: invalid value for {}: {:?}", line, key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
