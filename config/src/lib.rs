//! Keel configuration.
//!
//! Read from `~/.keel/config.toml`. Every section is optional:
//!
//! ```toml
//! [buffer]
//! capacity = 8
//!
//! [logging]
//! filter = "keel=debug,info"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use keel_core::{BufferError, Capacity};
use serde::Deserialize;
use thiserror::Error;

/// Buffer capacity used when neither the CLI nor the config names one.
pub const DEFAULT_CAPACITY: usize = 8;

/// Log filter used when `RUST_LOG` is unset and the config names none.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeelConfig {
    pub buffer: Option<BufferConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BufferConfig {
    /// Default capacity for `keel buffer`. Must be positive.
    pub capacity: Option<usize>,
}

impl BufferConfig {
    /// The configured capacity, or [`DEFAULT_CAPACITY`] when unset.
    pub fn capacity(&self) -> Result<Capacity, BufferError> {
        Capacity::new(self.capacity.unwrap_or(DEFAULT_CAPACITY))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `"info"` or `"keel_core=trace"`.
    pub filter: Option<String>,
}

impl KeelConfig {
    /// Load the user config from [`KeelConfig::path`].
    ///
    /// A missing file (or an unknown home directory) yields the default config.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn buffer_capacity(&self) -> Result<Capacity, BufferError> {
        self.buffer
            .as_ref()
            .map_or_else(|| Capacity::new(DEFAULT_CAPACITY), BufferConfig::capacity)
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".keel").join("config.toml"))
}
