//! Application configuration
//!
//! One file, RON or JSON (picked by extension), with every section
//! optional. `COUNTERPICK_CONFIG` names the file; without it the defaults
//! apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::counters::ScoringLimits;
use crate::logging::TracingConfig;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "COUNTERPICK_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("RON error in {path}: {source}")]
    Ron {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("unsupported config format '{0}' (expected .ron or .json)")]
    UnsupportedFormat(String),
}

/// Where the catalog data files live. Explicit file paths override the
/// default names inside `dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub heroes: Option<PathBuf>,
    pub counters: Option<PathBuf>,
    pub items: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            heroes: None,
            counters: None,
            items: None,
        }
    }
}

impl DataPaths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn heroes_path(&self) -> PathBuf {
        self.heroes.clone().unwrap_or_else(|| self.dir.join("heroes.json"))
    }

    pub fn counters_path(&self) -> PathBuf {
        self.counters
            .clone()
            .unwrap_or_else(|| self.dir.join("counters.json"))
    }

    pub fn items_path(&self) -> PathBuf {
        self.items.clone().unwrap_or_else(|| self.dir.join("items.json"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 50051,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataPaths,
    pub server: ServerConfig,
    pub logging: TracingConfig,
    pub scoring: ScoringLimits,
}

impl AppConfig {
    /// Parse a config file; the extension picks the format
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if ext != "ron" && ext != "json" {
            return Err(ConfigError::UnsupportedFormat(shown));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        let config = if ext == "ron" {
            ron::from_str(&content).map_err(|source| ConfigError::Ron {
                path: shown.clone(),
                source,
            })?
        } else {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: shown.clone(),
                source,
            })?
        };
        debug!(path = %shown, "config loaded");
        Ok(config)
    }

    /// File named by `COUNTERPICK_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}
