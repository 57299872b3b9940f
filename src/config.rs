use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::aggregate::DEFAULT_TOP_N;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field is optional in the file.
///
/// ```json
/// {
///   "dataset_path": "Medicine_Details.csv",
///   "default_min_excellent": 30,
///   "top_n": 10,
///   "credentials": { "admin": "admin123" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Dataset loaded when the dashboard opens.
    pub dataset_path: PathBuf,
    /// Initial position of the minimum excellent review slider.
    pub default_min_excellent: f64,
    /// Length of the manufacturer and top-rated rankings.
    pub top_n: usize,
    /// username → password.
    pub credentials: BTreeMap<String, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("Medicine_Details.csv"),
            default_min_excellent: 30.0,
            top_n: DEFAULT_TOP_N,
            credentials: BTreeMap::from([("admin".to_string(), "admin123".to_string())]),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise defaults. A broken file is
    /// logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("{} not found, using default config", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("{e}; falling back to default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.default_min_excellent) {
            return Err(ConfigError::Invalid(format!(
                "default_min_excellent must be within 0..=100, got {}",
                self.default_min_excellent
            )));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be at least 1".into()));
        }
        if self.credentials.is_empty() {
            return Err(ConfigError::Invalid("credentials must not be empty".into()));
        }
        Ok(())
    }
}
