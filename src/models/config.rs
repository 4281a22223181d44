use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "colours.yaml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "COLOURS_CONFIG";

/// Choose the config file to load.
///
/// The `--config` flag wins over the [`CONFIG_ENV_VAR`] value; an empty
/// variable counts as unset. `None` means [`AppConfig::discover`] looks for
/// [`DEFAULT_CONFIG_FILE`].
pub fn config_path(flag: Option<PathBuf>, env_value: Option<String>) -> Option<PathBuf> {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Per-invocation settings from the command line; `None` keeps the
/// configured value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub resolution: Option<f32>,
    pub format: Option<OutputFormat>,
}

/// Application configuration loaded from colours.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sampling density (0.0..=1.0) used when the CLI does not override it
    #[serde(default = "default_resolution")]
    pub resolution: f32,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Worker threads for sampling and aggregation (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

fn default_resolution() -> f32 {
    0.25
}

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl AppConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            resolution = config.resolution,
            threads = config.threads,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load cleanly. Without one, `colours.yaml` in
    /// `dir` is used if present; a broken default file falls back to the
    /// built-in defaults with a warning.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let default_path: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if !default_path.is_file() {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        match Self::load_file(&default_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(resolution) = overrides.resolution {
            self.resolution = resolution;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.resolution) {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        Ok(())
    }

    /// Render as YAML (for `colours config`)
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            format: OutputFormat::default(),
            threads: 0,
        }
    }
}
