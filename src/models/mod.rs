pub mod config;
pub mod report;

pub use config::{
    config_path, AppConfig, OutputFormat, Overrides, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE,
};
pub use report::{AnalysisReport, ColourReport, VolumeReport};
