use config::{Config, Environment, File};
use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::instrument;

use crate::domain::report::ReportDefinition;

use super::{
    newrelic_config::NewRelicConfig, report_config::ReportConfig,
    sheets_config::SpreadsheetConfig, telemetry_config::TelemetryConfig,
    window_config::WindowConfig,
};

pub const DEFAULT_CONFIG_PATH: &str = "Config";
pub const ENV_PREFIX: &str = "NR_SHEETS";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Error reading config file '{0}'")]
    ReadError(String),
    #[error("Invalid config, field path: {0}")]
    InvalidField(String),
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    #[serde(default)]
    pub newrelic: NewRelicConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub reports: Vec<ReportConfig>,
}

impl AppConfig {
    /// Loads the file named by `CONFIG_PATH` (default `Config`, any format the `config` crate
    /// knows), with `NR_SHEETS__SECTION__KEY` environment variables taking precedence.
    #[instrument]
    pub fn load() -> error_stack::Result<Self, ConfigLoadError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    #[instrument]
    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .add_source(File::with_name(config_path))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .change_context_lazy(|| ConfigLoadError::ReadError(config_path.to_string()))?;

        Self::from_config(config)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))
    }

    pub fn from_config(config: Config) -> error_stack::Result<Self, ConfigLoadError> {
        serde_path_to_error::deserialize(config).map_err(|error| {
            let path = error.path().to_string();
            report!(ConfigLoadError::InvalidField(path))
                .attach_printable(error.into_inner().to_string())
                .attach_printable("Make sure all required fields are present in the configuration file.")
        })
    }

    /// Report definitions in file order, with the shared API key applied.
    pub fn report_definitions(&self) -> Vec<ReportDefinition> {
        let default_api_key = self.newrelic.api_key.as_deref();
        self.reports
            .iter()
            .map(|report| report.to_definition(default_api_key))
            .collect()
    }
}
