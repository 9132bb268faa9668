pub mod app_config;
pub mod newrelic_config;
pub mod report_config;
pub mod sheets_config;
pub mod telemetry_config;
pub mod window_config;
