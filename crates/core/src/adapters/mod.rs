pub mod config;
pub mod newrelic;
pub mod sheets;
