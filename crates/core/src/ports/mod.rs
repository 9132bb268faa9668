pub mod application_service;
pub mod command_handler;
pub mod metrics_source;
pub mod report_sheet;
pub mod routine;
