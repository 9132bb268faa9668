pub mod auth;
pub mod http_client;
pub mod report_sheet;
pub mod spreadsheet_append;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
pub mod value_range_factory;
