pub mod error;
pub mod nrql;
pub mod report;
pub mod row_mapper;
pub mod sheets;
pub mod time_window;
pub mod value;

// Re-export commonly used types
pub use error::{ReportError, ReportStage};
pub use report::ReportDefinition;
pub use time_window::TimeWindow;
