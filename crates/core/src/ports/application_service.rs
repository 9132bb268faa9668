use thiserror::Error;

use crate::domain::ReportError;

pub type ReportResult = error_stack::Result<(), ReportError>;

#[derive(Error, Debug)]
pub enum ApplicationServiceError {
    #[error("Report '{name}' not found")]
    ReportNotFound { name: String },
    #[error("Report '{name}' failed")]
    ReportFailed { name: String },
}

/// Outcome of a fan-out run, one entry per report in definition order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<(String, ReportResult)>,
}

impl RunSummary {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &error_stack::Report<ReportError>)> {
        self.results
            .iter()
            .filter_map(|(name, result)| result.as_ref().err().map(|report| (name.as_str(), report)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn success_count(&self) -> usize {
        self.results.len() - self.failure_count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

#[async_trait::async_trait]
pub trait ApplicationService: Send + Sync {
    async fn run_all_reports(&self, parallel: bool) -> RunSummary;

    async fn run_report_by_name(
        &self,
        name: &str,
    ) -> error_stack::Result<(), ApplicationServiceError>;

    fn list_available_reports(&self) -> Vec<String>;
}
