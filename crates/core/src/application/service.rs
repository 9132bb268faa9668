use crate::ports::application_service::{
    ApplicationService, ApplicationServiceError, ReportResult, RunSummary,
};
use crate::ports::routine::Routine;
use error_stack::{report, ResultExt};
use futures::future::join_all;
use tracing::{error, info, instrument, Instrument};

pub struct ReportApplicationService {
    routines: Vec<Box<dyn Routine>>,
}

impl ReportApplicationService {
    pub fn new(routines: Vec<Box<dyn Routine>>) -> Self {
        Self { routines }
    }

    async fn run_routine(routine: &dyn Routine, index: usize, len: usize) -> ReportResult {
        routine
            .run()
            .instrument(tracing::span!(
                tracing::Level::INFO,
                "report",
                report = routine.name(),
                index = index,
                len = len
            ))
            .await
    }
}

#[async_trait::async_trait]
impl ApplicationService for ReportApplicationService {
    #[instrument(skip(self))]
    async fn run_all_reports(&self, parallel: bool) -> RunSummary {
        let len = self.routines.len();

        let results = if parallel {
            info!("Running {} reports in parallel", len);

            let futures = self
                .routines
                .iter()
                .enumerate()
                .map(|(index, routine)| Self::run_routine(routine.as_ref(), index, len));

            join_all(futures).await
        } else {
            info!("Running {} reports sequentially", len);

            let mut results = Vec::with_capacity(len);
            for (index, routine) in self.routines.iter().enumerate() {
                results.push(Self::run_routine(routine.as_ref(), index, len).await);
            }
            results
        };

        let summary = RunSummary {
            results: self
                .routines
                .iter()
                .map(|routine| routine.name().to_string())
                .zip(results)
                .collect(),
        };

        info!("Report results:");
        for (name, result) in &summary.results {
            match result {
                Ok(()) => info!("✅ {}: OK", name),
                Err(report) => error!("❌ {}: {:?}", name, report),
            }
        }

        summary
    }

    #[instrument(skip(self))]
    async fn run_report_by_name(
        &self,
        name: &str,
    ) -> error_stack::Result<(), ApplicationServiceError> {
        let (index, routine) = self
            .routines
            .iter()
            .enumerate()
            .find(|(_, routine)| routine.name() == name)
            .ok_or_else(|| {
                report!(ApplicationServiceError::ReportNotFound {
                    name: name.to_string(),
                })
            })
            .attach_printable_lazy(|| {
                format!("Available reports: {}", self.list_available_reports().join(", "))
            })?;

        Self::run_routine(routine.as_ref(), index, self.routines.len())
            .await
            .change_context_lazy(|| ApplicationServiceError::ReportFailed {
                name: name.to_string(),
            })
    }

    fn list_available_reports(&self) -> Vec<String> {
        self.routines.iter().map(|r| r.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use crate::domain::{value::ResultRecord, ReportError, ReportStage};
    use std::sync::Arc;

    fn service(sheet: &Arc<FakeSheet>, metrics: &Arc<FakeMetrics>) -> ReportApplicationService {
        ReportApplicationService::new(
            ["play", "interactive", "infra"]
                .into_iter()
                .map(|name| Box::new(routine(definition(name), sheet, metrics)) as Box<dyn Routine>)
                .collect(),
        )
    }

    fn fixtures(fail_append_for: &str) -> (Arc<FakeSheet>, Arc<FakeMetrics>) {
        let sheet = Arc::new(FakeSheet {
            header: ["rpcmethod", "beginTime"].into_iter().collect(),
            fail_append_for: Some(fail_append_for.to_string()),
            ..FakeSheet::default()
        });
        let metrics = Arc::new(FakeMetrics::with_records(vec![ResultRecord::from_iter([(
            "rpcmethod",
            "Play",
        )])]));
        (sheet, metrics)
    }

    #[tokio::test]
    async fn test_one_failing_report_does_not_stop_the_others() {
        for parallel in [true, false] {
            let (sheet, metrics) = fixtures("interactive-sheet");

            let summary = service(&sheet, &metrics).run_all_reports(parallel).await;

            assert!(!summary.is_success());
            assert_eq!(summary.success_count(), 2);
            assert_eq!(summary.failure_count(), 1);

            let failures: Vec<_> = summary.failures().collect();
            assert_eq!(failures[0].0, "interactive");
            assert_eq!(
                failures[0].1.current_context(),
                &ReportError::transport(ReportStage::Appending)
            );

            let mut appended: Vec<_> = sheet.appended().into_iter().map(|(id, _, _)| id).collect();
            appended.sort();
            assert_eq!(appended, ["infra-sheet", "play-sheet"]);
        }
    }

    #[tokio::test]
    async fn test_results_keep_definition_order() {
        let (sheet, metrics) = fixtures("none");

        let summary = service(&sheet, &metrics).run_all_reports(true).await;

        assert!(summary.is_success());
        let names: Vec<_> = summary.results.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["play", "interactive", "infra"]);
    }

    #[tokio::test]
    async fn test_run_report_by_name() {
        let (sheet, metrics) = fixtures("infra-sheet");
        let service = service(&sheet, &metrics);

        service.run_report_by_name("play").await.unwrap();
        assert_eq!(sheet.appended().len(), 1);

        let error = service.run_report_by_name("infra").await.unwrap_err();
        assert!(matches!(
            error.current_context(),
            ApplicationServiceError::ReportFailed { name } if name == "infra"
        ));

        let error = service.run_report_by_name("missing").await.unwrap_err();
        assert!(matches!(
            error.current_context(),
            ApplicationServiceError::ReportNotFound { .. }
        ));
    }

    #[test]
    fn test_list_available_reports() {
        let (sheet, metrics) = fixtures("none");
        assert_eq!(
            service(&sheet, &metrics).list_available_reports(),
            ["play", "interactive", "infra"]
        );
    }
}
