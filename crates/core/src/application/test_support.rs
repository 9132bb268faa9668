//! In-memory port implementations for pipeline and orchestrator tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use error_stack::{report, ResultExt};

use crate::domain::{
    nrql::GraphQlRequest,
    report::ReportDefinition,
    sheets::{header_row::HeaderRow, output_row::OutputRow},
    value::ResultRecord,
    TimeWindow,
};
use crate::ports::{
    metrics_source::{MetricsSource, MetricsSourceError},
    report_sheet::{ReportSheet, ReportSheetError},
};

use super::report_routine::ReportRoutine;

pub const BEGIN: &str = "2022-05-17 00:00:00 +0700";
pub const END: &str = "2022-05-17 23:59:00 +0700";

pub fn window() -> Arc<TimeWindow> {
    Arc::new(TimeWindow::new(BEGIN, END))
}

pub fn definition(name: &str) -> ReportDefinition {
    ReportDefinition {
        name: name.to_string(),
        spreadsheet_id: format!("{}-sheet", name),
        range: format!("{} Report!A1:D1", name),
        api_key: "NRAK-TEST".to_string(),
        query: "SELECT rate(sum(x), 1 second) AS 'RPS' FROM Metric FACET rpcmethod".to_string(),
        account_id: 3221984,
    }
}

#[derive(Debug, Default)]
pub struct FakeSheet {
    pub header: HeaderRow,
    pub fail_read_for: Option<String>,
    pub fail_append_for: Option<String>,
    pub reads: AtomicUsize,
    pub appended: Mutex<Vec<(String, String, Vec<OutputRow>)>>,
}

impl FakeSheet {
    pub fn with_header<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: HeaderRow::from_iter(columns),
            ..Self::default()
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn appended(&self) -> Vec<(String, String, Vec<OutputRow>)> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ReportSheet for FakeSheet {
    async fn read_header(
        &self,
        spreadsheet_id: &str,
        _range: &str,
    ) -> error_stack::Result<HeaderRow, ReportSheetError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_read_for.as_deref() == Some(spreadsheet_id) {
            return Err(report!(ReportSheetError::ReadHeaderError));
        }
        Ok(self.header.clone())
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[OutputRow],
    ) -> error_stack::Result<(), ReportSheetError> {
        if self.fail_append_for.as_deref() == Some(spreadsheet_id) {
            return Err(report!(ReportSheetError::AppendRowsError))
                .attach_printable("Server response: 403 PERMISSION_DENIED");
        }
        self.appended.lock().unwrap().push((
            spreadsheet_id.to_string(),
            range.to_string(),
            rows.to_vec(),
        ));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeMetrics {
    pub records: Vec<ResultRecord>,
    pub fail: bool,
    pub requests: Mutex<Vec<(String, GraphQlRequest)>>,
}

impl FakeMetrics {
    pub fn with_records(records: Vec<ResultRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, GraphQlRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MetricsSource for FakeMetrics {
    async fn fetch_results(
        &self,
        api_key: &str,
        request: &GraphQlRequest,
    ) -> error_stack::Result<Vec<ResultRecord>, MetricsSourceError> {
        self.requests
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        if self.fail {
            return Err(report!(MetricsSourceError::FetchError));
        }
        Ok(self.records.clone())
    }
}

pub fn routine(
    definition: ReportDefinition,
    sheet: &Arc<FakeSheet>,
    metrics: &Arc<FakeMetrics>,
) -> ReportRoutine {
    ReportRoutine::new(
        definition,
        window(),
        Arc::clone(sheet) as Arc<dyn ReportSheet>,
        Arc::clone(metrics) as Arc<dyn MetricsSource>,
    )
}
