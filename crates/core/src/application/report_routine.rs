use std::fmt::Debug;
use std::sync::Arc;

use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::domain::{
    nrql::{GraphQlRequest, NrqlQuery},
    report::ReportDefinition,
    row_mapper::map_records,
    sheets::{header_row::HeaderRow, output_row::OutputRow},
    value::ResultRecord,
    ReportError, ReportStage, TimeWindow,
};
use crate::ports::{metrics_source::MetricsSource, report_sheet::ReportSheet, routine::Routine};

/// Reads the header of a report range, runs its NRQL query over the run's window and appends
/// one row per result.
pub struct ReportRoutine {
    definition: ReportDefinition,
    window: Arc<TimeWindow>,
    sheet: Arc<dyn ReportSheet>,
    metrics: Arc<dyn MetricsSource>,
}

impl Debug for ReportRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportRoutine")
            .field("definition", &self.definition)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl ReportRoutine {
    pub fn new(
        definition: ReportDefinition,
        window: Arc<TimeWindow>,
        sheet: Arc<dyn ReportSheet>,
        metrics: Arc<dyn MetricsSource>,
    ) -> Self {
        Self {
            definition,
            window,
            sheet,
            metrics,
        }
    }

    pub fn build_request(&self) -> GraphQlRequest {
        let query = NrqlQuery::windowed(&self.definition.query, &self.window);
        GraphQlRequest::nrql(&query, self.definition.account_id)
    }

    #[instrument(skip(self))]
    async fn read_header(&self) -> error_stack::Result<HeaderRow, ReportError> {
        self.sheet
            .read_header(&self.definition.spreadsheet_id, &self.definition.range)
            .await
            .change_context(ReportError::transport(ReportStage::ReadingHeader))
            .attach_printable_lazy(|| {
                format!(
                    "Spreadsheet {} range {}",
                    self.definition.spreadsheet_id, self.definition.range
                )
            })
    }

    #[instrument(skip(self))]
    async fn fetch_records(&self) -> error_stack::Result<Vec<ResultRecord>, ReportError> {
        self.metrics
            .fetch_results(&self.definition.api_key, &self.build_request())
            .await
            .change_context(ReportError::transport(ReportStage::Fetching))
            .attach_printable_lazy(|| format!("Account {}", self.definition.account_id))
    }

    #[instrument(skip(self, rows))]
    async fn append_rows(&self, rows: &[OutputRow]) -> error_stack::Result<(), ReportError> {
        self.sheet
            .append_rows(&self.definition.spreadsheet_id, &self.definition.range, rows)
            .await
            .change_context(ReportError::transport(ReportStage::Appending))
            .attach_printable_lazy(|| {
                format!(
                    "Spreadsheet {} range {}",
                    self.definition.spreadsheet_id, self.definition.range
                )
            })
    }
}

#[async_trait::async_trait]
impl Routine for ReportRoutine {
    fn name(&self) -> &str {
        &self.definition.name
    }

    #[instrument(skip(self), name = "ReportRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), ReportError> {
        tracing::info!("Report: 🔎 Validating '{}'", self.definition.name);
        self.definition
            .validate(&self.window)
            .map_err(|error| report!(error))?;

        tracing::info!("Report: 📋 Reading header from '{}'", self.definition.range);
        let header = self.read_header().await?;
        if header.is_empty() {
            tracing::warn!("Report: header row of '{}' is empty", self.definition.range);
        }

        tracing::info!(
            "Report: ☁️  Querying account {} for {}",
            self.definition.account_id,
            self.window
        );
        let records = self.fetch_records().await?;

        tracing::info!(
            "Report: 🧮 Mapping {} records onto {} columns",
            records.len(),
            header.len()
        );
        let rows = map_records(&header, &records, &self.window);

        if rows.is_empty() {
            tracing::info!("Report: nothing to append");
            return Ok(());
        }

        tracing::info!("Report: 📝 Appending {} rows", rows.len());
        self.append_rows(&rows).await
    }
}
