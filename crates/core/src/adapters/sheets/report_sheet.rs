use error_stack::ResultExt;
use google_sheets4::api::ValueRange;

use crate::domain::sheets::{header_row::HeaderRow, output_row::OutputRow};
use crate::ports::report_sheet::{ReportSheet, ReportSheetError};

use super::{
    spreadsheet_append::SpreadsheetAppend, spreadsheet_manager::SpreadsheetManager,
    spreadsheet_read::SpreadsheetRead, value_range_factory::ValueRangeFactory,
};

#[async_trait::async_trait]
impl ReportSheet for SpreadsheetManager {
    async fn read_header(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> error_stack::Result<HeaderRow, ReportSheetError> {
        let value_range = self
            .read_range(spreadsheet_id, range)
            .await
            .change_context(ReportSheetError::ReadHeaderError)?;

        Ok(HeaderRow::from_value_rows(
            value_range.values.unwrap_or_default(),
        ))
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[OutputRow],
    ) -> error_stack::Result<(), ReportSheetError> {
        self.append_range(spreadsheet_id, range, ValueRange::from_rows(rows))
            .await
            .map(|response| {
                tracing::debug!(
                    updated_range = ?response.updates.and_then(|updates| updates.updated_range),
                    "Appended {} rows",
                    rows.len()
                )
            })
            .change_context(ReportSheetError::AppendRowsError)
    }
}
