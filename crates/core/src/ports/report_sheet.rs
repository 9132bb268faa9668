use thiserror::Error;

use crate::domain::sheets::{header_row::HeaderRow, output_row::OutputRow};

#[derive(Error, Debug)]
pub enum ReportSheetError {
    #[error("Failed to read header row from sheet")]
    ReadHeaderError,
    #[error("Failed to append rows to sheet")]
    AppendRowsError,
}

/// The spreadsheet side of a report: where the header comes from and where rows go.
#[async_trait::async_trait]
pub trait ReportSheet: Send + Sync {
    /// Reads the first row of `range`. An empty range yields an empty header.
    async fn read_header(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> error_stack::Result<HeaderRow, ReportSheetError>;

    /// Appends `rows` after the table found at `range`, inserting new rows.
    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[OutputRow],
    ) -> error_stack::Result<(), ReportSheetError>;
}
