use error_stack::ResultExt;
use google_sheets4::api::{AppendValuesResponse, ValueRange};
use tracing::instrument;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError, SPREADSHEETS_SCOPE};

pub trait SpreadsheetAppend {
    fn append_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        value_range: ValueRange,
    ) -> impl std::future::Future<
        Output = error_stack::Result<AppendValuesResponse, SpreadsheetManagerError>,
    > + Send;
}

impl SpreadsheetAppend for SpreadsheetManager {
    #[instrument(skip(value_range))]
    async fn append_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<AppendValuesResponse, SpreadsheetManagerError> {
        // Non-2xx responses already come back as `google_sheets4::Error`, chained below.
        let (_, appended) = self
            .hub
            .spreadsheets()
            .values_append(value_range, spreadsheet_id, range)
            .value_input_option("USER_ENTERED")
            .insert_data_option("INSERT_ROWS")
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToAppendRange)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range))?;

        Ok(appended)
    }
}
