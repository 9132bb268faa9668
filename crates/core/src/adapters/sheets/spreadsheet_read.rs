use error_stack::ResultExt;
use google_sheets4::api::ValueRange;
use tracing::instrument;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError, SPREADSHEETS_SCOPE};

pub trait SpreadsheetRead {
    fn read_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> impl std::future::Future<Output = error_stack::Result<ValueRange, SpreadsheetManagerError>>
           + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> error_stack::Result<ValueRange, SpreadsheetManagerError> {
        let (response, value_range) = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id, range)
            .major_dimension("ROWS")
            .add_scope(SPREADSHEETS_SCOPE)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        tracing::debug!(status = %response.status(), "Read range {}", range);

        Ok(value_range)
    }
}
