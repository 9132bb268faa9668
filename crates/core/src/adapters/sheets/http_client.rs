use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use super::spreadsheet_manager::SpreadsheetManagerError;

pub type HttpsClient = hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

pub fn http_client() -> error_stack::Result<HttpsClient, SpreadsheetManagerError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SpreadsheetManagerError::FailedToBuildClient)
        .attach_printable("Failed to load native root certificates")?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_or_reports_context() {
        match http_client() {
            Ok(_) => {}
            Err(report) => assert!(matches!(
                report.current_context(),
                SpreadsheetManagerError::FailedToBuildClient
            )),
        }
    }
}
