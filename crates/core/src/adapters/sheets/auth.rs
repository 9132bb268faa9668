use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use crate::adapters::config::sheets_config::SpreadsheetConfig;

use super::{http_client::HttpsClient, spreadsheet_manager::SpreadsheetManagerError};

pub async fn auth(
    config: &SpreadsheetConfig,
    client: HttpsClient,
) -> error_stack::Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    SpreadsheetManagerError,
> {
    let priv_key_path = config.priv_key.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(SpreadsheetManagerError::FailedToAuthenticate)
        .attach_printable_lazy(|| {
            format!(
                "Could not read service account private key at '{}'. Please provide a valid service account private key to enable Google Sheets integration.",
                priv_key_path
            )
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::FailedToAuthenticate)
        .attach_printable("Could not create an authenticator")
}
