#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service account key file used to authenticate against the Sheets API.
    pub priv_key: Box<str>,
}
