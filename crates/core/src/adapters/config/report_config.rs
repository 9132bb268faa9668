use std::fmt::Debug;

use crate::domain::report::ReportDefinition;

#[derive(serde::Deserialize, Clone)]
pub struct ReportConfig {
    pub name: String,
    pub spreadsheet_id: String,
    pub range: String,
    pub account_id: i64,
    #[serde(default)]
    pub api_key: Option<String>,
    pub query: String,
}

impl Debug for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportConfig")
            .field("name", &self.name)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("account_id", &self.account_id)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl ReportConfig {
    /// Falls back to `default_api_key` when the report has no key of its own. A report left
    /// without any key keeps an empty one and fails validation before doing any I/O.
    pub fn to_definition(&self, default_api_key: Option<&str>) -> ReportDefinition {
        let api_key = self
            .api_key
            .as_deref()
            .or(default_api_key)
            .unwrap_or_default()
            .to_string();

        ReportDefinition {
            name: self.name.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            range: self.range.clone(),
            api_key,
            query: self.query.clone(),
            account_id: self.account_id,
        }
    }
}
