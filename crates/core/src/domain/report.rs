use std::fmt::Debug;

use super::{error::ReportError, time_window::TimeWindow};

/// One source query and one destination range.
///
/// `range` is both where the header row is read from and where new rows are appended.
#[derive(Clone, PartialEq, Eq)]
pub struct ReportDefinition {
    pub name: String,
    pub spreadsheet_id: String,
    pub range: String,
    pub api_key: String,
    pub query: String,
    pub account_id: i64,
}

impl Debug for ReportDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportDefinition")
            .field("name", &self.name)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("api_key", &"<redacted>")
            .field("query", &self.query)
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl ReportDefinition {
    /// Checks every field needed before the first network call.
    ///
    /// Returns the first empty field, in the order range, spreadsheet id, API key, query,
    /// begin time, end time.
    pub fn validate(&self, window: &TimeWindow) -> Result<(), ReportError> {
        let required: [(&'static str, &str); 6] = [
            ("range", self.range.as_str()),
            ("spreadsheet_id", self.spreadsheet_id.as_str()),
            ("api_key", self.api_key.as_str()),
            ("query", self.query.as_str()),
            ("begin_time", window.begin()),
            ("end_time", window.end()),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ReportError::config(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str) -> ReportDefinition {
        ReportDefinition {
            name: name.to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            range: "Play GRPC Report!A1:F1".to_string(),
            api_key: "NRAK-TEST".to_string(),
            query: "SELECT count(*) FROM Metric FACET rpcmethod".to_string(),
            account_id: 42,
        }
    }

    fn window() -> TimeWindow {
        TimeWindow::new("2022-05-17 00:00:00 +0700", "2022-05-17 23:59:00 +0700")
    }

    #[test]
    fn test_complete_definition_is_valid() {
        assert_eq!(definition("play").validate(&window()), Ok(()));
    }

    #[test]
    fn test_each_empty_field_is_reported() {
        let cases: [(&str, fn(&mut ReportDefinition)); 4] = [
            ("range", |d| d.range.clear()),
            ("spreadsheet_id", |d| d.spreadsheet_id.clear()),
            ("api_key", |d| d.api_key = "   ".to_string()),
            ("query", |d| d.query.clear()),
        ];

        for (field, clear) in cases {
            let mut report = definition("play");
            clear(&mut report);
            assert_eq!(
                report.validate(&window()),
                Err(ReportError::config(field)),
                "Clearing {} should fail validation",
                field
            );
        }
    }

    #[test]
    fn test_empty_window_is_reported() {
        let report = definition("play");
        assert_eq!(
            report.validate(&TimeWindow::new("", "x")),
            Err(ReportError::config("begin_time"))
        );
        assert_eq!(
            report.validate(&TimeWindow::new("x", "")),
            Err(ReportError::config("end_time"))
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", definition("play"));
        assert!(!debug.contains("NRAK-TEST"));
        assert!(debug.contains("<redacted>"));
    }
}
