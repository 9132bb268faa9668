use std::fmt::{Display, Formatter};

use crate::domain::time_window::TimeWindow;

/// An NRQL statement restricted to a [`TimeWindow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NrqlQuery(String);

impl NrqlQuery {
    /// Appends the window's `SINCE ... UNTIL ...` clause to a report query.
    ///
    /// # Examples
    /// ```
    /// use nr_sheets_report_core::domain::{nrql::NrqlQuery, time_window::TimeWindow};
    /// let window = TimeWindow::new("2022-05-17 00:00:00 +0700", "2022-05-17 23:59:00 +0700");
    /// let query = NrqlQuery::windowed("SELECT count(*) FROM Metric LIMIT 2000", &window);
    /// assert_eq!(
    ///     query.as_str(),
    ///     "SELECT count(*) FROM Metric LIMIT 2000 SINCE '2022-05-17 00:00:00 +0700' UNTIL '2022-05-17 23:59:00 +0700'"
    /// );
    /// ```
    pub fn windowed(template: &str, window: &TimeWindow) -> Self {
        NrqlQuery(format!("{} {}", template.trim_end(), window.since_clause()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NrqlQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
