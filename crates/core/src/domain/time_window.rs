use chrono::{DateTime, Duration, FixedOffset, NaiveTime};

/// Format used for the literal timestamps written to NRQL and to the sheet.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The `(begin, end)` pair shared by every report of a run.
///
/// Both ends are kept as literal strings: they are written verbatim into the
/// `SINCE ... UNTIL ...` clause and into the `beginTime`/`endTime` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    begin: String,
    end: String,
}

impl TimeWindow {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// The whole calendar day before `now`, in `now`'s offset.
    ///
    /// # Examples
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use nr_sheets_report_core::domain::time_window::TimeWindow;
    /// let now = FixedOffset::east_opt(7 * 3600)
    ///     .unwrap()
    ///     .with_ymd_and_hms(2022, 5, 18, 9, 30, 0)
    ///     .unwrap();
    /// let window = TimeWindow::previous_day(now);
    /// assert_eq!(window.begin(), "2022-05-17 00:00:00 +0700");
    /// assert_eq!(window.end(), "2022-05-17 23:59:00 +0700");
    /// ```
    pub fn previous_day(now: DateTime<FixedOffset>) -> Self {
        let offset = *now.offset();
        let today = now.date_naive();
        let day = today.pred_opt().unwrap_or(today);

        let at = |hour: u32, min: u32| {
            let local = day.and_time(NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default());
            let utc = local - Duration::seconds(offset.local_minus_utc().into());
            DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, offset)
                .format(TIMESTAMP_FORMAT)
                .to_string()
        };

        Self::new(at(0, 0), at(23, 59))
    }

    /// Picks each end independently: explicit override first, then the configured value,
    /// then the previous day relative to `now`.
    pub fn resolve(
        overrides: (Option<String>, Option<String>),
        configured: (Option<String>, Option<String>),
        now: DateTime<FixedOffset>,
    ) -> Self {
        let fallback = Self::previous_day(now);
        let (begin_override, end_override) = overrides;
        let (begin_configured, end_configured) = configured;

        Self {
            begin: begin_override
                .or(begin_configured)
                .unwrap_or(fallback.begin),
            end: end_override.or(end_configured).unwrap_or(fallback.end),
        }
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// NRQL clause restricting a query to this window.
    pub fn since_clause(&self) -> String {
        format!("SINCE '{}' UNTIL '{}'", self.begin, self.end)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.begin, self.end)
    }
}
