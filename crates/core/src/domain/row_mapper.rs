//! Reshapes telemetry records into spreadsheet rows by column name.

use super::{
    sheets::{header_row::HeaderRow, output_row::OutputRow},
    time_window::TimeWindow,
    value::{CellValue, ResultRecord},
};

/// Column filled with the window's begin literal instead of a record value.
pub const BEGIN_TIME_COLUMN: &str = "beginTime";
/// Column filled with the window's end literal instead of a record value.
pub const END_TIME_COLUMN: &str = "endTime";

pub fn map_record(header: &HeaderRow, record: &ResultRecord, window: &TimeWindow) -> OutputRow {
    let values = header
        .iter()
        .map(|column| match column {
            END_TIME_COLUMN => CellValue::from(window.end()),
            BEGIN_TIME_COLUMN => CellValue::from(window.begin()),
            column => record.get(column).cloned().unwrap_or_default(),
        })
        .collect();

    OutputRow::new(values)
}

pub fn map_records(
    header: &HeaderRow,
    records: &[ResultRecord],
    window: &TimeWindow,
) -> Vec<OutputRow> {
    records
        .iter()
        .map(|record| map_record(header, record, window))
        .collect()
}
