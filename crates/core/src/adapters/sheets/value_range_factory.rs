use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::domain::sheets::output_row::OutputRow;

pub trait ValueRangeFactory {
    fn from_rows(rows: &[OutputRow]) -> Self;
}

fn wrap_row(row: &OutputRow) -> Vec<Value> {
    row.values().iter().cloned().map(Value::from).collect()
}

impl ValueRangeFactory for ValueRange {
    fn from_rows(rows: &[OutputRow]) -> Self {
        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(rows.iter().map(wrap_row).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        row_mapper::map_record, sheets::header_row::HeaderRow, time_window::TimeWindow,
        value::{CellValue, ResultRecord},
    };
    use serde_json::json;

    fn row(rpcmethod: &str, rps: f64) -> OutputRow {
        map_record(
            &HeaderRow::from_iter(["rpcmethod", "RPS", "missing", "endTime"]),
            &ResultRecord::from_iter([
                ("rpcmethod", CellValue::from(rpcmethod)),
                ("RPS", CellValue::from(rps)),
            ]),
            &TimeWindow::new("b", "e"),
        )
    }

    // Test for ValueRange::from_rows([row]) -> one JSON array per row, nulls kept in place
    #[test]
    fn test_from_rows() {
        let value_range = ValueRange::from_rows(&[row("Play", 12.5), row("Pause", 1.0)]);
        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![
                vec![json!("Play"), json!(12.5), Value::Null, json!("e")],
                vec![json!("Pause"), json!(1.0), Value::Null, json!("e")],
            ]),
            "Values should keep row order and cell types"
        );
    }

    #[test]
    fn test_from_no_rows() {
        let value_range = ValueRange::from_rows(&[]);
        assert_eq!(value_range.values, Some(vec![]));
    }
}
