use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde_json::{Map, Number, Value};

/// A single spreadsheet cell as produced by a telemetry query.
///
/// NRQL results are loosely typed: the shape of a record depends on the query, so values are
/// carried as a small tagged union instead of a concrete struct. Nested JSON (arrays, objects,
/// e.g. `percentile()` results) is kept as its compact JSON text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(value) => CellValue::Bool(value),
            Value::Number(value) => CellValue::Number(value),
            Value::String(value) => CellValue::String(value),
            nested @ (Value::Array(_) | Value::Object(_)) => CellValue::String(nested.to_string()),
        }
    }
}

impl From<CellValue> for Value {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Null => Value::Null,
            CellValue::Bool(value) => Value::Bool(value),
            CellValue::Number(value) => Value::Number(value),
            CellValue::String(value) => Value::String(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

/// Non-finite floats have no JSON representation and become [`CellValue::Null`].
impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::String(value) => write!(f, "{}", value),
        }
    }
}

/// One telemetry data point: column name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRecord(BTreeMap<String, CellValue>);

impl ResultRecord {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ResultRecord {
    fn from(map: Map<String, Value>) -> Self {
        ResultRecord(
            map.into_iter()
                .map(|(column, value)| (column, CellValue::from(value)))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for ResultRecord
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ResultRecord(
            iter.into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        )
    }
}
