use serde_json::Value;

/// Ordered column names read from the first row of a report range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderRow(Vec<String>);

impl HeaderRow {
    /// Builds the header from the rows returned by a values read, keeping only the first row.
    /// Cells that are not strings are rendered as text, empty cells become empty names.
    pub fn from_value_rows(rows: Vec<Vec<Value>>) -> Self {
        let columns = rows
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|cell| match cell {
                Value::String(name) => name,
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();

        HeaderRow(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        HeaderRow(iter.into_iter().map(Into::into).collect())
    }
}
