use crate::domain::value::CellValue;

/// Values for one appended spreadsheet row, positionally aligned to a
/// [`HeaderRow`](super::header_row::HeaderRow).
///
/// Only [`crate::domain::row_mapper`] builds these, so the length always matches the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputRow(Vec<CellValue>);

impl OutputRow {
    pub(crate) fn new(values: Vec<CellValue>) -> Self {
        OutputRow(values)
    }

    pub fn values(&self) -> &[CellValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
