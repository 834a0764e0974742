use std::ops::Range;

use crate::error::{FrameError, Result};

use super::core::DataFrame;
use super::index::Label;
use super::series::Series;
use super::value::Cell;

/// A single-row cross-section: the row's label plus one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: Cell,
    pub columns: Vec<String>,
    pub cells: Vec<Cell>,
}

impl DataFrame {
    /// Single column by name.
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|pos| &self.data[pos])
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    /// Column subset in the given order, row index preserved.
    pub fn select(&self, cols: &[&str]) -> Result<DataFrame> {
        let mut names = Vec::with_capacity(cols.len());
        let mut data = Vec::with_capacity(cols.len());
        for col in cols {
            let pos = self
                .columns
                .iter()
                .position(|c| c == col)
                .ok_or_else(|| FrameError::ColumnNotFound(col.to_string()))?;
            names.push(self.columns[pos].clone());
            data.push(self.data[pos].clone());
        }
        Ok(DataFrame {
            index: self.index.clone(),
            columns: names,
            data,
        })
    }

    /// Positional row slice `[start, end)`, clamped to the row count.
    /// Rows keep their original labels.
    pub fn slice_rows(&self, range: Range<usize>) -> DataFrame {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let order: Vec<usize> = (start..end).collect();
        DataFrame {
            index: self.index.take(&order),
            columns: self.columns.clone(),
            data: self.data.iter().map(|s| s.take(&order)).collect(),
        }
    }

    /// Cross-section of one row by index label.
    pub fn row<L: Into<Label>>(&self, label: L) -> Result<Row> {
        let label = label.into();
        let pos = self.index.position(&label)?;
        Ok(Row {
            name: self.index.label(pos),
            columns: self.columns.clone(),
            cells: self.data.iter().map(|s| s.get(pos)).collect(),
        })
    }
}
