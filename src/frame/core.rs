use crate::error::{FrameError, Result};

use super::index::Index;
use super::series::Series;
use super::value::{Cell, DType};

/// A two-dimensional labeled table: named columns of equal length sharing a
/// common row index.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    pub index: Index,
    pub columns: Vec<String>,
    pub data: Vec<Series>,
}

/// One column source for heterogeneous construction: either a full column or
/// a scalar broadcast to the common row count.
#[derive(Debug, Clone)]
pub enum ColumnSource {
    Series(Series),
    Scalar(Cell),
}

impl From<Series> for ColumnSource {
    fn from(s: Series) -> Self {
        ColumnSource::Series(s)
    }
}

impl From<Cell> for ColumnSource {
    fn from(c: Cell) -> Self {
        ColumnSource::Scalar(c)
    }
}

impl DataFrame {
    /// Build a frame with the default positional index.
    ///
    /// Panics when the columns do not share one length.
    pub fn new(columns: Vec<(String, Series)>) -> Self {
        let len = columns.first().map(|(_, s)| s.len()).unwrap_or(0);
        Self::with_index(Index::range(len), columns)
    }

    /// Build a frame over an explicit row index.
    ///
    /// Panics when a column's length disagrees with the index.
    pub fn with_index(index: Index, columns: Vec<(String, Series)>) -> Self {
        for (name, series) in &columns {
            if series.len() != index.len() {
                panic!(
                    "all columns must share one length: column '{}' has {} rows, expected {}",
                    name,
                    series.len(),
                    index.len()
                );
            }
        }

        let (names, series): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        DataFrame {
            index,
            columns: names,
            data: series,
        }
    }

    /// Build a frame from heterogeneous column sources. Scalar sources are
    /// broadcast to the row count shared by the full columns.
    pub fn from_columns(columns: Vec<(String, ColumnSource)>) -> Result<Self> {
        let len = columns
            .iter()
            .find_map(|(_, src)| match src {
                ColumnSource::Series(s) => Some(s.len()),
                ColumnSource::Scalar(_) => None,
            })
            .ok_or(FrameError::ScalarOnlyColumns)?;

        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());
        for (name, src) in columns {
            let series = match src {
                ColumnSource::Series(s) => {
                    if s.len() != len {
                        return Err(FrameError::LengthMismatch {
                            column: name,
                            expected: len,
                            actual: s.len(),
                        });
                    }
                    s
                }
                ColumnSource::Scalar(cell) => Series::full(cell, len),
            };
            names.push(name);
            data.push(series);
        }

        Ok(DataFrame {
            index: Index::range(len),
            columns: names,
            data,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.columns.len())
    }

    /// Column names paired with their dtypes, in column order.
    pub fn dtypes(&self) -> Vec<(String, DType)> {
        self.columns
            .iter()
            .cloned()
            .zip(self.data.iter().map(Series::dtype))
            .collect()
    }

    /// First `n` rows, labels preserved. `n` clamps to the row count.
    pub fn head(&self, n: usize) -> DataFrame {
        self.slice_rows(0..n.min(self.len()))
    }

    /// Last `n` rows, labels preserved. `n` clamps to the row count.
    pub fn tail(&self, n: usize) -> DataFrame {
        self.slice_rows(self.len().saturating_sub(n)..self.len())
    }
}
