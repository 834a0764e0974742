use crate::error::{FrameError, Result};

use super::core::DataFrame;
use super::series::Series;

/// Which axis an operation runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl DataFrame {
    /// Reorder rows by index label, or columns by column name. Sorting one
    /// axis never touches the other: a column sort moves whole columns, a
    /// row sort moves whole rows with their labels.
    pub fn sort_index(&self, axis: Axis, ascending: bool) -> DataFrame {
        match axis {
            Axis::Rows => {
                let order = self.index.sort_order(ascending);
                DataFrame {
                    index: self.index.take(&order),
                    columns: self.columns.clone(),
                    data: self.data.iter().map(|s| s.take(&order)).collect(),
                }
            }
            Axis::Columns => {
                let mut order: Vec<usize> = (0..self.columns.len()).collect();
                order.sort_by(|&a, &b| self.columns[a].cmp(&self.columns[b]));
                if !ascending {
                    order.reverse();
                }
                DataFrame {
                    index: self.index.clone(),
                    columns: order.iter().map(|&i| self.columns[i].clone()).collect(),
                    data: order.iter().map(|&i| self.data[i].clone()).collect(),
                }
            }
        }
    }

    /// Sort rows by a column's values. Missing float values sort to the end
    /// in either direction.
    pub fn sort_by(&self, column: &str, ascending: bool) -> Result<DataFrame> {
        let col_idx = self
            .columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| FrameError::ColumnNotFound(column.to_string()))?;

        let mut order: Vec<usize> = (0..self.len()).collect();
        match &self.data[col_idx] {
            Series::Int64(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Series::Bool(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Series::Utf8(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Series::Datetime(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Series::Categorical(c) => order.sort_by(|&a, &b| c.get(a).cmp(&c.get(b))),
            Series::Float64(v) => {
                order.sort_by(|&a, &b| v[a].total_cmp(&v[b]));
                if !ascending {
                    order.reverse();
                }
                // stable: missing rows move to the end, the rest keep order
                order.sort_by_key(|&i| v[i].is_nan());
                return Ok(self.reordered(&order));
            }
        }
        if !ascending {
            order.reverse();
        }
        Ok(self.reordered(&order))
    }

    fn reordered(&self, order: &[usize]) -> DataFrame {
        DataFrame {
            index: self.index.take(order),
            columns: self.columns.clone(),
            data: self.data.iter().map(|s| s.take(order)).collect(),
        }
    }
}
