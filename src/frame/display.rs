use std::fmt;

use chrono::NaiveTime;

use super::core::DataFrame;
use super::index::{Index, Label};
use super::select::Row;
use super::series::Series;
use super::value::{Cell, DType};

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str("NaN"),
            Cell::Int64(v) => write!(f, "{v}"),
            Cell::Bool(v) => write!(f, "{v}"),
            Cell::Utf8(s) | Cell::Categorical(s) => f.write_str(s),
            Cell::Float64(v) => {
                if v.is_nan() {
                    f.write_str("NaN")
                } else if v.fract() == 0.0 && v.abs() < 1.0e15 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v:.6}")
                }
            }
            // midnight timestamps render as bare dates
            Cell::Datetime(ts) => {
                if ts.time() == NaiveTime::MIN {
                    write!(f, "{}", ts.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{v}"),
            Label::Utf8(s) => write!(f, "'{s}'"),
            Label::Datetime(ts) => write!(f, "{}", Cell::Datetime(*ts)),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Series([], dtype: {})", self.dtype());
        }
        let labels: Vec<String> = (0..self.len()).map(|i| i.to_string()).collect();
        let values: Vec<String> = (0..self.len()).map(|i| self.get(i).to_string()).collect();
        let mut lines = aligned_lines(&labels, &values);
        lines.push(format!("dtype: {}", self.dtype()));
        f.write_str(&lines.join("\n"))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.labels().iter().map(Cell::to_string).collect();
        write!(f, "Index([{}], dtype: {})", rendered.join(", "), self.dtype_name())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.cells.iter().map(Cell::to_string).collect();
        let mut lines = aligned_lines(&self.columns, &values);
        lines.push(format!("name: {}", self.name));
        f.write_str(&lines.join("\n"))
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return f.write_str("Empty DataFrame");
        }

        let labels: Vec<String> = self.index.labels().iter().map(Cell::to_string).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        // per-column rendered cells and widths
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(self.columns.len());
        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        for (name, series) in self.columns.iter().zip(&self.data) {
            let rendered: Vec<String> = (0..series.len()).map(|i| series.get(i).to_string()).collect();
            let width = rendered
                .iter()
                .map(String::len)
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0);
            cells.push(rendered);
            widths.push(width);
        }

        let mut lines = Vec::with_capacity(self.len() + 1);
        let mut header = " ".repeat(label_width);
        for (name, &width) in self.columns.iter().zip(&widths) {
            header.push_str(&format!("  {name:>width$}"));
        }
        lines.push(header);

        for (row, label) in labels.iter().enumerate() {
            let mut line = format!("{label:<label_width$}");
            for (col, &width) in cells.iter().zip(&widths) {
                line.push_str(&format!("  {:>width$}", col[row]));
            }
            lines.push(line);
        }

        f.write_str(&lines.join("\n"))
    }
}

/// Two left/right-aligned columns of text, one line per entry.
fn aligned_lines(labels: &[String], values: &[String]) -> Vec<String> {
    let lw = labels.iter().map(String::len).max().unwrap_or(0);
    let vw = values.iter().map(String::len).max().unwrap_or(0);
    labels
        .iter()
        .zip(values)
        .map(|(l, v)| format!("{l:<lw$}  {v:>vw$}"))
        .collect()
}
