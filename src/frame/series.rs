use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;

use super::value::{Cell, DType};

/// A one-dimensional typed column.
///
/// Each variant stores its values densely. `Float64` is the only nullable
/// dtype: missing values are carried as `f64::NAN`, and the nullable
/// constructor (`From<Vec<Option<f64>>>`) lowers `None` to that marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
    Utf8(Vec<String>),
    Datetime(Vec<NaiveDateTime>),
    Categorical(Categorical),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Int64(v) => v.len(),
            Series::Float64(v) => v.len(),
            Series::Bool(v) => v.len(),
            Series::Utf8(v) => v.len(),
            Series::Datetime(v) => v.len(),
            Series::Categorical(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            Series::Int64(_) => DType::Int64,
            Series::Float64(_) => DType::Float64,
            Series::Bool(_) => DType::Bool,
            Series::Utf8(_) => DType::Utf8,
            Series::Datetime(_) => DType::Datetime,
            Series::Categorical(_) => DType::Categorical,
        }
    }

    /// Build a categorical column from raw labels. The category set is the
    /// sorted, deduplicated label set.
    pub fn categorical(values: &[&str]) -> Series {
        Series::Categorical(Categorical::new(
            values.iter().map(|s| s.to_string()).collect(),
        ))
    }

    /// Broadcast a single value to a column of the given length.
    pub fn full(value: Cell, len: usize) -> Series {
        match value {
            Cell::Null => Series::Float64(vec![f64::NAN; len]),
            Cell::Int64(v) => Series::Int64(vec![v; len]),
            Cell::Float64(v) => Series::Float64(vec![v; len]),
            Cell::Bool(v) => Series::Bool(vec![v; len]),
            Cell::Utf8(s) => Series::Utf8(vec![s; len]),
            Cell::Datetime(ts) => Series::Datetime(vec![ts; len]),
            Cell::Categorical(s) => Series::Categorical(Categorical::new(vec![s; len])),
        }
    }

    /// Value at position `i` with the static type erased.
    pub fn get(&self, i: usize) -> Cell {
        match self {
            Series::Int64(v) => Cell::Int64(v[i]),
            Series::Float64(v) => Cell::Float64(v[i]),
            Series::Bool(v) => Cell::Bool(v[i]),
            Series::Utf8(v) => Cell::Utf8(v[i].clone()),
            Series::Datetime(v) => Cell::Datetime(v[i]),
            Series::Categorical(c) => Cell::Categorical(c.get(i).to_string()),
        }
    }

    /// Whether the value at position `i` is missing. Only `Float64` columns
    /// can carry missing values.
    pub fn is_null(&self, i: usize) -> bool {
        match self {
            Series::Float64(v) => v[i].is_nan(),
            _ => false,
        }
    }

    pub fn null_count(&self) -> usize {
        match self {
            Series::Float64(v) => v.iter().filter(|x| x.is_nan()).count(),
            _ => 0,
        }
    }

    /// Gather rows by position, in order.
    pub fn take(&self, indices: &[usize]) -> Series {
        match self {
            Series::Int64(v) => Series::Int64(indices.iter().map(|&i| v[i]).collect()),
            Series::Float64(v) => Series::Float64(indices.iter().map(|&i| v[i]).collect()),
            Series::Bool(v) => Series::Bool(indices.iter().map(|&i| v[i]).collect()),
            Series::Utf8(v) => Series::Utf8(indices.iter().map(|&i| v[i].clone()).collect()),
            Series::Datetime(v) => Series::Datetime(indices.iter().map(|&i| v[i]).collect()),
            Series::Categorical(c) => Series::Categorical(c.take(indices)),
        }
    }

    /// The column widened to `f64`, or `None` for non-numeric dtypes.
    /// Float columns keep their NaN markers.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            Series::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            Series::Float64(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<Vec<i64>> for Series {
    fn from(v: Vec<i64>) -> Self {
        Series::Int64(v)
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Series::Float64(v)
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(v: Vec<Option<f64>>) -> Self {
        Series::Float64(v.into_iter().map(|x| x.unwrap_or(f64::NAN)).collect())
    }
}

impl From<Vec<bool>> for Series {
    fn from(v: Vec<bool>) -> Self {
        Series::Bool(v)
    }
}

impl From<Vec<&str>> for Series {
    fn from(v: Vec<&str>) -> Self {
        Series::Utf8(v.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for Series {
    fn from(v: Vec<String>) -> Self {
        Series::Utf8(v)
    }
}

impl From<Vec<NaiveDateTime>> for Series {
    fn from(v: Vec<NaiveDateTime>) -> Self {
        Series::Datetime(v)
    }
}

/// A fixed label set plus per-row codes into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    categories: Vec<String>,
    codes: Vec<u32>,
}

impl Categorical {
    pub fn new(values: Vec<String>) -> Self {
        let categories: Vec<String> = values
            .iter()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let lookup: HashMap<&str, u32> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i as u32))
            .collect();
        let codes = values.iter().map(|v| lookup[v.as_str()]).collect();
        Categorical { categories, codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Label at position `i`.
    pub fn get(&self, i: usize) -> &str {
        &self.categories[self.codes[i] as usize]
    }

    /// The fixed label set, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn take(&self, indices: &[usize]) -> Categorical {
        Categorical {
            categories: self.categories.clone(),
            codes: indices.iter().map(|&i| self.codes[i]).collect(),
        }
    }
}
