use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{FrameError, Result};

use super::value::Cell;

/// Row labels for a frame.
///
/// `Range` is the default positional index `0..n`. Gathering a `Range` index
/// (head, tail, slicing, sorting) degrades it to explicit `Int64` labels so
/// rows keep the labels they were born with.
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    Range(usize),
    Int64(Vec<i64>),
    Utf8(Vec<String>),
    Datetime(Vec<NaiveDateTime>),
}

impl Index {
    /// Default positional index over `n` rows.
    pub fn range(n: usize) -> Index {
        Index::Range(n)
    }

    /// `periods` consecutive midnight timestamps at daily frequency.
    ///
    /// `start` accepts `YYYYMMDD` or `YYYY-MM-DD`.
    pub fn date_range(start: &str, periods: usize) -> Result<Index> {
        let date = NaiveDate::parse_from_str(start, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(start, "%Y-%m-%d"))
            .map_err(|_| FrameError::InvalidDate(start.to_string()))?;
        let stamps = (0..periods)
            .map(|i| (date + Duration::days(i as i64)).and_time(NaiveTime::MIN))
            .collect();
        Ok(Index::Datetime(stamps))
    }

    pub fn len(&self) -> usize {
        match self {
            Index::Range(n) => *n,
            Index::Int64(v) => v.len(),
            Index::Utf8(v) => v.len(),
            Index::Datetime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label at position `i`.
    pub fn label(&self, i: usize) -> Cell {
        match self {
            Index::Range(_) => Cell::Int64(i as i64),
            Index::Int64(v) => Cell::Int64(v[i]),
            Index::Utf8(v) => Cell::Utf8(v[i].clone()),
            Index::Datetime(v) => Cell::Datetime(v[i]),
        }
    }

    pub fn labels(&self) -> Vec<Cell> {
        (0..self.len()).map(|i| self.label(i)).collect()
    }

    /// Resolve a label to its position.
    pub fn position(&self, label: &Label) -> Result<usize> {
        let found = match (self, label) {
            (Index::Range(n), Label::Int(v)) => {
                if *v >= 0 && (*v as usize) < *n {
                    Some(*v as usize)
                } else {
                    None
                }
            }
            (Index::Int64(ls), Label::Int(v)) => ls.iter().position(|x| x == v),
            (Index::Utf8(ls), Label::Utf8(s)) => ls.iter().position(|x| x == s),
            (Index::Datetime(ls), Label::Datetime(ts)) => ls.iter().position(|x| x == ts),
            _ => return Err(FrameError::LabelTypeMismatch(label.to_string())),
        };
        found.ok_or_else(|| FrameError::LabelNotFound(label.to_string()))
    }

    /// Gather labels by position, in order.
    pub fn take(&self, indices: &[usize]) -> Index {
        match self {
            Index::Range(_) => Index::Int64(indices.iter().map(|&i| i as i64).collect()),
            Index::Int64(v) => Index::Int64(indices.iter().map(|&i| v[i]).collect()),
            Index::Utf8(v) => Index::Utf8(indices.iter().map(|&i| v[i].clone()).collect()),
            Index::Datetime(v) => Index::Datetime(indices.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Row permutation that sorts the labels.
    pub fn sort_order(&self, ascending: bool) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        match self {
            Index::Range(_) => {}
            Index::Int64(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Index::Utf8(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Index::Datetime(v) => order.sort_by(|&a, &b| v[a].cmp(&v[b])),
        }
        if !ascending {
            order.reverse();
        }
        order
    }

    pub(crate) fn dtype_name(&self) -> &'static str {
        match self {
            Index::Range(_) | Index::Int64(_) => "int64",
            Index::Utf8(_) => "utf8",
            Index::Datetime(_) => "datetime",
        }
    }
}

/// A row label, as accepted by label-based selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Int(i64),
    Utf8(String),
    Datetime(NaiveDateTime),
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Utf8(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Utf8(s)
    }
}

impl From<NaiveDateTime> for Label {
    fn from(ts: NaiveDateTime) -> Self {
        Label::Datetime(ts)
    }
}

impl From<NaiveDate> for Label {
    fn from(d: NaiveDate) -> Self {
        Label::Datetime(d.and_time(NaiveTime::MIN))
    }
}
