//! # AxisFrames
//!
//! Labeled one- and two-dimensional data containers, written in Rust.
//!
//! AxisFrames provides:
//! - Typed series with a missing-value marker for float columns
//! - DataFrames with named columns over a shared row index
//! - Datetime row indexes built from daily date ranges
//! - Axis sorting: rows by index label, columns by name
//! - Selection by column name, row position, or row label
//! - NaN-aware summary statistics
//!
//! ## Quick Start
//!
//! ### Series
//! ```rust
//! use axisframes::Series;
//!
//! // Missing values lower to the NaN marker
//! let series = Series::from(vec![Some(1.0), Some(3.0), None, Some(30.0)]);
//! assert_eq!(series.len(), 4);
//! assert_eq!(series.null_count(), 1);
//! ```
//!
//! ### DataFrames
//! ```rust
//! use axisframes::{Axis, DataFrame, Series};
//!
//! let frame = DataFrame::new(vec![
//!     ("name".to_string(), Series::from(vec!["Alice", "Bob", "Charlie"])),
//!     ("age".to_string(), Series::from(vec![25, 30, 35])),
//!     ("score".to_string(), Series::from(vec![85.5, 92.0, 78.5])),
//! ]);
//!
//! // Inspection
//! assert_eq!(frame.shape(), (3, 3));
//! let top = frame.head(2);
//!
//! // Axis sorting and selection
//! let by_name = frame.sort_index(Axis::Columns, true);
//! assert_eq!(by_name.columns, vec!["age", "name", "score"]);
//! let ages = frame.column("age")?;
//! let pair = frame.select(&["name", "score"])?;
//! # Ok::<(), axisframes::FrameError>(())
//! ```
//!
//! ### Datetime indexes
//! ```rust
//! use axisframes::{DataFrame, Index, Series};
//!
//! let dates = Index::date_range("2021-04-16", 3)?;
//! let frame = DataFrame::with_index(
//!     dates,
//!     vec![("temp".to_string(), Series::from(vec![11.5, 13.0, 12.25]))],
//! );
//! let first = frame.row(chrono::NaiveDate::from_ymd_opt(2021, 4, 16).unwrap())?;
//! assert_eq!(first.columns, vec!["temp"]);
//! # Ok::<(), axisframes::FrameError>(())
//! ```

pub mod error;
pub mod frame;

// Re-export main types for convenience
pub use error::{FrameError, Result};
pub use frame::{
    Axis, Categorical, Cell, ColumnSource, DType, DataFrame, Index, Label, Row, Series,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    fn sample_mixed_frame() -> DataFrame {
        DataFrame::from_columns(vec![
            ("A".to_string(), ColumnSource::Scalar(Cell::Float64(1.0))),
            (
                "B".to_string(),
                ColumnSource::Scalar(Cell::Datetime(midnight(2015, 2, 4))),
            ),
            (
                "C".to_string(),
                ColumnSource::Series(Series::from(vec![1.0; 5])),
            ),
            (
                "D".to_string(),
                ColumnSource::Series(Series::from(vec![3i64; 5])),
            ),
            (
                "E".to_string(),
                ColumnSource::Series(Series::categorical(&[
                    "test", "train", "test", "train", "test",
                ])),
            ),
            (
                "F".to_string(),
                ColumnSource::Scalar(Cell::Utf8("foo".to_string())),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_series_with_missing_values() {
        let series = Series::from(vec![
            Some(1.0),
            Some(3.0),
            Some(5.0),
            Some(20.0),
            Some(9.0 + 1.0),
            None,
            Some(30.0),
        ]);

        assert_eq!(series.len(), 7);
        assert_eq!(series.dtype(), DType::Float64);
        assert_eq!(series.get(4), Cell::Float64(10.0));
        assert!(series.is_null(5));
        assert!(series.get(5).is_null());
        assert_eq!(series.null_count(), 1);
    }

    #[test]
    fn test_date_range_daily() {
        let dates = Index::date_range("20210416", 6).unwrap();
        assert_eq!(dates.len(), 6);
        assert_eq!(dates.label(0), Cell::Datetime(midnight(2021, 4, 16)));
        assert_eq!(dates.label(3), Cell::Datetime(midnight(2021, 4, 19)));
        assert_eq!(dates.label(5), Cell::Datetime(midnight(2021, 4, 21)));

        // both accepted spellings parse to the same index
        let dashed = Index::date_range("2021-04-16", 6).unwrap();
        assert_eq!(dates, dashed);

        assert!(Index::date_range("not-a-date", 3).is_err());
        assert!(Index::date_range("20210416", 0).unwrap().is_empty());
    }

    #[test]
    fn test_heterogeneous_frame_dtypes() {
        let frame = sample_mixed_frame();
        assert_eq!(frame.shape(), (5, 6));

        let dtypes: Vec<DType> = frame.dtypes().into_iter().map(|(_, d)| d).collect();
        assert_eq!(
            dtypes,
            vec![
                DType::Float64,
                DType::Datetime,
                DType::Float64,
                DType::Int64,
                DType::Categorical,
                DType::Utf8,
            ]
        );

        // scalar columns broadcast to the shared row count
        assert_eq!(frame.column("A").unwrap().len(), 5);
        assert_eq!(frame.column("F").unwrap().get(4), Cell::Utf8("foo".to_string()));
    }

    #[test]
    fn test_from_columns_rejects_bad_shapes() {
        let all_scalars = DataFrame::from_columns(vec![(
            "A".to_string(),
            ColumnSource::Scalar(Cell::Int64(1)),
        )]);
        assert!(matches!(all_scalars, Err(FrameError::ScalarOnlyColumns)));

        let mismatched = DataFrame::from_columns(vec![
            ("A".to_string(), ColumnSource::Series(Series::from(vec![1.0; 5]))),
            ("B".to_string(), ColumnSource::Series(Series::from(vec![1.0; 4]))),
        ]);
        assert!(matches!(
            mismatched,
            Err(FrameError::LengthMismatch { expected: 5, actual: 4, .. })
        ));
    }

    #[test]
    fn test_head_tail_keep_labels() {
        let frame = sample_mixed_frame();

        let head = frame.head(2);
        assert_eq!(head.len(), 2);
        assert_eq!(head.index.labels(), vec![Cell::Int64(0), Cell::Int64(1)]);

        let tail = frame.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.index.labels(), vec![Cell::Int64(3), Cell::Int64(4)]);

        // n past the row count clamps
        assert_eq!(frame.head(10).len(), 5);
        assert_eq!(frame.tail(10).len(), 5);
    }

    #[test]
    fn test_sort_columns_descending() {
        let frame = sample_mixed_frame();
        let sorted = frame.sort_index(Axis::Columns, false);

        assert_eq!(sorted.columns, vec!["F", "E", "D", "C", "B", "A"]);
        // row content travels with the column
        assert_eq!(sorted.column("A").unwrap(), frame.column("A").unwrap());
        assert_eq!(sorted.column("E").unwrap(), frame.column("E").unwrap());
        assert_eq!(sorted.index, frame.index);

        let ascending = sorted.sort_index(Axis::Columns, true);
        assert_eq!(ascending.columns, frame.columns);
    }

    #[test]
    fn test_sort_rows_by_index() {
        let dates = Index::date_range("20210416", 3).unwrap();
        let frame = DataFrame::with_index(
            dates,
            vec![("v".to_string(), Series::from(vec![10.0, 20.0, 30.0]))],
        );

        let sorted = frame.sort_index(Axis::Rows, false);
        assert_eq!(sorted.index.label(0), Cell::Datetime(midnight(2021, 4, 18)));
        assert_eq!(
            sorted.column("v").unwrap(),
            &Series::from(vec![30.0, 20.0, 10.0])
        );

        // a range index sorts back by position
        let positional = DataFrame::new(vec![("v".to_string(), Series::from(vec![1i64, 2, 3]))]);
        let reversed = positional.sort_index(Axis::Rows, false);
        assert_eq!(
            reversed.index.labels(),
            vec![Cell::Int64(2), Cell::Int64(1), Cell::Int64(0)]
        );
    }

    #[test]
    fn test_sort_by_values_missing_last() {
        let frame = DataFrame::new(vec![(
            "v".to_string(),
            Series::from(vec![Some(3.0), None, Some(1.0)]),
        )]);

        let ascending = frame.sort_by("v", true).unwrap();
        assert_eq!(
            ascending.index.labels(),
            vec![Cell::Int64(2), Cell::Int64(0), Cell::Int64(1)]
        );

        let descending = frame.sort_by("v", false).unwrap();
        assert_eq!(
            descending.index.labels(),
            vec![Cell::Int64(0), Cell::Int64(2), Cell::Int64(1)]
        );

        assert!(frame.sort_by("missing", true).is_err());
    }

    #[test]
    fn test_describe_skips_missing_values() {
        let frame = DataFrame::new(vec![(
            "x".to_string(),
            Series::from(vec![
                Some(1.0),
                Some(3.0),
                Some(5.0),
                Some(20.0),
                Some(10.0),
                None,
                Some(30.0),
            ]),
        )]);

        let desc = frame.describe();
        assert_eq!(desc.columns, vec!["x"]);
        assert_eq!(
            desc.index.labels(),
            ["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
                .iter()
                .map(|s| Cell::Utf8(s.to_string()))
                .collect::<Vec<_>>()
        );

        let stats = desc.column("x").unwrap().numeric_values().unwrap();
        assert_eq!(stats[0], 6.0); // count excludes the missing row
        assert!((stats[1] - 11.5).abs() < 1e-12); // mean
        assert!((stats[2] - (641.5f64 / 5.0).sqrt()).abs() < 1e-12); // sample std
        assert_eq!(stats[3], 1.0); // min
        assert!((stats[4] - 3.5).abs() < 1e-12); // 25%
        assert!((stats[5] - 7.5).abs() < 1e-12); // 50%
        assert!((stats[6] - 17.5).abs() < 1e-12); // 75%
        assert_eq!(stats[7], 30.0); // max
    }

    #[test]
    fn test_describe_constant_and_non_numeric_columns() {
        let frame = sample_mixed_frame();
        let desc = frame.describe();

        // only the numeric columns survive
        assert_eq!(desc.columns, vec!["A", "C", "D"]);
        for name in ["A", "C", "D"] {
            let stats = desc.column(name).unwrap().numeric_values().unwrap();
            assert_eq!(stats[0], 5.0);
            assert_eq!(stats[2], 0.0); // constant column has zero spread
            assert_eq!(stats[3], stats[7]); // min == max
        }
        let d = desc.column("D").unwrap().numeric_values().unwrap();
        assert_eq!(d[1], 3.0);

        let text_only = DataFrame::new(vec![("t".to_string(), Series::from(vec!["a", "b"]))]);
        assert_eq!(text_only.describe().shape(), (0, 0));
    }

    #[test]
    fn test_column_selection() {
        let frame = sample_mixed_frame();

        let a = frame.column("A").unwrap();
        assert_eq!(a.dtype(), DType::Float64);
        assert!(frame.column("Z").is_err());

        let subset = frame.select(&["A", "B"]).unwrap();
        assert_eq!(subset.columns, vec!["A", "B"]);
        assert_eq!(subset.len(), frame.len());
        assert_eq!(subset.index, frame.index);
        assert!(frame.select(&["A", "Z"]).is_err());
    }

    #[test]
    fn test_positional_row_slice() {
        let frame = sample_mixed_frame();

        let rows = frame.slice_rows(0..3);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.index.labels(),
            vec![Cell::Int64(0), Cell::Int64(1), Cell::Int64(2)]
        );
        assert_eq!(
            rows.column("E").unwrap().get(1),
            Cell::Categorical("train".to_string())
        );

        // out-of-range bounds clamp instead of panicking
        assert_eq!(frame.slice_rows(3..99).len(), 2);
        assert_eq!(frame.slice_rows(7..9).len(), 0);
    }

    #[test]
    fn test_row_cross_section_by_label() {
        let dates = Index::date_range("20210416", 6).unwrap();
        let frame = DataFrame::with_index(
            dates,
            vec![
                ("A".to_string(), Series::from(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6])),
                ("B".to_string(), Series::from(vec![1i64, 2, 3, 4, 5, 6])),
            ],
        );

        let row = frame.row(NaiveDate::from_ymd_opt(2021, 4, 16).unwrap()).unwrap();
        assert_eq!(row.name, Cell::Datetime(midnight(2021, 4, 16)));
        assert_eq!(row.columns, vec!["A", "B"]);
        assert_eq!(row.cells, vec![Cell::Float64(0.1), Cell::Int64(1)]);

        // label outside the index
        assert!(frame.row(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()).is_err());
        // label of the wrong type
        assert!(matches!(frame.row(3i64), Err(FrameError::LabelTypeMismatch(_))));
    }

    #[test]
    fn test_categorical_label_set() {
        let series = Series::categorical(&["test", "train", "test", "train", "test"]);
        assert_eq!(series.len(), 5);
        assert_eq!(series.dtype(), DType::Categorical);
        assert_eq!(series.get(0), Cell::Categorical("test".to_string()));
        assert_eq!(series.get(1), Cell::Categorical("train".to_string()));

        if let Series::Categorical(c) = &series {
            assert_eq!(c.categories(), ["test".to_string(), "train".to_string()]);
        } else {
            panic!("expected a categorical series");
        }
    }

    #[test]
    fn test_series_display() {
        let series = Series::from(vec![Some(1.0), Some(3.0), None]);
        assert_eq!(format!("{series}"), "0  1.0\n1  3.0\n2  NaN\ndtype: float64");

        let empty = Series::Int64(Vec::new());
        assert_eq!(format!("{empty}"), "Series([], dtype: int64)");
    }

    #[test]
    fn test_frame_display() {
        let frame = DataFrame::new(vec![
            ("a".to_string(), Series::from(vec![1i64, 2])),
            ("b".to_string(), Series::from(vec!["x", "yy"])),
        ]);
        assert_eq!(format!("{frame}"), "   a   b\n0  1   x\n1  2  yy");

        let empty = DataFrame::new(Vec::new());
        assert_eq!(format!("{empty}"), "Empty DataFrame");
    }

    #[test]
    fn test_index_display() {
        let dates = Index::date_range("20210416", 2).unwrap();
        assert_eq!(
            format!("{dates}"),
            "Index([2021-04-16, 2021-04-17], dtype: datetime)"
        );

        let range = Index::range(3);
        assert_eq!(format!("{range}"), "Index([0, 1, 2], dtype: int64)");
    }

    #[test]
    fn test_row_display() {
        let frame = DataFrame::new(vec![
            ("A".to_string(), Series::from(vec![1.0])),
            ("B".to_string(), Series::from(vec!["x"])),
        ]);
        let row = frame.row(0i64).unwrap();
        assert_eq!(format!("{row}"), "A  1.0\nB    x\nname: 0");
    }
}
