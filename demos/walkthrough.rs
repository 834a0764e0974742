//! Annotated tour of the AxisFrames basics: container construction,
//! inspection, axis sorting, and selection. Each statement is followed by the
//! text it prints; the random frame's values vary from run to run.

use axisframes::{Axis, Cell, ColumnSource, DataFrame, Index, Series};
use chrono::{NaiveDate, NaiveTime};
use rand::{thread_rng, Rng};

fn main() -> axisframes::Result<()> {
    // 1. Object creation

    // Creating a series by passing a list of values, letting the crate create
    // a default integer index. A missing entry lowers to the NaN marker:
    let series = Series::from(vec![
        Some(1.0),
        Some(3.0),
        Some(5.0),
        Some(20.0),
        Some(9.0 + 1.0),
        None,
        Some(30.0),
    ]);
    println!("{series}");
    // 0   1.0
    // 1   3.0
    // 2   5.0
    // 3  20.0
    // 4  10.0
    // 5   NaN
    // 6  30.0
    // dtype: float64

    // Creating a frame with a datetime index and labeled columns of random
    // values:
    let dates = Index::date_range("20210416", 6)?;
    println!("{dates}");
    // Index([2021-04-16, 2021-04-17, 2021-04-18, 2021-04-19, 2021-04-20, 2021-04-21], dtype: datetime)

    let mut rng = thread_rng();
    let frame = DataFrame::with_index(
        dates,
        ["A", "B", "C", "D"]
            .iter()
            .map(|name| {
                let values: Vec<f64> = (0..6).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
                (name.to_string(), Series::from(values))
            })
            .collect(),
    );
    println!("{frame}");
    //                     A          B          C          D
    // 2021-04-16  -0.051929  -0.875676   0.660774   0.291489
    // 2021-04-17   0.339421  -0.413208   0.203138   0.282237
    // 2021-04-18   0.469639  -0.552956   0.734373   0.331192
    // 2021-04-19  -0.100487  -0.737573  -0.520274   0.032894
    // 2021-04-20  -0.276591   0.866722   0.942338   0.272999
    // 2021-04-21   0.350279  -0.296165   0.533465  -0.613423

    // Creating a frame from heterogeneous per-column sources. Scalars are
    // broadcast against the full columns:
    let stamp = NaiveDate::from_ymd_opt(2015, 2, 4)
        .unwrap()
        .and_time(NaiveTime::MIN);
    let frame2 = DataFrame::from_columns(vec![
        ("A".to_string(), ColumnSource::Scalar(Cell::Float64(1.0))),
        ("B".to_string(), ColumnSource::Scalar(Cell::Datetime(stamp))),
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
    ])?;
    println!("{frame2}");
    //      A           B    C  D      E    F
    // 0  1.0  2015-02-04  1.0  3   test  foo
    // 1  1.0  2015-02-04  1.0  3  train  foo
    // 2  1.0  2015-02-04  1.0  3   test  foo
    // 3  1.0  2015-02-04  1.0  3  train  foo
    // 4  1.0  2015-02-04  1.0  3   test  foo

    for (name, dtype) in frame2.dtypes() {
        println!("{name}  {dtype}");
    }
    // A  float64
    // B  datetime
    // C  float64
    // D  int64
    // E  category
    // F  utf8

    // 2. Viewing data

    // The top and bottom rows of the frame. Rows keep their labels:
    println!("{}", frame2.head(2));
    //      A           B    C  D      E    F
    // 0  1.0  2015-02-04  1.0  3   test  foo
    // 1  1.0  2015-02-04  1.0  3  train  foo
    println!("{}", frame2.tail(2));
    //      A           B    C  D      E    F
    // 3  1.0  2015-02-04  1.0  3  train  foo
    // 4  1.0  2015-02-04  1.0  3   test  foo

    // The index and the column names:
    println!("{}", frame2.index);
    // Index([0, 1, 2, 3, 4], dtype: int64)
    println!("{:?}", frame2.columns);
    // ["A", "B", "C", "D", "E", "F"]

    // A quick statistic summary of the numeric columns:
    println!("{}", frame2.describe());
    //          A    C    D
    // count  5.0  5.0  5.0
    // mean   1.0  1.0  3.0
    // std    0.0  0.0  0.0
    // min    1.0  1.0  3.0
    // 25%    1.0  1.0  3.0
    // 50%    1.0  1.0  3.0
    // 75%    1.0  1.0  3.0
    // max    1.0  1.0  3.0

    // Sorting by an axis: columns by name, in descending order. Row content
    // is untouched:
    println!("{}", frame2.sort_index(Axis::Columns, false));
    //      F      E  D    C           B    A
    // 0  foo   test  3  1.0  2015-02-04  1.0
    // 1  foo  train  3  1.0  2015-02-04  1.0
    // 2  foo   test  3  1.0  2015-02-04  1.0
    // 3  foo  train  3  1.0  2015-02-04  1.0
    // 4  foo   test  3  1.0  2015-02-04  1.0

    // 3. Selection

    // Selecting a single column, which yields a series:
    println!("{}", frame2.column("A")?);
    // 0  1.0
    // 1  1.0
    // 2  1.0
    // 3  1.0
    // 4  1.0
    // dtype: float64

    // Slicing rows by position:
    println!("{}", frame2.slice_rows(0..3));
    //      A           B    C  D      E    F
    // 0  1.0  2015-02-04  1.0  3   test  foo
    // 1  1.0  2015-02-04  1.0  3  train  foo
    // 2  1.0  2015-02-04  1.0  3   test  foo

    // Getting a cross-section by row label:
    println!("{}", frame.row(NaiveDate::from_ymd_opt(2021, 4, 16).unwrap())?);
    // A  -0.051929
    // B  -0.875676
    // C   0.660774
    // D   0.291489
    // name: 2021-04-16

    // Selecting on both axes by label: every row, two named columns:
    println!("{}", frame.select(&["A", "B"])?);
    //                     A          B
    // 2021-04-16  -0.051929  -0.875676
    // 2021-04-17   0.339421  -0.413208
    // 2021-04-18   0.469639  -0.552956
    // 2021-04-19  -0.100487  -0.737573
    // 2021-04-20  -0.276591   0.866722
    // 2021-04-21   0.350279  -0.296165

    Ok(())
}
