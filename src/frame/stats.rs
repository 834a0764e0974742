use super::core::DataFrame;
use super::index::Index;
use super::series::Series;

const STATS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl DataFrame {
    /// Summary statistics over the numeric columns.
    ///
    /// The result has one row per statistic (count, mean, std, min, 25%,
    /// 50%, 75%, max) and one column per numeric input column. Missing
    /// values are excluded from every statistic; `std` is the sample
    /// standard deviation and quantiles interpolate linearly. A frame with
    /// no numeric columns describes to an empty frame.
    pub fn describe(&self) -> DataFrame {
        let numeric: Vec<(String, Vec<f64>)> = self
            .columns
            .iter()
            .zip(&self.data)
            .filter_map(|(name, series)| series.numeric_values().map(|v| (name.clone(), v)))
            .collect();

        if numeric.is_empty() {
            return DataFrame::new(Vec::new());
        }

        let mut names = Vec::with_capacity(numeric.len());
        let mut data = Vec::with_capacity(numeric.len());
        for (name, values) in numeric {
            names.push(name);
            data.push(Series::Float64(column_stats(&values)));
        }

        DataFrame {
            index: Index::Utf8(STATS.iter().map(|s| s.to_string()).collect()),
            columns: names,
            data,
        }
    }
}

fn column_stats(values: &[f64]) -> Vec<f64> {
    let mut observed: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    observed.sort_by(f64::total_cmp);

    let n = observed.len();
    let count = n as f64;
    if n == 0 {
        return vec![count, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN];
    }

    let mean = observed.iter().sum::<f64>() / count;
    let std = if n >= 2 {
        let ss = observed.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        (ss / (count - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    vec![
        count,
        mean,
        std,
        observed[0],
        quantile(&observed, 0.25),
        quantile(&observed, 0.50),
        quantile(&observed, 0.75),
        observed[n - 1],
    ]
}

/// Linear interpolation over a sorted, NaN-free sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
}
