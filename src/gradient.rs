use ndarray::ArrayView1;

use crate::{RegressionError, Result};

/// Partial derivatives of the cost with respect to the slope and intercept:
///
/// `dJ/dw = (1 / m) * sum_i ((w * x[i] + b) - y[i]) * x[i]`
/// `dJ/db = (1 / m) * sum_i ((w * x[i] + b) - y[i])`
///
/// Both sums are accumulated element by element, left to right, sharing one
/// residual per example.
///
/// # Arguments
/// * `x` - Feature values, `m` examples.
/// * `y` - Target values, `m` examples, index-paired with `x`.
/// * `w` - Slope of the linear hypothesis.
/// * `b` - Intercept of the linear hypothesis.
///
/// # Errors
/// Returns `RegressionError::InvalidSampleSize` when the training set is
/// empty (`m = 0`). Unlike [`cost`](crate::cost), which reports the empty
/// case as an undefined value, an empty gradient is a hard error so that it
/// stops an optimizer run instead of silently producing a zero step.
pub fn gradient(x: ArrayView1<f64>, y: ArrayView1<f64>, w: f64, b: f64) -> Result<(f64, f64)> {
    let m = x.len();
    if m == 0 {
        return Err(RegressionError::InvalidSampleSize { got: m });
    }

    let mut dw_sum = 0.0;
    let mut db_sum = 0.0;
    for i in 0..m {
        let residual = (w * x[i] + b) - y[i];
        dw_sum += residual * x[i];
        db_sum += residual;
    }

    Ok((dw_sum / m as f64, db_sum / m as f64))
}
