use ndarray::ArrayView1;

/// Mean squared error cost of the linear hypothesis over a training set:
///
/// `J(w, b) = (1 / (2 * m)) * sum_i ((w * x[i] + b) - y[i])^2`
///
/// The sum is accumulated element by element, left to right; there is no
/// vectorized shortcut, so the result is reproducible bit for bit for
/// identical inputs.
///
/// Returns `None` when the training set is empty (`m = 0`): the cost is
/// undefined there, not zero. Contrast with [`gradient`](crate::gradient),
/// which treats the empty training set as a hard error.
///
/// # Arguments
/// * `x` - Feature values, `m` examples.
/// * `y` - Target values, `m` examples, index-paired with `x`.
/// * `w` - Slope of the linear hypothesis.
/// * `b` - Intercept of the linear hypothesis.
pub fn cost(x: ArrayView1<f64>, y: ArrayView1<f64>, w: f64, b: f64) -> Option<f64> {
    let m = x.len();
    if m == 0 {
        return None;
    }

    let mut cost_sum = 0.0;
    for i in 0..m {
        let residual = (w * x[i] + b) - y[i];
        cost_sum += residual * residual;
    }

    Some(cost_sum / (2.0 * m as f64))
}
