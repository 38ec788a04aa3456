#![cfg(test)]

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rand::Rng;

use crate::{cost, gradient, GradientDescent};

/// Closed-form least squares solution for a univariate training set.
fn least_squares(x: &Array1<f64>, y: &Array1<f64>) -> (f64, f64) {
    let m = x.len() as f64;
    let x_mean = x.sum() / m;
    let y_mean = y.sum() / m;

    let mut num = 0.0;
    let mut den = 0.0;
    for i in 0..x.len() {
        num += (x[i] - x_mean) * (y[i] - y_mean);
        den += (x[i] - x_mean) * (x[i] - x_mean);
    }

    let w = num / den;
    (w, y_mean - w * x_mean)
}

fn noisy_line(m: usize, w: f64, b: f64) -> (Array1<f64>, Array1<f64>) {
    let mut rng = rand::rng();

    let x = Array1::from_iter((0..m).map(|i| i as f64 / 10.0));
    let y = Array1::from_iter(x.iter().map(|&xi| w * xi + b + rng.random_range(-0.05..0.05)));

    (x, y)
}

#[test]
fn test_descent_recovers_a_noisy_line() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (x, y) = noisy_line(200, 3.0, -1.5);
    let (w_star, b_star) = least_squares(&x, &y);

    let params = GradientDescent::new(0.01)
        .run(x.view(), y.view(), 0.0, 0.0, 100_000, false)
        .unwrap()
        .parameters();

    assert_abs_diff_eq!(params.w(), w_star, epsilon = 1e-6);
    assert_abs_diff_eq!(params.b(), b_star, epsilon = 1e-6);
}

#[test]
fn test_gradient_vanishes_at_the_closed_form_solution() {
    let (x, y) = noisy_line(200, -0.7, 4.0);
    let (w_star, b_star) = least_squares(&x, &y);

    let (dj_dw, dj_db) = gradient(x.view(), y.view(), w_star, b_star).unwrap();

    assert_abs_diff_eq!(dj_dw, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(dj_db, 0.0, epsilon = 1e-9);
}

#[test]
fn test_cost_is_minimal_at_the_closed_form_solution() {
    let (x, y) = noisy_line(200, 2.0, 0.5);
    let (w_star, b_star) = least_squares(&x, &y);

    let j_star = cost(x.view(), y.view(), w_star, b_star).unwrap();
    for &(dw, db) in &[(0.01, 0.0), (-0.01, 0.0), (0.0, 0.1), (0.0, -0.1), (0.05, -0.05)] {
        let j = cost(x.view(), y.view(), w_star + dw, b_star + db).unwrap();
        assert!(
            j_star <= j,
            "cost {j} at offset ({dw}, {db}) undercuts the optimum {j_star}"
        );
    }
}
