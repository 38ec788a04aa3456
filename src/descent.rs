use log::debug;
use ndarray::ArrayView1;

use crate::{cost, gradient, should_sample, Parameters, Result, Trace};

/// Batch gradient descent optimization algorithm.
pub struct GradientDescent {
    learning_rate: f64,
}

/// Outcome of a gradient descent run.
///
/// The variant is selected up front by the `record_history` flag of
/// [`GradientDescent::run`], not by whether anything was sampled: a run that
/// asked for history but never hit the sampling predicate yields `Traced`
/// with an empty [`Trace`].
#[derive(Debug, Clone, PartialEq)]
pub enum Descent {
    /// Final parameters only.
    Final(Parameters),
    /// Final parameters plus the sampled trajectory.
    Traced {
        params: Parameters,
        trace: Trace,
    },
}

impl Descent {
    /// Returns the final parameters, whichever variant was produced.
    pub fn parameters(&self) -> Parameters {
        match self {
            Descent::Final(params) => *params,
            Descent::Traced { params, .. } => *params,
        }
    }
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on each iteration.
    ///   No bound is enforced and no divergence detection is performed; a
    ///   rate that oscillates or blows up is the caller's choice.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Runs `iterations` sequential gradient descent steps from `(w0, b0)`
    /// and returns the final parameters.
    ///
    /// Each step computes the gradient at the current parameters and moves
    /// against it, scaled by the learning rate. Both components of the new
    /// pair derive from the same pre-update pair (simultaneous update). With
    /// `record_history` set, the updated parameters and the cost at them are
    /// appended to a [`Trace`] on iterations accepted by
    /// [`should_sample`](crate::should_sample).
    ///
    /// # Arguments
    /// * `x` - Feature values, `m` examples.
    /// * `y` - Target values, `m` examples, index-paired with `x`.
    /// * `w0` - Initial slope.
    /// * `b0` - Initial intercept.
    /// * `iterations` - Number of steps to run; 0 returns `(w0, b0)` as is.
    /// * `record_history` - Whether to produce [`Descent::Traced`].
    ///
    /// # Errors
    /// Propagates `RegressionError::InvalidSampleSize` from the gradient
    /// computation unchanged; nothing is caught or translated here. With
    /// `iterations = 0` the gradient is never evaluated, so even an empty
    /// training set succeeds.
    pub fn run(
        &self,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
        w0: f64,
        b0: f64,
        iterations: usize,
        record_history: bool,
    ) -> Result<Descent> {
        let lr = self.learning_rate;
        let mut params = Parameters::new(w0, b0);
        let mut trace = Trace::default();

        for i in 0..iterations {
            let (dj_dw, dj_db) = gradient(x, y, params.w(), params.b())?;

            let new_w = params.w() - lr * dj_dw;
            let new_b = params.b() - lr * dj_db;
            params = Parameters::new(new_w, new_b);

            if record_history && should_sample(iterations, i) {
                // gradient above proved m >= 1, so the cost is defined
                if let Some(j) = cost(x, y, new_w, new_b) {
                    debug!("iteration {i}: w = {new_w}, b = {new_b}, cost = {j}");
                    trace.push(params, j);
                }
            }
        }

        if record_history {
            Ok(Descent::Traced { params, trace })
        } else {
            Ok(Descent::Final(params))
        }
    }
}
