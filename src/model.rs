/// Slope and intercept of the linear hypothesis `f(x) = w * x + b`.
///
/// A `Parameters` is immutable; each gradient descent iteration builds a
/// whole new value from the previous one, so both components always derive
/// from the same pre-update pair and never from each other's updated value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parameters {
    w: f64,
    b: f64,
}

impl Parameters {
    /// Returns a new `Parameters`.
    ///
    /// # Arguments
    /// * `w` - Slope of the linear hypothesis.
    /// * `b` - Intercept of the linear hypothesis.
    pub fn new(w: f64, b: f64) -> Self {
        Self { w, b }
    }

    /// Returns the slope.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Returns the intercept.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Evaluates the hypothesis `f(x) = w * x + b` at a single point.
    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }
}
