use std::fmt;

/// The result type used across the regression core.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// The regression core's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionError {
    /// A gradient was requested over a training set with too few examples.
    InvalidSampleSize {
        /// Observed number of training examples.
        got: usize,
    },
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::InvalidSampleSize { got } => {
                write!(
                    f,
                    "cannot compute a gradient over {got} training examples, at least 1 is required"
                )
            }
        }
    }
}

impl std::error::Error for RegressionError {}
