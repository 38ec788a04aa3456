mod cost;
mod descent;
mod error;
mod gradient;
mod model;
mod test;
mod trace;

pub use cost::cost;
pub use descent::{Descent, GradientDescent};
pub use error::{RegressionError, Result};
pub use gradient::gradient;
pub use model::Parameters;
pub use trace::{should_sample, Trace};
