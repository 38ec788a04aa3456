use crate::Parameters;

/// Runs of at least this many iterations record no snapshots at all.
const SAMPLING_CUTOFF: usize = 1000;

/// Interval, in iterations, between recorded snapshots.
const SAMPLING_STRIDE: usize = 10;

/// Whether iteration `iteration` of a run of `total_iterations` steps is
/// recorded into the trace.
///
/// A snapshot is kept only when the whole run is shorter than 1000
/// iterations *and* the 0-based iteration index is a multiple of 10 (so
/// iteration 0 is always sampled on short runs). Runs of 1000 iterations or
/// more record nothing, even when history was requested; the cutoff keeps
/// trace memory independent of run length. Callers that opt in to history
/// must not assume the trace is populated.
pub fn should_sample(total_iterations: usize, iteration: usize) -> bool {
    total_iterations < SAMPLING_CUTOFF && iteration % SAMPLING_STRIDE == 0
}

/// Sampled trajectory of a gradient descent run.
///
/// Holds parameter snapshots and the cost evaluated at each, index-paired,
/// in iteration order. Append-only; owned by a single optimizer run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    params: Vec<Parameters>,
    costs: Vec<f64>,
}

impl Trace {
    pub(crate) fn push(&mut self, params: Parameters, cost: f64) {
        self.params.push(params);
        self.costs.push(cost);
    }

    /// Returns the recorded parameter snapshots.
    pub fn params(&self) -> &[Parameters] {
        &self.params
    }

    /// Returns the recorded cost values, index-paired with the snapshots.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
