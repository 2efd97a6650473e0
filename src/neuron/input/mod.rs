//! Per step accumulation of externally injected current.

/// Sums every current contribution pushed before a step, the total is consumed
/// exactly once by the step and the accumulator returns to zero
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAccumulator {
    pending: f64,
}

impl InputAccumulator {
    /// Adds a current contribution for the next step
    pub fn push(&mut self, current: f64) {
        self.pending += current;
    }

    /// Returns the accumulated current without consuming it
    pub fn pending(&self) -> f64 {
        self.pending
    }

    /// Returns the accumulated current and resets the accumulator to zero,
    /// consuming without any pushes yields `0.`
    pub fn consume(&mut self) -> f64 {
        std::mem::take(&mut self.pending)
    }

    /// Discards any pending current
    pub fn clear(&mut self) {
        self.pending = 0.;
    }
}
