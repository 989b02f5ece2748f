use uom::si::{f64::Time, time::second};

/// Time stepping for a pipe simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Forward Euler step size.
    pub time_step: Time,

    /// Simulated time span.
    ///
    /// The step count is `duration / time_step` rounded to the nearest
    /// integer, so the last step lands on the nearest multiple of the step.
    pub duration: Time,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<second>(1.0),
            duration: Time::new::<second>(700.0),
        }
    }
}

impl SimulationConfig {
    /// Most steps a single run may take.
    ///
    /// The solver keeps every snapshot, so the history is allocated up front.
    pub const MAX_STEPS: usize = 10_000_000;

    /// Returns the number of steps covering `duration`, or `None` if it
    /// exceeds [`Self::MAX_STEPS`].
    ///
    /// Callers must have checked that both fields are finite, the step is
    /// positive, and the duration is non-negative.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub(super) fn steps(&self) -> Option<usize> {
        let steps = (self.duration / self.time_step).value.round();
        (steps <= Self::MAX_STEPS as f64).then_some(steps as usize)
    }
}
