use thiserror::Error;
use twine_solvers::transient::euler;
use uom::si::f64::Time;

use crate::models::thermal::pipe::core::PipeError;

/// Errors that can occur while simulating a heated pipe.
#[derive(Debug, Error)]
pub enum SimulateError {
    /// The initial field did not fit the pipe.
    #[error("invalid initial field")]
    Pipe(#[from] PipeError),

    #[error("time step must be strictly positive: {time_step:?}")]
    TimeStep { time_step: Time },

    /// The duration is negative, not finite, or needs more than
    /// [`SimulationConfig::MAX_STEPS`](super::SimulationConfig::MAX_STEPS) steps.
    #[error("invalid duration: {duration:?}")]
    Duration { duration: Time },

    /// The explicit update would not be stable at the requested step.
    #[error("time step {time_step:?} exceeds the stability limit {limit:?}")]
    UnstableTimeStep { time_step: Time, limit: Time },

    /// The Euler solver failed.
    #[error("euler solver error")]
    Euler(#[from] euler::Error),
}
