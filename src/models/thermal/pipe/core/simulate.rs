//! Forward Euler time stepping of a heated pipe.

mod config;
mod error;
mod problem;

pub use config::SimulationConfig;
pub use error::SimulateError;
pub use problem::{PipeInput, PipeOutput, PipeProblem};

use twine_core::Observer;
use twine_solvers::transient::euler;
use uom::{ConstZero, si::f64::Time};

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

use super::{HeatedPipe, PipeError, PipeTemperatures};

/// The solver history of a pipe simulation.
///
/// `history[0]` is the initial field; each later snapshot follows one step.
pub type Simulation = euler::Solution<PipeInput, PipeOutput>;

/// Events emitted to a simulation observer after each step.
pub type SimulationEvent = euler::Event<PipeInput, PipeOutput>;

impl HeatedPipe {
    /// Steps the node temperatures forward in time from `initial`.
    ///
    /// The observer sees the initial snapshot and then each step, and may
    /// stop the run early with [`euler::Action::StopEarly`].
    ///
    /// # Errors
    ///
    /// Returns [`SimulateError`] if the time step is not strictly positive,
    /// the duration is negative or not finite or spans more than
    /// [`SimulationConfig::MAX_STEPS`] steps, the time step exceeds
    /// [`HeatedPipe::max_stable_time_step`], or `initial` does not match the grid.
    pub fn simulate<Obs>(
        &self,
        initial: PipeTemperatures,
        config: &SimulationConfig,
        observer: Obs,
    ) -> Result<Simulation, SimulateError>
    where
        Obs: Observer<SimulationEvent, euler::Action>,
    {
        let SimulationConfig {
            time_step,
            duration,
        } = *config;

        if StrictlyPositive::check(&time_step).is_err() || !time_step.is_finite() {
            return Err(SimulateError::TimeStep { time_step });
        }
        if NonNegative::check(&duration).is_err() || !duration.is_finite() {
            return Err(SimulateError::Duration { duration });
        }
        let steps = config.steps().ok_or(SimulateError::Duration { duration })?;

        let limit = self.max_stable_time_step();
        if time_step > limit {
            return Err(SimulateError::UnstableTimeStep { time_step, limit });
        }

        if initial.len() != self.grid().len() {
            return Err(PipeError::NodeCount {
                expected: self.grid().len(),
                got: initial.len(),
            }
            .into());
        }

        let initial = PipeInput {
            time: Time::ZERO,
            temperatures: initial,
        };

        let solution = euler::solve(
            self,
            &PipeProblem,
            initial,
            time_step,
            steps,
            observer,
        )?;

        Ok(solution)
    }

    /// Steps the node temperatures forward without observing the run.
    ///
    /// # Errors
    ///
    /// See [`HeatedPipe::simulate`].
    pub fn simulate_unobserved(
        &self,
        initial: PipeTemperatures,
        config: &SimulationConfig,
    ) -> Result<Simulation, SimulateError> {
        self.simulate(initial, config, ())
    }
}
