//! Model and ODE problem wiring for time-stepping a heated pipe.

use std::convert::Infallible;

use twine_core::{DerivativeOf, Model, OdeProblem};
use uom::si::f64::Time;

use crate::{
    models::thermal::pipe::core::{HeatedPipe, PipeError, PipeTemperatures},
    support::units::TemperatureRate,
};

/// Pipe state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeInput {
    /// Time since the start of the run.
    pub time: Time,

    /// Fluid temperature at each node.
    pub temperatures: PipeTemperatures,
}

/// Rate of change of each node temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeOutput {
    pub rates: Vec<TemperatureRate>,
}

impl Model for HeatedPipe {
    type Input = PipeInput;
    type Output = PipeOutput;
    type Error = PipeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let rates = self.rates(&input.temperatures)?;
        Ok(PipeOutput { rates })
    }
}

/// Integrates the node temperatures, advancing time by each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeProblem;

impl OdeProblem for PipeProblem {
    type Input = PipeInput;
    type Output = PipeOutput;
    type Delta = Time;
    type State = PipeTemperatures;
    type Error = Infallible;

    fn state(&self, input: &PipeInput) -> Result<PipeTemperatures, Infallible> {
        Ok(input.temperatures.clone())
    }

    fn derivative(
        &self,
        _input: &PipeInput,
        output: &PipeOutput,
    ) -> Result<DerivativeOf<PipeTemperatures, Time>, Infallible> {
        Ok(output.rates.clone())
    }

    fn build_input(
        &self,
        base: &PipeInput,
        state: &PipeTemperatures,
        dt: &Time,
    ) -> Result<PipeInput, Infallible> {
        Ok(PipeInput {
            time: base.time + *dt,
            temperatures: state.clone(),
        })
    }
}
