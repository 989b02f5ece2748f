//! Finite-volume energy balance for fluid flowing through a heated pipe.
//!
//! The pipe is split into equal control volumes along its axis. Each volume
//! exchanges enthalpy with its upstream neighbor through the flow and gains
//! heat from the wall, and node temperatures are stepped forward in time with
//! forward Euler.

mod error;
mod grid;
mod heated_pipe;
mod parameters;
mod simulate;
mod temperatures;

#[cfg(test)]
mod test_support;

pub use error::PipeError;
pub use grid::Grid;
pub use heated_pipe::HeatedPipe;
pub use parameters::{FluidProperties, HeatedPipeParameters};
pub use simulate::{
    PipeInput, PipeOutput, PipeProblem, SimulateError, Simulation, SimulationConfig,
    SimulationEvent,
};
pub use temperatures::PipeTemperatures;
