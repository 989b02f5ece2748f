use thiserror::Error;
use uom::si::f64::{
    HeatFluxDensity, Length, MassDensity, MassRate, SpecificHeatCapacity, ThermodynamicTemperature,
};

/// Errors from building or evaluating a [`HeatedPipe`](super::HeatedPipe).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipeError {
    #[error("invalid pipe length: {length:?}")]
    Length { length: Length },

    #[error("invalid pipe radius: {radius:?}")]
    Radius { radius: Length },

    #[error("node count must be at least 1")]
    Nodes,

    #[error("invalid mass flow rate: {mass_flow:?}")]
    MassFlow { mass_flow: MassRate },

    #[error("invalid fluid density: {density:?}")]
    Density { density: MassDensity },

    #[error("invalid fluid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },

    #[error("invalid inlet temperature: {temperature:?}")]
    InletTemperature {
        temperature: ThermodynamicTemperature,
    },

    #[error("heat flux must be finite: {heat_flux:?}")]
    HeatFlux { heat_flux: HeatFluxDensity },

    /// A temperature field does not match the pipe's grid.
    #[error("expected {expected} node temperatures, got {got}")]
    NodeCount { expected: usize, got: usize },
}
