//! Transient heating of fluid flowing through a pipe.
//!
//! [`HeatedPipe`] is a [`twine_core::Model`] whose input is the node
//! temperature field and whose output is `dT/dt` at each node. Paired with
//! [`PipeProblem`] it can be stepped by any `twine` ODE solver;
//! [`HeatedPipe::simulate`] does so with forward Euler.
//!
//! # Example
//!
//! ```
//! use pipe_heat_models::models::thermal::pipe::{
//!     HeatedPipe, HeatedPipeParameters, SimulationConfig,
//! };
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let pipe = HeatedPipe::new(HeatedPipeParameters::default()).unwrap();
//! let initial = pipe.uniform_temperatures(ThermodynamicTemperature::new::<kelvin>(300.0));
//!
//! let simulation = pipe
//!     .simulate_unobserved(initial, &SimulationConfig::default())
//!     .unwrap();
//!
//! let outlet = simulation.history.last().unwrap().input.temperatures.outlet().unwrap();
//! assert!(outlet.get::<kelvin>() > 600.0);
//! ```

mod core;

pub use self::core::{
    FluidProperties, Grid, HeatedPipe, HeatedPipeParameters, PipeError, PipeInput, PipeOutput,
    PipeProblem, PipeTemperatures, SimulateError, Simulation, SimulationConfig, SimulationEvent,
};
