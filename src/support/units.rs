//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. This module adds what the
//! pipe model and property tables need but [`uom`] doesn't provide directly.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use pipe_heat_models::support::units::TemperatureDifference;
//!
//! let inlet = ThermodynamicTemperature::new::<kelvin>(400.0);
//! let node = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let delta_t = inlet.minus(node);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Diffusivities and rates
//!
//! Kinematic viscosity and thermal diffusivity are both m²/s, and the pipe's
//! energy balance produces K/s. Aliases for these live in this module together
//! with constructors taking SI values.

mod quantities;
mod temperature_difference;

pub use quantities::{
    KinematicViscosity, TemperatureRate, ThermalDiffusivity, kelvin_per_second,
    square_meters_per_second,
};
pub use temperature_difference::TemperatureDifference;
