//! Temperature-dependent properties interpolated from published tables.
//!
//! A [`PropertyTable`] holds one column of samples per property, all taken at
//! the same temperatures, and fits a not-a-knot [`CubicSpline`] through each
//! column on construction. [`TabulatedWater`] and [`TabulatedAir`] wrap a
//! table with typed accessors and implement the
//! [`capability`](crate::support::thermo::capability) traits.
//!
//! # Out-of-range queries
//!
//! Tables only cover a limited temperature range. By default a query outside
//! it returns [`PropertyError::OutOfDomain`]; use `with_extrapolate` to clamp
//! or to evaluate the end cubics instead.
//!
//! # Many temperatures at once
//!
//! Scalar accessors compose with iterators:
//!
//! ```
//! use pipe_heat_models::support::thermo::model::TabulatedWater;
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let water = TabulatedWater::new().unwrap();
//! let temps = [300.0, 320.0, 340.0].map(ThermodynamicTemperature::new::<kelvin>);
//!
//! let densities = temps
//!     .iter()
//!     .map(|&t| water.density_at(t))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(densities.len(), 3);
//! ```
//!
//! [`CubicSpline`]: crate::support::interpolate::CubicSpline
//! [`PropertyError::OutOfDomain`]: crate::support::thermo::PropertyError::OutOfDomain

mod air;
mod table;
mod water;

pub use air::{AirProperty, TabulatedAir};
pub use table::PropertyTable;
pub use water::{TabulatedWater, WaterProperty};
