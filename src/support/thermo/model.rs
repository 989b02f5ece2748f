//! Fluid property models.

pub mod tabulated;

pub use tabulated::{AirProperty, PropertyTable, TabulatedAir, TabulatedWater, WaterProperty};
