//! Supporting utilities shared by models.
//!
//! These modules are public but not API-stable.

pub mod constraint;
pub mod interpolate;
pub mod thermo;
pub mod units;
