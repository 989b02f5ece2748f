//! Capability traits used to query and construct fluid states.
//!
//! A model implements only the traits for the properties it can provide.
//! Code that needs, say, `cp` and a temperature-built state bounds on
//! [`HasCp`] and [`StateFrom`] and works with any such model.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use state_from::StateFrom;
