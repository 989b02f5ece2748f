//! Fluid property modeling.
//!
//! Properties are exposed through capability traits in [`capability`], each
//! taking a [`State`]. The [`model::tabulated`] models back those traits with
//! cubic splines through published property tables.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
