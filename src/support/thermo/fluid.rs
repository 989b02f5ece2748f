//! Canonical fluid identifiers.
//!
//! A fluid type names a substance; each model decides how that name is
//! interpreted (for the tabulated models, which table to use).

mod air;
mod water;

pub use air::Air;
pub use water::Water;
