//! # Pipe Heat Models
//!
//! A transient heated-pipe model and tabulated fluid properties for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific computation lives in each model's internal `core` module and
//! only moves into [`support`] once more than one model needs it.

pub mod models;
pub mod support;
