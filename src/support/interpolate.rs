//! One-dimensional interpolation of tabulated data.
//!
//! [`CubicSpline`] wraps a `ninterp` not-a-knot cubic spline through
//! `(x, y)` samples, and [`Extrapolate`] controls what happens when a query
//! falls outside the sampled range.
//!
//! ```
//! use pipe_heat_models::support::interpolate::{CubicSpline, Extrapolate};
//!
//! let mut spline = CubicSpline::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 8.0, 27.0],
//!     Extrapolate::Error,
//! )
//! .unwrap();
//!
//! // A not-a-knot spline reproduces cubic data exactly.
//! assert!((spline.interpolate(1.5).unwrap() - 3.375).abs() < 1e-12);
//!
//! // Queries outside [0, 3] are governed by the extrapolation policy.
//! assert!(spline.interpolate(4.0).is_err());
//! spline.set_extrapolate(Extrapolate::Clamp);
//! assert!((spline.interpolate(4.0).unwrap() - 27.0).abs() < 1e-12);
//! ```

mod error;
mod extrapolate;
mod spline;

pub use error::InterpError;
pub use extrapolate::Extrapolate;
pub use spline::CubicSpline;
