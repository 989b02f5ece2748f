use ndarray::{Array1, ArrayView1};
use ninterp::{prelude::Interp1D, strategy::CubicC2};

use super::{Extrapolate, InterpError};

/// A not-a-knot cubic spline through a set of samples.
///
/// The spline is twice continuously differentiable and, in addition, has a
/// continuous third derivative at the second and second-to-last knots.
/// With that end condition any cubic polynomial is reproduced exactly.
/// At least four samples are required.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline(Interp1D<f64, CubicC2<f64>>);

impl CubicSpline {
    /// Builds a spline through `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::NonFinite`] if any sample is `NaN` or infinite,
    /// and [`InterpError::Validation`] if fewer than four samples are given,
    /// the arrays differ in length, or `x` is not strictly increasing.
    pub fn new<T: Into<Array1<f64>>>(
        x: T,
        y: T,
        extrapolate: Extrapolate,
    ) -> Result<Self, InterpError> {
        let x = x.into();
        let y = y.into();

        if let Some(index) = x
            .iter()
            .zip(&y)
            .position(|(xi, yi)| !xi.is_finite() || !yi.is_finite())
        {
            return Err(InterpError::NonFinite { index });
        }

        Ok(Self(Interp1D::new(
            x,
            y,
            CubicC2::not_a_knot(),
            extrapolate.into(),
        )?))
    }

    /// Changes how queries outside the sampled range are handled.
    pub fn set_extrapolate(&mut self, extrapolate: Extrapolate) {
        self.0.extrapolate = extrapolate.into();
    }

    /// Returns the sample `y` values.
    #[must_use]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.0.data.values.view()
    }

    /// Returns the sampled range `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        let x = &self.0.data.grid[0];
        (x[0], x[x.len() - 1])
    }

    /// Evaluates the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::NotANumber`] for a `NaN` query, and
    /// [`InterpError::Interpolation`] if `x` is out of range under
    /// [`Extrapolate::Error`].
    pub fn interpolate(&self, x: f64) -> Result<f64, InterpError> {
        if x.is_nan() {
            return Err(InterpError::NotANumber);
        }
        self.0.interpolate(&[x]).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use ninterp::error::{InterpolateError, ValidateError};

    fn cubic(x: f64) -> f64 {
        2.0 * x.powi(3) - x.powi(2) + 3.0 * x - 5.0
    }

    #[test]
    fn reproduces_cubic_on_uneven_knots() {
        let x = array![0.0, 1.0, 2.5, 3.0, 4.5];
        let y = x.mapv(cubic);
        let spline = CubicSpline::new(x, y, Extrapolate::Enable).unwrap();

        for q in [0.3, 1.7, 2.9, 4.1] {
            assert_relative_eq!(spline.interpolate(q).unwrap(), cubic(q), epsilon = 1e-9);
        }

        // The end pieces are the same cubic, so extrapolation is exact too.
        assert_relative_eq!(spline.interpolate(5.5).unwrap(), cubic(5.5), epsilon = 1e-9);
        assert_relative_eq!(spline.interpolate(-1.0).unwrap(), cubic(-1.0), epsilon = 1e-9);
    }

    #[test]
    fn passes_through_samples() {
        let x = vec![250.0, 300.0, 350.0, 400.0, 450.0];
        let y = vec![22.3e-3, 26.3e-3, 30.0e-3, 33.8e-3, 37.3e-3];
        let spline = CubicSpline::new(x.clone(), y.clone(), Extrapolate::Error).unwrap();

        for (xi, yi) in x.iter().zip(&y) {
            assert_relative_eq!(spline.interpolate(*xi).unwrap(), *yi, max_relative = 1e-12);
        }
        assert_eq!(spline.values().to_vec(), y);
        assert_eq!(spline.bounds(), (250.0, 450.0));
    }

    #[test]
    fn extrapolation_policies() {
        let mut spline = CubicSpline::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 2.0, 4.0, 8.0],
            Extrapolate::Error,
        )
        .unwrap();

        assert!(matches!(
            spline.interpolate(3.5),
            Err(InterpError::Interpolation(InterpolateError::OutOfBounds(_)))
        ));
        assert_relative_eq!(spline.interpolate(3.0).unwrap(), 8.0, epsilon = 1e-12);
        assert_eq!(spline.interpolate(f64::NAN), Err(InterpError::NotANumber));

        spline.set_extrapolate(Extrapolate::Clamp);
        assert_relative_eq!(spline.interpolate(-1.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(spline.interpolate(9.0).unwrap(), 8.0, epsilon = 1e-12);

        spline.set_extrapolate(Extrapolate::Enable);
        let beyond = spline.interpolate(3.5).unwrap();
        assert!(beyond > 8.0, "{beyond}");
    }

    #[test]
    fn rejects_bad_samples() {
        let too_few =
            CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], Extrapolate::Error);
        assert!(matches!(
            too_few,
            Err(InterpError::Validation(ValidateError::Other(_)))
        ));

        let mismatched =
            CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0], Extrapolate::Error);
        assert!(matches!(
            mismatched,
            Err(InterpError::Validation(ValidateError::IncompatibleShapes(0)))
        ));

        let repeated =
            CubicSpline::new(vec![0.0, 1.0, 1.0, 3.0], vec![0.0; 4], Extrapolate::Error);
        assert!(matches!(
            repeated,
            Err(InterpError::Validation(ValidateError::NotStrictlyIncreasing(0)))
        ));

        assert_eq!(
            CubicSpline::new(
                vec![0.0, 1.0, 2.0, 3.0],
                vec![0.0, f64::NAN, 0.0, 0.0],
                Extrapolate::Error
            ),
            Err(InterpError::NonFinite { index: 1 })
        );
    }
}
