use std::fmt::Debug;

use ndarray::{Array1, ArrayView1};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    interpolate::{CubicSpline, Extrapolate, InterpError},
    thermo::PropertyError,
};

/// Cubic-spline property columns sampled at shared temperatures.
///
/// `P` is a key identifying each property, typically a fieldless enum.
/// Values go in and come out as plain `f64` in SI base units; the typed
/// wrappers ([`TabulatedWater`](super::TabulatedWater),
/// [`TabulatedAir`](super::TabulatedAir)) attach units.
///
/// # Example
///
/// ```
/// use pipe_heat_models::support::thermo::model::PropertyTable;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Oil {
///     Density,
/// }
///
/// let temps = [280.0, 300.0, 320.0, 340.0].map(ThermodynamicTemperature::new::<kelvin>);
/// let table = PropertyTable::new(&temps, [(Oil::Density, vec![890.0, 877.0, 864.0, 851.0])]).unwrap();
///
/// let rho = table.value(Oil::Density, temps[1]).unwrap();
/// assert!((rho - 877.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable<P> {
    columns: Vec<(P, CubicSpline)>,
}

impl<P: Copy + PartialEq + Debug> PropertyTable<P> {
    /// Builds a table from sample temperatures and one sample column per property.
    ///
    /// If a property key appears more than once, the first column is used.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError`] if any column cannot be splined against the
    /// temperatures (wrong length, non-finite values, too few samples, or
    /// temperatures that are not strictly increasing).
    pub fn new(
        temperatures: &[ThermodynamicTemperature],
        columns: impl IntoIterator<Item = (P, Vec<f64>)>,
    ) -> Result<Self, InterpError> {
        let x: Array1<f64> = temperatures.iter().map(|t| t.get::<kelvin>()).collect();

        let columns = columns
            .into_iter()
            .map(|(property, samples)| {
                let spline = CubicSpline::new(x.clone(), samples.into(), Extrapolate::default())?;
                Ok((property, spline))
            })
            .collect::<Result<Vec<_>, InterpError>>()?;

        Ok(Self { columns })
    }

    /// Returns this table with a different extrapolation policy.
    ///
    /// The default policy is [`Extrapolate::Error`].
    #[must_use]
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        for (_, spline) in &mut self.columns {
            spline.set_extrapolate(extrapolate);
        }
        self
    }

    /// Returns the lowest and highest sampled temperatures.
    ///
    /// Returns `None` for a table without columns.
    #[must_use]
    pub fn temperature_range(&self) -> Option<(ThermodynamicTemperature, ThermodynamicTemperature)> {
        self.columns.first().map(|(_, spline)| {
            let (min, max) = spline.bounds();
            (
                ThermodynamicTemperature::new::<kelvin>(min),
                ThermodynamicTemperature::new::<kelvin>(max),
            )
        })
    }

    /// Returns the raw samples for a property, in SI base units.
    #[must_use]
    pub fn samples(&self, property: P) -> Option<ArrayView1<'_, f64>> {
        self.spline(property).map(CubicSpline::values)
    }

    /// Interpolates a property at one temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the temperature is outside
    /// the sampled range and the policy is [`Extrapolate::Error`], and
    /// [`PropertyError::Calculation`] if the table has no column for `property`.
    pub fn value(
        &self,
        property: P,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        let spline = self
            .spline(property)
            .ok_or_else(|| PropertyError::Calculation {
                context: format!("no samples for {property:?}"),
            })?;

        spline
            .interpolate(temperature.get::<kelvin>())
            .map_err(|err| PropertyError::interpolation(&format!("{property:?}"), &err))
    }

    /// Interpolates a property at each of several temperatures.
    ///
    /// # Errors
    ///
    /// Fails on the first temperature for which [`Self::value`] fails.
    pub fn values(
        &self,
        property: P,
        temperatures: &[ThermodynamicTemperature],
    ) -> Result<Vec<f64>, PropertyError> {
        temperatures
            .iter()
            .map(|&t| self.value(property, t))
            .collect()
    }

    fn spline(&self, property: P) -> Option<&CubicSpline> {
        self.columns
            .iter()
            .find(|(key, _)| *key == property)
            .map(|(_, spline)| spline)
    }
}
