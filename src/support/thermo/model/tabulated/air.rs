use uom::si::{
    f64::{MassDensity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    interpolate::{Extrapolate, InterpError},
    thermo::{
        PropertyError, State,
        capability::{
            HasDensity, HasKinematicViscosity, HasThermalConductivity, HasThermalDiffusivity,
            StateFrom, ThermoModel,
        },
        fluid::Air,
    },
    units::{KinematicViscosity, ThermalDiffusivity, square_meters_per_second},
};

use super::PropertyTable;

const TEMPERATURES: [f64; 5] = [250.0, 300.0, 350.0, 400.0, 450.0];
// The 450 K density is kept as published, although it sits above the
// ideal-gas trend, so the density spline is not monotonic near 450 K.
const DENSITY: [f64; 5] = [1.4235, 1.1771, 1.0085, 0.88213, 0.8770];
const KINEMATIC_VISCOSITY: [f64; 5] = [11.44e-6, 15.89e-6, 20.92e-6, 26.41e-6, 32.39e-6];
const THERMAL_DIFFUSIVITY: [f64; 5] = [15.9e-6, 22.5e-6, 29.9e-6, 38.3e-6, 47.2e-6];
const THERMAL_CONDUCTIVITY: [f64; 5] = [22.3e-3, 26.3e-3, 30.0e-3, 33.8e-3, 37.3e-3];

/// Properties available from [`TabulatedAir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirProperty {
    /// Density, kg/m³.
    Density,
    /// Kinematic viscosity, m²/s.
    KinematicViscosity,
    /// Thermal diffusivity, m²/s.
    ThermalDiffusivity,
    /// Thermal conductivity, W/(m·K).
    ThermalConductivity,
}

/// Dry air properties at atmospheric pressure between 250 K and 450 K.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedAir {
    table: PropertyTable<AirProperty>,
}

impl TabulatedAir {
    /// Builds the air property splines.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError`] if the tabulated data cannot be splined.
    pub fn new() -> Result<Self, InterpError> {
        let temperatures = TEMPERATURES.map(ThermodynamicTemperature::new::<kelvin>);
        let table = PropertyTable::new(
            &temperatures,
            [
                (AirProperty::Density, DENSITY.to_vec()),
                (AirProperty::KinematicViscosity, KINEMATIC_VISCOSITY.to_vec()),
                (AirProperty::ThermalDiffusivity, THERMAL_DIFFUSIVITY.to_vec()),
                (AirProperty::ThermalConductivity, THERMAL_CONDUCTIVITY.to_vec()),
            ],
        )?;

        Ok(Self { table })
    }

    /// Returns this model with a different extrapolation policy.
    #[must_use]
    pub fn with_extrapolate(self, extrapolate: Extrapolate) -> Self {
        Self {
            table: self.table.with_extrapolate(extrapolate),
        }
    }

    /// Returns the underlying property table.
    #[must_use]
    pub fn table(&self) -> &PropertyTable<AirProperty> {
        &self.table
    }

    /// Returns the density at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn density_at(&self, t: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        let value = self.table.value(AirProperty::Density, t)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(value))
    }

    /// Returns the kinematic viscosity at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn kinematic_viscosity_at(
        &self,
        t: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        let value = self.table.value(AirProperty::KinematicViscosity, t)?;
        Ok(square_meters_per_second(value))
    }

    /// Returns the thermal diffusivity at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn thermal_diffusivity_at(
        &self,
        t: ThermodynamicTemperature,
    ) -> Result<ThermalDiffusivity, PropertyError> {
        let value = self.table.value(AirProperty::ThermalDiffusivity, t)?;
        Ok(square_meters_per_second(value))
    }

    /// Returns the thermal conductivity at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn thermal_conductivity_at(
        &self,
        t: ThermodynamicTemperature,
    ) -> Result<ThermalConductivity, PropertyError> {
        let value = self.table.value(AirProperty::ThermalConductivity, t)?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(value))
    }
}

impl ThermoModel for TabulatedAir {
    type Fluid = Air;
}

impl HasDensity for TabulatedAir {
    fn density(&self, state: &State<Air>) -> Result<MassDensity, PropertyError> {
        self.density_at(state.temperature)
    }
}

impl HasKinematicViscosity for TabulatedAir {
    fn kinematic_viscosity(
        &self,
        state: &State<Air>,
    ) -> Result<KinematicViscosity, PropertyError> {
        self.kinematic_viscosity_at(state.temperature)
    }
}

impl HasThermalDiffusivity for TabulatedAir {
    fn thermal_diffusivity(
        &self,
        state: &State<Air>,
    ) -> Result<ThermalDiffusivity, PropertyError> {
        self.thermal_diffusivity_at(state.temperature)
    }
}

impl HasThermalConductivity for TabulatedAir {
    fn thermal_conductivity(
        &self,
        state: &State<Air>,
    ) -> Result<ThermalConductivity, PropertyError> {
        self.thermal_conductivity_at(state.temperature)
    }
}

impl StateFrom<(Air, ThermodynamicTemperature)> for TabulatedAir {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature): (Air, ThermodynamicTemperature),
    ) -> Result<State<Air>, Self::Error> {
        let density = self.density_at(temperature)?;
        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<ThermodynamicTemperature> for TabulatedAir {
    type Error = PropertyError;

    fn state_from(&self, temperature: ThermodynamicTemperature) -> Result<State<Air>, Self::Error> {
        self.state_from((Air, temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn air() -> TabulatedAir {
        TabulatedAir::new().expect("air table must spline")
    }

    fn sweep(points: u32) -> Vec<ThermodynamicTemperature> {
        (0..=points)
            .map(|i| 250.0 + 200.0 * f64::from(i) / f64::from(points))
            .map(ThermodynamicTemperature::new::<kelvin>)
            .collect()
    }

    #[test]
    fn reproduces_samples() {
        let air = air();
        let temps = TEMPERATURES.map(ThermodynamicTemperature::new::<kelvin>);

        for property in [
            AirProperty::Density,
            AirProperty::KinematicViscosity,
            AirProperty::ThermalDiffusivity,
            AirProperty::ThermalConductivity,
        ] {
            let samples = air.table().samples(property).unwrap().to_vec();
            let values = air.table().values(property, &temps).unwrap();
            for (value, sample) in values.iter().zip(&samples) {
                assert_relative_eq!(*value, *sample, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn transport_properties_increase_with_temperature() -> Result<(), PropertyError> {
        let air = air();
        let temps = sweep(1000);

        for property in [
            AirProperty::KinematicViscosity,
            AirProperty::ThermalDiffusivity,
            AirProperty::ThermalConductivity,
        ] {
            let values = air.table().values(property, &temps)?;
            assert!(values.windows(2).all(|w| w[1] > w[0]), "{property:?}");
        }

        Ok(())
    }

    #[test]
    fn typed_accessors_use_si_values() -> Result<(), PropertyError> {
        let air = air();
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let state: State<Air> = air.state_from(t)?;

        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.1771,
            max_relative = 1e-12,
        );
        assert_relative_eq!(air.kinematic_viscosity(&state)?.value, 15.89e-6, max_relative = 1e-12);
        assert_relative_eq!(air.thermal_diffusivity(&state)?.value, 22.5e-6, max_relative = 1e-12);
        assert_relative_eq!(
            air.thermal_conductivity(&state)?
                .get::<watt_per_meter_kelvin>(),
            26.3e-3,
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn between_samples_stays_between_neighbors() -> Result<(), PropertyError> {
        let air = air();
        let k = air.thermal_conductivity_at(ThermodynamicTemperature::new::<kelvin>(325.0))?;
        let k = k.get::<watt_per_meter_kelvin>();

        assert!(k > 26.3e-3 && k < 30.0e-3);
        Ok(())
    }

    #[test]
    fn clamps_when_asked() -> Result<(), PropertyError> {
        let air = air().with_extrapolate(Extrapolate::Clamp);
        let cold = ThermodynamicTemperature::new::<kelvin>(200.0);

        assert_relative_eq!(
            air.density_at(cold)?.get::<kilogram_per_cubic_meter>(),
            1.4235,
            max_relative = 1e-12
        );
        Ok(())
    }
}
