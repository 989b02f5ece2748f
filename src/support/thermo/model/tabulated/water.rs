use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    interpolate::{Extrapolate, InterpError},
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasDensity, HasDynamicViscosity, HasKinematicViscosity, HasPrandtlNumber,
            HasThermalConductivity, StateFrom, ThermoModel,
        },
        fluid::Water,
    },
    units::{KinematicViscosity, square_meters_per_second},
};

use super::PropertyTable;

const TEMPERATURES: [f64; 5] = [278.15, 298.15, 323.15, 348.15, 368.15];
const DENSITY: [f64; 5] = [1000.0, 997.1, 988.0, 974.9, 961.9];
const CP: [f64; 5] = [4200.0, 4183.0, 4181.0, 4190.0, 4210.0];
const THERMAL_CONDUCTIVITY: [f64; 5] = [0.5576, 0.5948, 0.6305, 0.653, 0.6634];
const DYNAMIC_VISCOSITY: [f64; 5] = [0.001_519, 0.000_890_5, 0.000_547_1, 0.000_377_9, 0.000_297_4];
const PRANDTL: [f64; 5] = [11.44, 6.263, 3.628, 2.425, 1.888];

/// Properties available from [`TabulatedWater`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterProperty {
    /// Density, kg/m³.
    Density,
    /// Specific heat capacity, J/(kg·K).
    Cp,
    /// Thermal conductivity, W/(m·K).
    ThermalConductivity,
    /// Dynamic viscosity, Pa·s.
    DynamicViscosity,
    /// Kinematic viscosity, m²/s.
    KinematicViscosity,
    /// Prandtl number.
    PrandtlNumber,
}

/// Liquid water properties between 5 °C and 95 °C.
///
/// Kinematic viscosity is tabulated as `μ/ρ` at each sample temperature and
/// splined on its own, rather than computed from the two splines.
///
/// # Example
///
/// ```
/// use pipe_heat_models::support::thermo::model::TabulatedWater;
/// use uom::si::{
///     f64::ThermodynamicTemperature, mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let water = TabulatedWater::new().unwrap();
/// let rho = water.density_at(ThermodynamicTemperature::new::<degree_celsius>(25.0)).unwrap();
/// assert!((rho.get::<kilogram_per_cubic_meter>() - 997.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedWater {
    table: PropertyTable<WaterProperty>,
}

impl TabulatedWater {
    /// Builds the water property splines.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError`] if the tabulated data cannot be splined.
    pub fn new() -> Result<Self, InterpError> {
        let temperatures = TEMPERATURES.map(ThermodynamicTemperature::new::<kelvin>);

        let kinematic_viscosity: Vec<f64> = DYNAMIC_VISCOSITY
            .iter()
            .zip(DENSITY)
            .map(|(mu, rho)| mu / rho)
            .collect();

        let table = PropertyTable::new(
            &temperatures,
            [
                (WaterProperty::Density, DENSITY.to_vec()),
                (WaterProperty::Cp, CP.to_vec()),
                (
                    WaterProperty::ThermalConductivity,
                    THERMAL_CONDUCTIVITY.to_vec(),
                ),
                (WaterProperty::DynamicViscosity, DYNAMIC_VISCOSITY.to_vec()),
                (WaterProperty::KinematicViscosity, kinematic_viscosity),
                (WaterProperty::PrandtlNumber, PRANDTL.to_vec()),
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
    pub fn table(&self) -> &PropertyTable<WaterProperty> {
        &self.table
    }

    /// Returns the density at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn density_at(&self, t: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        let value = self.table.value(WaterProperty::Density, t)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(value))
    }

    /// Returns the specific heat capacity at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn cp_at(&self, t: ThermodynamicTemperature) -> Result<SpecificHeatCapacity, PropertyError> {
        let value = self.table.value(WaterProperty::Cp, t)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value))
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
        let value = self.table.value(WaterProperty::ThermalConductivity, t)?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(value))
    }

    /// Returns the dynamic viscosity at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn dynamic_viscosity_at(
        &self,
        t: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        let value = self.table.value(WaterProperty::DynamicViscosity, t)?;
        Ok(DynamicViscosity::new::<pascal_second>(value))
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
        let value = self.table.value(WaterProperty::KinematicViscosity, t)?;
        Ok(square_meters_per_second(value))
    }

    /// Returns the Prandtl number at a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be evaluated.
    pub fn prandtl_number_at(&self, t: ThermodynamicTemperature) -> Result<Ratio, PropertyError> {
        let value = self.table.value(WaterProperty::PrandtlNumber, t)?;
        Ok(Ratio::new::<ratio>(value))
    }
}

impl ThermoModel for TabulatedWater {
    type Fluid = Water;
}

impl HasDensity for TabulatedWater {
    fn density(&self, state: &State<Water>) -> Result<MassDensity, PropertyError> {
        self.density_at(state.temperature)
    }
}

impl HasCp for TabulatedWater {
    fn cp(&self, state: &State<Water>) -> Result<SpecificHeatCapacity, PropertyError> {
        self.cp_at(state.temperature)
    }
}

impl HasThermalConductivity for TabulatedWater {
    fn thermal_conductivity(
        &self,
        state: &State<Water>,
    ) -> Result<ThermalConductivity, PropertyError> {
        self.thermal_conductivity_at(state.temperature)
    }
}

impl HasDynamicViscosity for TabulatedWater {
    fn dynamic_viscosity(&self, state: &State<Water>) -> Result<DynamicViscosity, PropertyError> {
        self.dynamic_viscosity_at(state.temperature)
    }
}

impl HasKinematicViscosity for TabulatedWater {
    fn kinematic_viscosity(
        &self,
        state: &State<Water>,
    ) -> Result<KinematicViscosity, PropertyError> {
        self.kinematic_viscosity_at(state.temperature)
    }
}

impl HasPrandtlNumber for TabulatedWater {
    fn prandtl_number(&self, state: &State<Water>) -> Result<Ratio, PropertyError> {
        self.prandtl_number_at(state.temperature)
    }
}

/// Builds a state whose density comes from the table.
impl StateFrom<(Water, ThermodynamicTemperature)> for TabulatedWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature): (Water, ThermodynamicTemperature),
    ) -> Result<State<Water>, Self::Error> {
        let density = self.density_at(temperature)?;
        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<ThermodynamicTemperature> for TabulatedWater {
    type Error = PropertyError;

    fn state_from(&self, temperature: ThermodynamicTemperature) -> Result<State<Water>, Self::Error> {
        self.state_from((Water, temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn water() -> TabulatedWater {
        TabulatedWater::new().expect("water table must spline")
    }

    fn kelvins(values: &[f64]) -> Vec<ThermodynamicTemperature> {
        values
            .iter()
            .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
            .collect()
    }

    /// Evenly spaced temperatures spanning the table.
    fn sweep(points: u32) -> Vec<ThermodynamicTemperature> {
        let (lo, hi) = (TEMPERATURES[0], TEMPERATURES[4]);
        (0..=points)
            .map(|i| lo + (hi - lo) * f64::from(i) / f64::from(points))
            .map(ThermodynamicTemperature::new::<kelvin>)
            .collect()
    }

    #[test]
    fn reproduces_samples() {
        let water = water();
        let table = water.table();

        for property in [
            WaterProperty::Density,
            WaterProperty::Cp,
            WaterProperty::ThermalConductivity,
            WaterProperty::DynamicViscosity,
            WaterProperty::KinematicViscosity,
            WaterProperty::PrandtlNumber,
        ] {
            let samples = table.samples(property).unwrap().to_vec();
            let values = table.values(property, &kelvins(&TEMPERATURES)).unwrap();
            for (value, sample) in values.iter().zip(&samples) {
                assert_relative_eq!(*value, *sample, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn endpoints_return_tabulated_values() -> Result<(), PropertyError> {
        let water = water();
        let cold = ThermodynamicTemperature::new::<kelvin>(278.15);
        let hot = ThermodynamicTemperature::new::<kelvin>(368.15);

        assert_relative_eq!(
            water.density_at(cold)?.get::<kilogram_per_cubic_meter>(),
            1000.0,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            water.density_at(hot)?.get::<kilogram_per_cubic_meter>(),
            961.9,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            water.cp_at(hot)?.get::<joule_per_kilogram_kelvin>(),
            4210.0,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            water.prandtl_number_at(cold)?.get::<ratio>(),
            11.44,
            max_relative = 1e-12,
        );

        Ok(())
    }

    #[test]
    fn density_decreases_with_temperature() -> Result<(), PropertyError> {
        let water = water();
        let densities = water.table().values(WaterProperty::Density, &sweep(900))?;

        assert!(densities.windows(2).all(|w| w[1] < w[0]));
        Ok(())
    }

    #[test]
    fn viscosity_decreases_and_conductivity_increases() -> Result<(), PropertyError> {
        let water = water();
        let temps = sweep(900);

        let mu = water.table().values(WaterProperty::DynamicViscosity, &temps)?;
        assert!(mu.windows(2).all(|w| w[1] < w[0]));

        let k = water
            .table()
            .values(WaterProperty::ThermalConductivity, &temps)?;
        assert!(k.windows(2).all(|w| w[1] > w[0]));

        Ok(())
    }

    #[test]
    fn kinematic_viscosity_is_mu_over_rho_at_samples() -> Result<(), PropertyError> {
        let water = water();
        let t = ThermodynamicTemperature::new::<kelvin>(323.15);

        let nu = water.kinematic_viscosity_at(t)?;
        assert_relative_eq!(nu.value, 0.000_547_1 / 988.0, max_relative = 1e-10);

        Ok(())
    }

    #[test]
    fn state_carries_tabulated_density() -> Result<(), PropertyError> {
        let water = water();
        let state: State<Water> =
            water.state_from(ThermodynamicTemperature::new::<kelvin>(298.15))?;

        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            997.1,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            water.cp(&state)?.get::<joule_per_kilogram_kelvin>(),
            4183.0,
            max_relative = 1e-12,
        );
        assert_eq!(water.density(&state)?, state.density);

        Ok(())
    }

    #[test]
    fn refuses_to_extrapolate_by_default() {
        let water = water();
        let boiling = ThermodynamicTemperature::new::<kelvin>(373.15);

        assert!(matches!(
            water.density_at(boiling),
            Err(PropertyError::OutOfDomain { .. })
        ));

        let rho = water
            .with_extrapolate(Extrapolate::Enable)
            .density_at(boiling)
            .unwrap();
        assert!(rho.get::<kilogram_per_cubic_meter>() < 961.9);
    }
}
