use uom::si::{
    f64::{
        HeatFluxDensity, Length, MassDensity, MassRate, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError,
    capability::{HasCp, StateFrom},
};

/// Constant fluid properties used by the energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: MassDensity,
    pub cp: SpecificHeatCapacity,
}

impl FluidProperties {
    /// Evaluates density and `cp` from a property model at one temperature.
    ///
    /// The pipe model holds these constant, so pick a temperature
    /// representative of the run (for example the mean of inlet and outlet).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the model cannot evaluate the state.
    pub fn from_model<M>(
        model: &M,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError>
    where
        M: HasCp + StateFrom<ThermodynamicTemperature, Error = PropertyError>,
    {
        let state = model.state_from(temperature)?;
        let cp = model.cp(&state)?;

        Ok(Self {
            density: state.density,
            cp,
        })
    }
}

/// Water at the constants the reference case was set up with.
impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
        }
    }
}

/// Inputs describing a heated pipe.
///
/// The default is the reference case: a 50 m pipe of 0.1 m radius split into
/// 100 nodes, carrying 3 kg/s of water that enters at 400 K, with 100 kW/m²
/// applied at the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatedPipeParameters {
    pub length: Length,
    pub radius: Length,
    pub nodes: usize,
    pub mass_flow: MassRate,
    pub fluid: FluidProperties,
    pub inlet_temperature: ThermodynamicTemperature,
    /// Heat flux into the fluid per unit wall area. Negative values cool.
    pub heat_flux: HeatFluxDensity,
}

impl Default for HeatedPipeParameters {
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(50.0),
            radius: Length::new::<meter>(0.1),
            nodes: 100,
            mass_flow: MassRate::new::<kilogram_per_second>(3.0),
            fluid: FluidProperties::default(),
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(400.0),
            heat_flux: HeatFluxDensity::new::<watt_per_square_meter>(100_000.0),
        }
    }
}

impl HeatedPipeParameters {
    /// Returns these parameters with different fluid properties.
    #[must_use]
    pub fn with_fluid(mut self, fluid: FluidProperties) -> Self {
        self.fluid = fluid;
        self
    }
}
