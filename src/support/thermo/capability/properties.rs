use uom::si::f64::{
    DynamicViscosity, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity,
};

use crate::support::thermo::{PropertyError, State};
use crate::support::units::{KinematicViscosity, ThermalDiffusivity};

use super::ThermoModel;

pub trait HasDensity: ThermoModel {
    /// Returns the density the model predicts at the state's temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, state: &State<Self::Fluid>) -> Result<MassDensity, PropertyError>;
}

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the conductivity cannot be calculated.
    fn thermal_conductivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalConductivity, PropertyError>;
}

pub trait HasDynamicViscosity: ThermoModel {
    /// Returns the dynamic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn dynamic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<DynamicViscosity, PropertyError>;
}

pub trait HasKinematicViscosity: ThermoModel {
    /// Returns the kinematic viscosity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn kinematic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<KinematicViscosity, PropertyError>;
}

pub trait HasPrandtlNumber: ThermoModel {
    /// Returns the Prandtl number for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the Prandtl number cannot be calculated.
    fn prandtl_number(&self, state: &State<Self::Fluid>) -> Result<Ratio, PropertyError>;
}

pub trait HasThermalDiffusivity: ThermoModel {
    /// Returns the thermal diffusivity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the diffusivity cannot be calculated.
    fn thermal_diffusivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalDiffusivity, PropertyError>;
}
