use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which inputs a model can use
/// to construct a state. If a model does not implement `StateFrom<Input>`,
/// that input is simply not supported.
///
/// The tabulated models accept `(Fluid, ThermodynamicTemperature)` and, since
/// their fluids are marker types, a bare `ThermodynamicTemperature`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
