use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` captures the temperature and density of a specific fluid.
/// The `Fluid` type parameter is usually a marker type such as
/// [`Air`](crate::support::thermo::fluid::Air) or
/// [`Water`](crate::support::thermo::fluid::Water).
///
/// `State` is the input to the capability traits in
/// [`capability`](crate::support::thermo::capability).
///
/// # Example
///
/// ```
/// use pipe_heat_models::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::kelvin,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(996.6),
///     Water,
/// );
/// assert_eq!(state.fluid, Water);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
