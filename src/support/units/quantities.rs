use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, TemperatureInterval, Time},
        temperature_interval::kelvin,
        time::second,
    },
    typenum::{N1, P1, P2, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Rate of change of temperature, K/s in SI.
pub type TemperatureRate = Quantity<ISQ<Z0, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates an m²/s quantity (kinematic viscosity or thermal diffusivity).
#[must_use]
pub fn square_meters_per_second(value: f64) -> KinematicViscosity {
    Area::new::<square_meter>(value) / Time::new::<second>(1.0)
}

/// Creates a temperature rate in K/s.
#[must_use]
pub fn kelvin_per_second(value: f64) -> TemperatureRate {
    TemperatureInterval::new::<kelvin>(value) / Time::new::<second>(1.0)
}
