use std::f64::consts::PI;

use uom::si::{
    f64::{
        Frequency, HeatFluxDensity, Length, MassRate, TemperatureInterval,
        ThermodynamicTemperature, Time,
    },
    frequency::hertz,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{TemperatureDifference, TemperatureRate},
};

use super::{FluidProperties, Grid, HeatedPipeParameters, PipeError, PipeTemperatures};

/// A pipe carrying fluid heated by a uniform wall flux.
///
/// Each node is a control volume of width `dx` whose energy balance is
///
/// ```text
/// ρ·c_p·πr²·dx · dT_i/dt = ṁ·c_p·(T_{i-1} − T_i) + q''·2πr·dx
/// ```
///
/// with `T_{-1}` the inlet temperature. Dividing through gives the form used
/// here, `dT_i/dt = f·(T_{i-1} − T_i) + h`, where `f = ṁ/(ρ·πr²·dx)` is the
/// rate at which flow replaces a node's contents and `h = q''·2πr/(ρ·c_p·πr²)`
/// is the heating rate of fluid standing still.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatedPipe {
    grid: Grid,
    radius: Length,
    mass_flow: MassRate,
    fluid: FluidProperties,
    inlet_temperature: ThermodynamicTemperature,
    heat_flux: HeatFluxDensity,
    flushing_rate: Frequency,
    heating_rate: TemperatureRate,
}

impl HeatedPipe {
    /// Validates parameters and precomputes the per-node coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError`] if any parameter is not finite, or if a
    /// geometric, flow, fluid, or inlet parameter is not strictly positive.
    pub fn new(parameters: HeatedPipeParameters) -> Result<Self, PipeError> {
        let HeatedPipeParameters {
            length,
            radius,
            nodes,
            mass_flow,
            fluid,
            inlet_temperature,
            heat_flux,
        } = parameters;

        let checked_length = StrictlyPositive::new(length)
            .ok()
            .filter(|length| length.as_ref().is_finite())
            .ok_or(PipeError::Length { length })?;
        if StrictlyPositive::check(&radius).is_err() || !radius.is_finite() {
            return Err(PipeError::Radius { radius });
        }
        let nodes = StrictlyPositive::new(nodes).map_err(|_| PipeError::Nodes)?;
        if StrictlyPositive::check(&mass_flow).is_err() || !mass_flow.is_finite() {
            return Err(PipeError::MassFlow { mass_flow });
        }
        if StrictlyPositive::check(&fluid.density).is_err() || !fluid.density.is_finite() {
            return Err(PipeError::Density {
                density: fluid.density,
            });
        }
        if StrictlyPositive::check(&fluid.cp).is_err() || !fluid.cp.is_finite() {
            return Err(PipeError::Cp { cp: fluid.cp });
        }
        let inlet_kelvin = inlet_temperature.get::<kelvin>();
        if StrictlyPositive::check(&inlet_kelvin).is_err() || !inlet_kelvin.is_finite() {
            return Err(PipeError::InletTemperature {
                temperature: inlet_temperature,
            });
        }
        if !heat_flux.is_finite() {
            return Err(PipeError::HeatFlux { heat_flux });
        }

        let grid = Grid::uniform(checked_length, nodes);
        let area = PI * radius * radius;
        let perimeter = 2.0 * PI * radius;

        let flushing_rate: Frequency = mass_flow / (fluid.density * area * grid.spacing());
        let heating_rate: TemperatureRate =
            heat_flux * perimeter / (fluid.density * fluid.cp * area);

        Ok(Self {
            grid,
            radius,
            mass_flow,
            fluid,
            inlet_temperature,
            heat_flux,
            flushing_rate,
            heating_rate,
        })
    }

    /// Returns the finite-volume grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the node center positions, inlet first.
    #[must_use]
    pub fn node_positions(&self) -> &[Length] {
        self.grid.centers()
    }

    /// Returns a field with every node at `temperature`, sized for this pipe.
    #[must_use]
    pub fn uniform_temperatures(&self, temperature: ThermodynamicTemperature) -> PipeTemperatures {
        PipeTemperatures::uniform(self.grid.len(), temperature)
    }

    /// Returns the largest stable forward Euler time step.
    ///
    /// The update for node `i` is
    /// `T_i ← (1 − f·dt)·T_i + f·dt·T_{i-1} + h·dt`, which stays bounded
    /// (and free of oscillation) only while `f·dt ≤ 1`, the Courant condition
    /// for this upwind scheme.
    #[must_use]
    pub fn max_stable_time_step(&self) -> Time {
        Time::new::<second>(1.0 / self.flushing_rate.get::<hertz>())
    }

    /// Returns the analytic steady-state temperature at each node center.
    ///
    /// `T_ss(x) = T_in + q''·2πr·x / (ṁ·c_p)`
    #[must_use]
    pub fn steady_state(&self) -> PipeTemperatures {
        let perimeter = 2.0 * PI * self.radius;
        let capacitance_rate = self.mass_flow * self.fluid.cp;

        self.grid
            .centers()
            .iter()
            .map(|&x| {
                let rise: TemperatureInterval = self.heat_flux * perimeter * x / capacitance_rate;
                self.inlet_temperature + rise
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns `dT/dt` at each node for the given field.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::NodeCount`] if the field size does not match the grid.
    pub fn rates(&self, temperatures: &PipeTemperatures) -> Result<Vec<TemperatureRate>, PipeError> {
        self.check_size(temperatures)?;

        let nodes = temperatures.as_slice();
        let upstream = std::iter::once(self.inlet_temperature).chain(nodes.iter().copied());

        Ok(upstream
            .zip(nodes)
            .map(|(t_up, &t)| self.flushing_rate * t_up.minus(t) + self.heating_rate)
            .collect())
    }

    /// Returns the L2 norm of the difference between a field and the
    /// analytic steady state.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::NodeCount`] if the field size does not match the grid.
    pub fn deviation_from_steady_state(
        &self,
        temperatures: &PipeTemperatures,
    ) -> Result<TemperatureInterval, PipeError> {
        self.check_size(temperatures)?;

        let sum_of_squares: f64 = temperatures
            .as_slice()
            .iter()
            .zip(self.steady_state().as_slice())
            .map(|(&t, &t_ss)| t.minus(t_ss).get::<delta_kelvin>().powi(2))
            .sum();

        Ok(TemperatureInterval::new::<delta_kelvin>(
            sum_of_squares.sqrt(),
        ))
    }

    fn check_size(&self, temperatures: &PipeTemperatures) -> Result<(), PipeError> {
        if temperatures.len() == self.grid.len() {
            Ok(())
        } else {
            Err(PipeError::NodeCount {
                expected: self.grid.len(),
                got: temperatures.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassDensity, SpecificHeatCapacity},
        heat_flux_density::watt_per_square_meter,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    use crate::models::thermal::pipe::core::test_support::{field, reference_pipe};

    /// Temperature rise across one node at steady state, `q''·2πr·dx/(ṁ·c_p)`.
    const NODE_RISE: f64 = 100_000.0 * 2.0 * PI * 0.1 * 0.5 / (3.0 * 4180.0);

    #[test]
    fn steady_state_is_linear_from_inlet() {
        let pipe = reference_pipe();
        let t_ss = pipe.steady_state().to_kelvin();

        assert_eq!(t_ss.len(), 100);
        assert_relative_eq!(t_ss[0], 400.0 + NODE_RISE / 2.0, epsilon = 1e-9);
        assert_relative_eq!(t_ss[99], 400.0 + NODE_RISE * 99.5, epsilon = 1e-9);

        // Energy balance over the whole pipe: ṁ·c_p·ΔT = q''·2πr·L.
        let outlet_rise = 100_000.0 * 2.0 * PI * 0.1 * 50.0 / (3.0 * 4180.0);
        assert_relative_eq!(t_ss[99] + NODE_RISE / 2.0, 400.0 + outlet_rise, epsilon = 1e-9);
    }

    #[test]
    fn rates_at_uniform_initial_field() -> Result<(), PipeError> {
        let pipe = reference_pipe();
        let cold = pipe.uniform_temperatures(ThermodynamicTemperature::new::<kelvin>(300.0));
        let rates = pipe.rates(&cold)?;

        // Only the first node sees the hotter inlet; every node is heated by the wall.
        let heating = 100_000.0 * 2.0 * PI * 0.1 / (1000.0 * 4180.0 * PI * 0.01);
        let flushing = 3.0 / (1000.0 * PI * 0.01 * 0.5);

        assert_relative_eq!(rates[0].value, flushing * 100.0 + heating, max_relative = 1e-12);
        for rate in &rates[1..] {
            assert_relative_eq!(rate.value, heating, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn rates_vanish_on_discrete_steady_state() -> Result<(), PipeError> {
        let pipe = reference_pipe();

        // The upwind scheme settles half a node above the analytic profile.
        let discrete: Vec<f64> = (1..=100_u32)
            .map(|i| 400.0 + NODE_RISE * f64::from(i))
            .collect();
        let rates = pipe.rates(&field(&discrete))?;

        for rate in rates {
            assert_relative_eq!(rate.value, 0.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn stability_limit_matches_courant_condition() {
        let pipe = reference_pipe();
        let expected = 1000.0 * PI * 0.01 * 0.5 / 3.0;

        assert_relative_eq!(
            pipe.max_stable_time_step().get::<second>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn wrong_field_size_is_rejected() {
        let pipe = reference_pipe();
        let short = field(&[300.0; 10]);

        assert_eq!(
            pipe.rates(&short),
            Err(PipeError::NodeCount {
                expected: 100,
                got: 10
            })
        );
        assert!(pipe.deviation_from_steady_state(&short).is_err());
    }

    #[test]
    fn deviation_is_zero_on_steady_state() -> Result<(), PipeError> {
        let pipe = reference_pipe();
        let deviation = pipe.deviation_from_steady_state(&pipe.steady_state())?;

        assert_relative_eq!(deviation.get::<delta_kelvin>(), 0.0);
        Ok(())
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        let base = HeatedPipeParameters::default();

        let zero_radius = HeatedPipeParameters {
            radius: Length::new::<meter>(0.0),
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(zero_radius),
            Err(PipeError::Radius { .. })
        ));

        let no_flow = HeatedPipeParameters {
            mass_flow: MassRate::new::<kilogram_per_second>(0.0),
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(no_flow),
            Err(PipeError::MassFlow { .. })
        ));

        let no_nodes = HeatedPipeParameters { nodes: 0, ..base };
        assert_eq!(HeatedPipe::new(no_nodes), Err(PipeError::Nodes));

        let bad_flux = HeatedPipeParameters {
            heat_flux: HeatFluxDensity::new::<watt_per_square_meter>(f64::INFINITY),
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(bad_flux),
            Err(PipeError::HeatFlux { .. })
        ));

        let hot_inlet = HeatedPipeParameters {
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(f64::INFINITY),
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(hot_inlet),
            Err(PipeError::InletTemperature { .. })
        ));

        let unbounded_flow = HeatedPipeParameters {
            mass_flow: MassRate::new::<kilogram_per_second>(f64::INFINITY),
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(unbounded_flow),
            Err(PipeError::MassFlow { .. })
        ));

        let dense = HeatedPipeParameters {
            fluid: FluidProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(f64::INFINITY),
                ..base.fluid
            },
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(dense),
            Err(PipeError::Density { .. })
        ));

        let capacious = HeatedPipeParameters {
            fluid: FluidProperties {
                cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(f64::INFINITY),
                ..base.fluid
            },
            ..base
        };
        assert!(matches!(
            HeatedPipe::new(capacious),
            Err(PipeError::Cp { .. })
        ));

        let cooling = HeatedPipeParameters {
            heat_flux: HeatFluxDensity::new::<watt_per_square_meter>(-5_000.0),
            ..base
        };
        assert!(HeatedPipe::new(cooling).is_ok());
    }
}
