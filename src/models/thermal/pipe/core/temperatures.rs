use twine_core::StepIntegrable;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
};

use crate::support::units::TemperatureRate;

/// Fluid temperature at each node, inlet first.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeTemperatures(Vec<ThermodynamicTemperature>);

impl PipeTemperatures {
    /// Creates a field with every node at the same temperature.
    #[must_use]
    pub fn uniform(nodes: usize, temperature: ThermodynamicTemperature) -> Self {
        Self(vec![temperature; nodes])
    }

    /// Returns the node temperatures.
    #[must_use]
    pub fn as_slice(&self) -> &[ThermodynamicTemperature] {
        &self.0
    }

    /// Returns the node temperatures in kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> Vec<f64> {
        self.0.iter().map(|t| t.get::<kelvin>()).collect()
    }

    /// Returns the temperature of the last node.
    #[must_use]
    pub fn outlet(&self) -> Option<ThermodynamicTemperature> {
        self.0.last().copied()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the field has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ThermodynamicTemperature>> for PipeTemperatures {
    fn from(temperatures: Vec<ThermodynamicTemperature>) -> Self {
        Self(temperatures)
    }
}

/// Forward Euler step: `T + dT/dt · dt` at every node.
impl StepIntegrable<Time> for PipeTemperatures {
    type Derivative = Vec<TemperatureRate>;

    fn step(&self, derivative: Self::Derivative, delta: Time) -> Self {
        let stepped = self
            .0
            .iter()
            .zip(derivative)
            .map(|(&t, rate)| {
                let change: TemperatureInterval = rate * delta;
                t + change
            })
            .collect();

        Self(stepped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::second;

    use crate::support::units::kelvin_per_second;

    #[test]
    fn step_applies_rate_per_node() {
        let field = PipeTemperatures::uniform(3, ThermodynamicTemperature::new::<kelvin>(300.0));
        let rates = vec![
            kelvin_per_second(1.0),
            kelvin_per_second(0.0),
            kelvin_per_second(-0.5),
        ];

        let next = field.step(rates, Time::new::<second>(2.0));

        assert_eq!(next.len(), 3);
        let kelvins = next.to_kelvin();
        assert_relative_eq!(kelvins[0], 302.0);
        assert_relative_eq!(kelvins[1], 300.0);
        assert_relative_eq!(kelvins[2], 299.0);
        assert_relative_eq!(next.outlet().unwrap().get::<kelvin>(), 299.0);
    }
}
