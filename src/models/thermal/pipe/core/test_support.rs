use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{HeatedPipe, HeatedPipeParameters, PipeTemperatures};

/// The default 50 m, 100-node water pipe.
pub(super) fn reference_pipe() -> HeatedPipe {
    HeatedPipe::new(HeatedPipeParameters::default()).expect("default parameters are valid")
}

/// Builds a field from kelvin values.
pub(super) fn field(kelvins: &[f64]) -> PipeTemperatures {
    kelvins
        .iter()
        .copied()
        .map(ThermodynamicTemperature::new::<kelvin>)
        .collect::<Vec<_>>()
        .into()
}
