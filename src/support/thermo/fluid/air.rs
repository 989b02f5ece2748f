/// Canonical identifier for dry air at atmospheric pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;
