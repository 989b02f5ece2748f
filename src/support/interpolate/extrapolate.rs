/// Extrapolation strategy.
///
/// Controls what happens if a query point is outside the bounds of the
/// sampled data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Evaluate the end cubic pieces beyond the sampled range.
    ///
    /// Values far outside the range are usually physically meaningless.
    Enable,
    /// Restrict the query point to the sampled range.
    Clamp,
    /// Return an error when the query point is beyond the sampled range.
    #[default]
    Error,
}

impl From<Extrapolate> for ninterp::interpolator::Extrapolate<f64> {
    fn from(value: Extrapolate) -> Self {
        match value {
            Extrapolate::Enable => ninterp::interpolator::Extrapolate::Enable,
            Extrapolate::Clamp => ninterp::interpolator::Extrapolate::Clamp,
            Extrapolate::Error => ninterp::interpolator::Extrapolate::Error,
        }
    }
}
