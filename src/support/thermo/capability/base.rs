/// Base trait for fluid property models.
///
/// Ties a model to the fluid type its states carry.
pub trait ThermoModel {
    type Fluid;
}
