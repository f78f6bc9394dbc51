/// Base trait for thermodynamic property models.
///
/// Names the `Fluid` type carried by the [`State`](crate::support::thermo::State)
/// values a model operates on.
pub trait ThermoModel {
    type Fluid;
}
