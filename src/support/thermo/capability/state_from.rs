use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which inputs a model can
/// turn into a state. A phase-change model accepts either a temperature or a
/// specific enthalpy, because the two are related by an invertible mapping.
/// Inputs a model cannot use simply have no implementation.
///
/// Inputs are plain Rust types:
/// - `(Fluid, ThermodynamicTemperature)`
/// - `(Fluid, SpecificEnthalpy)`
/// - `ThermodynamicTemperature` or `SpecificEnthalpy` alone, when `Fluid: Default`
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
