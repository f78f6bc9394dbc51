use uom::si::f64::{SpecificHeatCapacity, ThermalConductivity};

use crate::support::thermo::State;
use crate::support::units::SpecificEnthalpy;

use super::ThermoModel;

pub trait HasEnthalpy: ThermoModel {
    /// Returns the specific enthalpy for the given state.
    fn enthalpy(&self, state: &State<Self::Fluid>) -> SpecificEnthalpy;
}

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    fn cp(&self, state: &State<Self::Fluid>) -> SpecificHeatCapacity;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    fn thermal_conductivity(&self, state: &State<Self::Fluid>) -> ThermalConductivity;
}
