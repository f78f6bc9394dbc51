use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::model::phase_change::{PhaseChangeFluid, PhaseChangeParameters};
use crate::support::units::SpecificEnthalpy;

/// Magnesium chloride hexahydrate (bischofite), MgCl₂·6H₂O.
///
/// Melts at 117 °C; modeled with a 116–118 °C band. `cp` is the mean of 2250
/// and 2610 J/kg·K, and density the rounded mean of 1569 and 1450 kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnesiumChlorideHexahydrate;

impl PhaseChangeFluid for MagnesiumChlorideHexahydrate {
    fn parameters() -> PhaseChangeParameters {
        PhaseChangeParameters::new(
            ThermodynamicTemperature::new::<degree_celsius>(116.0),
            ThermodynamicTemperature::new::<degree_celsius>(118.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.694),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.570),
            SpecificEnthalpy::new::<joule_per_kilogram>(168_600.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2430.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1510.0),
        )
    }
}
