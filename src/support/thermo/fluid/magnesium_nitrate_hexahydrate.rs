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

/// Magnesium nitrate hexahydrate, Mg(NO₃)₂·6H₂O.
///
/// Melts at 89 °C; modeled with an 88–90 °C band. Density is the mean of the
/// solid (1636 kg/m³) and liquid (1550 kg/m³) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnesiumNitrateHexahydrate;

impl PhaseChangeFluid for MagnesiumNitrateHexahydrate {
    fn parameters() -> PhaseChangeParameters {
        PhaseChangeParameters::new(
            ThermodynamicTemperature::new::<degree_celsius>(88.0),
            ThermodynamicTemperature::new::<degree_celsius>(90.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.611),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.490),
            SpecificEnthalpy::new::<joule_per_kilogram>(162_800.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2165.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1593.0),
        )
    }
}
