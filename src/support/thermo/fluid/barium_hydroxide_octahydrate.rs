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

/// Barium hydroxide octahydrate, Ba(OH)₂·8H₂O.
///
/// Melts at 78 °C; modeled with a 77–79 °C band. Density is the mean of the
/// solid (2070 kg/m³) and liquid (1937 kg/m³) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BariumHydroxideOctahydrate;

impl PhaseChangeFluid for BariumHydroxideOctahydrate {
    fn parameters() -> PhaseChangeParameters {
        PhaseChangeParameters::new(
            ThermodynamicTemperature::new::<degree_celsius>(77.0),
            ThermodynamicTemperature::new::<degree_celsius>(79.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.255),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.653),
            SpecificEnthalpy::new::<joule_per_kilogram>(265_700.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2555.0),
            MassDensity::new::<kilogram_per_cubic_meter>(2004.0),
        )
    }
}
