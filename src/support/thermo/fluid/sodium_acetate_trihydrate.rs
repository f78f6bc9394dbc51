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

/// Sodium acetate trihydrate, NaCH₃COO·3H₂O.
///
/// Melts at 58 °C; modeled with a 56–58 °C band. `cp` is the mean of the
/// solid (1900 J/kg·K) and liquid (2505 J/kg·K) values and the density is the
/// mean of 1360 and 1260 kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SodiumAcetateTrihydrate;

impl PhaseChangeFluid for SodiumAcetateTrihydrate {
    fn parameters() -> PhaseChangeParameters {
        PhaseChangeParameters::new(
            ThermodynamicTemperature::new::<degree_celsius>(56.0),
            ThermodynamicTemperature::new::<degree_celsius>(58.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(2.3),
            ThermalConductivity::new::<watt_per_meter_kelvin>(2.0),
            SpecificEnthalpy::new::<joule_per_kilogram>(190_000.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2202.5),
            MassDensity::new::<kilogram_per_cubic_meter>(1310.0),
        )
    }
}
