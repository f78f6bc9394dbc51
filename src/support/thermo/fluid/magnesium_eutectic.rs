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

/// Eutectic of 58.7 wt% Mg(NO₃)₂·6H₂O and 41.3 wt% MgCl₂·6H₂O.
///
/// Melts at 59 °C; modeled with a 58–60 °C band. `cp` is the mass-weighted
/// mix of the two hexahydrates and the density is the mean of the solid
/// (1630 kg/m³) and liquid (1550 kg/m³) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnesiumEutectic;

impl PhaseChangeFluid for MagnesiumEutectic {
    fn parameters() -> PhaseChangeParameters {
        PhaseChangeParameters::new(
            ThermodynamicTemperature::new::<degree_celsius>(58.0),
            ThermodynamicTemperature::new::<degree_celsius>(60.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.678),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.510),
            SpecificEnthalpy::new::<joule_per_kilogram>(132_200.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2274.4),
            MassDensity::new::<kilogram_per_cubic_meter>(1590.0),
        )
    }
}
