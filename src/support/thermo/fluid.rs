//! Calibrated phase-change materials.
//!
//! Each substance is a unit-like marker type that supplies its calibration
//! constants through [`PhaseChangeFluid`], so a model for a substance known at
//! compile time is simply `PhaseChange::<SodiumAcetateTrihydrate>::new()`.
//!
//! When the substance is chosen at runtime (for example by name from a
//! simulation setup), use [`Pcm`] instead:
//!
//! ```
//! use twine_pcm::support::thermo::{fluid::Pcm, model::PhaseChange};
//!
//! let pcm: Pcm = "barium_hydroxide_octahydrate".parse().unwrap();
//! let model = PhaseChange::from_pcm(pcm).unwrap();
//! assert!(model.domain_warning().is_none());
//! ```
//!
//! All constants use a 2 K melting band around the handbook melting point and
//! single effective values for `cp` and density.

mod barium_hydroxide_octahydrate;
mod magnesium_chloride_hexahydrate;
mod magnesium_eutectic;
mod magnesium_nitrate_hexahydrate;
mod sodium_acetate_trihydrate;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::support::thermo::model::phase_change::{PhaseChangeFluid, PhaseChangeParameters};

pub use barium_hydroxide_octahydrate::BariumHydroxideOctahydrate;
pub use magnesium_chloride_hexahydrate::MagnesiumChlorideHexahydrate;
pub use magnesium_eutectic::MagnesiumEutectic;
pub use magnesium_nitrate_hexahydrate::MagnesiumNitrateHexahydrate;
pub use sodium_acetate_trihydrate::SodiumAcetateTrihydrate;

/// Runtime identifier for a calibrated phase-change material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pcm {
    SodiumAcetateTrihydrate,
    BariumHydroxideOctahydrate,
    MagnesiumChlorideHexahydrate,
    MagnesiumNitrateHexahydrate,
    MagnesiumEutectic,
}

impl Pcm {
    /// Every calibrated substance.
    pub const ALL: [Pcm; 5] = [
        Pcm::SodiumAcetateTrihydrate,
        Pcm::MagnesiumEutectic,
        Pcm::BariumHydroxideOctahydrate,
        Pcm::MagnesiumNitrateHexahydrate,
        Pcm::MagnesiumChlorideHexahydrate,
    ];

    /// Returns the snake_case name used to select this substance.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pcm::SodiumAcetateTrihydrate => "sodium_acetate_trihydrate",
            Pcm::BariumHydroxideOctahydrate => "barium_hydroxide_octahydrate",
            Pcm::MagnesiumChlorideHexahydrate => "magnesium_chloride_hexahydrate",
            Pcm::MagnesiumNitrateHexahydrate => "magnesium_nitrate_hexahydrate",
            Pcm::MagnesiumEutectic => "magnesium_eutectic",
        }
    }

    /// Returns the calibration constants for this substance.
    #[must_use]
    pub fn parameters(self) -> PhaseChangeParameters {
        match self {
            Pcm::SodiumAcetateTrihydrate => SodiumAcetateTrihydrate::parameters(),
            Pcm::BariumHydroxideOctahydrate => BariumHydroxideOctahydrate::parameters(),
            Pcm::MagnesiumChlorideHexahydrate => MagnesiumChlorideHexahydrate::parameters(),
            Pcm::MagnesiumNitrateHexahydrate => MagnesiumNitrateHexahydrate::parameters(),
            Pcm::MagnesiumEutectic => MagnesiumEutectic::parameters(),
        }
    }
}

impl fmt::Display for Pcm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a substance name does not match any [`Pcm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phase-change material: {name}")]
pub struct UnknownPcmError {
    pub name: String,
}

impl FromStr for Pcm {
    type Err = UnknownPcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pcm::ALL
            .into_iter()
            .find(|pcm| pcm.name() == s)
            .ok_or_else(|| UnknownPcmError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram,
        f64::ThermodynamicTemperature,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use crate::support::thermo::model::PhaseChange;

    #[test]
    fn names_round_trip() {
        for pcm in Pcm::ALL {
            assert_eq!(pcm.to_string().parse::<Pcm>(), Ok(pcm));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "paraffin".parse::<Pcm>(),
            Err(UnknownPcmError {
                name: "paraffin".to_owned()
            })
        );
        assert!("Sodium_Acetate_Trihydrate".parse::<Pcm>().is_err());
    }

    #[test]
    fn runtime_lookup_matches_marker_types() {
        assert_eq!(
            Pcm::SodiumAcetateTrihydrate.parameters(),
            SodiumAcetateTrihydrate::parameters()
        );
        assert_eq!(
            Pcm::MagnesiumEutectic.parameters(),
            MagnesiumEutectic::parameters()
        );
    }

    #[test]
    fn every_substance_builds_without_warning() {
        for pcm in Pcm::ALL {
            let model = PhaseChange::from_pcm(pcm)
                .unwrap_or_else(|err| panic!("{pcm} constants are invalid: {err}"));
            assert_eq!(model.domain_warning(), None, "{pcm}");
        }
    }

    #[test]
    fn substances_are_distinct() {
        let all = Pcm::ALL.map(Pcm::parameters);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn melting_bands_are_two_kelvin_wide() {
        for pcm in Pcm::ALL {
            let p = pcm.parameters();
            assert_relative_eq!(
                p.liquidus.get::<kelvin>() - p.solidus.get::<kelvin>(),
                2.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn concurrent_evaluation_on_separate_instances() {
        let models = Pcm::ALL.map(|pcm| PhaseChange::from_pcm(pcm).unwrap());
        let temperatures: Vec<f64> = (0..=200).map(|i| 20.0 + 0.5 * f64::from(i)).collect();

        let serial: Vec<Vec<f64>> = models
            .iter()
            .map(|model| {
                temperatures
                    .iter()
                    .map(|&t| {
                        let h = model.enthalpy(ThermodynamicTemperature::new::<degree_celsius>(t));
                        model.temperature(h).get::<degree_celsius>()
                    })
                    .collect()
            })
            .collect();

        let parallel: Vec<Vec<f64>> = thread::scope(|scope| {
            let handles: Vec<_> = models
                .iter()
                .map(|model| {
                    let temperatures = &temperatures;
                    scope.spawn(move || {
                        temperatures
                            .iter()
                            .map(|&t| {
                                let h = model
                                    .enthalpy(ThermodynamicTemperature::new::<degree_celsius>(t));
                                model.temperature(h).get::<degree_celsius>()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("evaluation thread panicked"))
                .collect()
        });

        assert_eq!(serial, parallel);

        for values in &parallel {
            for (t, expected) in values.iter().zip(&temperatures) {
                assert_relative_eq!(*t, *expected, epsilon = 1e-9);
            }
        }

        // Same temperature, different substances, different enthalpies.
        let t = ThermodynamicTemperature::new::<degree_celsius>(70.0);
        let mut enthalpies: Vec<f64> = models
            .iter()
            .map(|model| model.enthalpy(t).get::<joule_per_kilogram>())
            .collect();
        enthalpies.sort_by(f64::total_cmp);
        enthalpies.dedup();
        assert_eq!(enthalpies.len(), Pcm::ALL.len());
    }
}
