//! Thermodynamic property models.

pub mod phase_change;

pub use phase_change::{
    DomainWarning, Phase, PhaseChange, PhaseChangeFluid, PhaseChangeParameters,
    PhaseChangeParametersError,
};
