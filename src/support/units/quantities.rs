use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
///
/// Dimensionally identical to [`uom::si::f64::AvailableEnergy`], so the
/// `uom::si::available_energy` units apply.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
