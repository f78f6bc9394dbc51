//! Per-node phase-change material model.
//!
//! This module provides a [`twine_core::Model`] implementation that evaluates
//! every property a solver node needs from the node's specific enthalpy.
//! The computation itself lives in [`PhaseChange`].

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{
    MassDensity, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{
    thermo::{
        fluid::Pcm,
        model::{Phase, PhaseChange, PhaseChangeFluid, PhaseChangeParametersError},
    },
    units::SpecificEnthalpy,
};

/// Enthalpy state of one solver node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInput {
    pub enthalpy: SpecificEnthalpy,
    /// Node pressure, if the solver tracks one.
    ///
    /// Forwarded to the property functions but currently without effect.
    pub pressure: Option<Pressure>,
}

impl NodeInput {
    /// Creates an input with no pressure information.
    #[must_use]
    pub fn new(enthalpy: SpecificEnthalpy) -> Self {
        Self {
            enthalpy,
            pressure: None,
        }
    }

    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }
}

/// Properties of one solver node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeProperties {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub conductivity: ThermalConductivity,
    pub cp: SpecificHeatCapacity,
    pub phase: Phase,
    pub liquid_fraction: Ratio,
}

/// Model adapter evaluating [`NodeProperties`] for a phase-change material.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_pcm::models::thermal::pcm::{NodeInput, PcmNode};
/// use twine_pcm::support::thermo::{fluid::Pcm, model::Phase};
/// use twine_pcm::support::units::SpecificEnthalpy;
/// use uom::si::available_energy::kilojoule_per_kilogram;
///
/// let node = PcmNode::from_pcm(Pcm::MagnesiumNitrateHexahydrate).unwrap();
/// let input = NodeInput::new(SpecificEnthalpy::new::<kilojoule_per_kilogram>(900.0));
/// let props = node.call(&input).unwrap();
/// assert_eq!(props.phase, Phase::Mushy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcmNode<Fluid> {
    thermo: PhaseChange<Fluid>,
}

impl<Fluid> PcmNode<Fluid> {
    /// Wraps an existing phase-change model.
    #[must_use]
    pub fn new(thermo: PhaseChange<Fluid>) -> Self {
        Self { thermo }
    }

    /// Builds the node model from the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseChangeParametersError`] if any constant is invalid.
    pub fn for_fluid() -> Result<Self, PhaseChangeParametersError>
    where
        Fluid: PhaseChangeFluid,
    {
        PhaseChange::new().map(Self::new)
    }

    /// Returns the underlying property model.
    #[must_use]
    pub fn thermo(&self) -> &PhaseChange<Fluid> {
        &self.thermo
    }
}

impl PcmNode<Pcm> {
    /// Builds the node model for a substance chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseChangeParametersError`] if the substance's constants are invalid.
    pub fn from_pcm(pcm: Pcm) -> Result<Self, PhaseChangeParametersError> {
        PhaseChange::from_pcm(pcm).map(Self::new)
    }
}

impl<Fluid> Model for PcmNode<Fluid> {
    type Input = NodeInput;
    type Output = NodeProperties;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let NodeInput { enthalpy, pressure } = *input;
        let thermo = &self.thermo;

        Ok(NodeProperties {
            temperature: thermo.temperature(enthalpy),
            density: thermo.density(enthalpy, pressure),
            conductivity: thermo.conductivity(enthalpy, pressure),
            cp: thermo.cp(enthalpy, pressure),
            phase: thermo.phase(enthalpy),
            liquid_fraction: thermo.liquid_fraction(enthalpy),
        })
    }
}
