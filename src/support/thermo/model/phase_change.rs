//! Enthalpy-based phase-change model with a linear mushy band.
//!
//! `PhaseChange` implements the equation of state commonly used for salt-hydrate
//! phase-change materials (PCMs) in enthalpy-method storage simulations: a solid
//! branch and a liquid branch with a shared constant heat capacity, joined by a
//! narrow temperature band over which the latent heat is absorbed linearly.
//!
//! # Assumptions
//!
//! - Sensible heat: `h = cp·T` below the solidus and `h = h_l + cp·(T − T_l)` above the liquidus
//! - Latent heat: absorbed linearly between `T_s` and `T_l`
//! - Density and `cp` are single effective values for all phases
//! - Conductivity varies linearly with enthalpy across the mushy band
//! - Pressure effects are not modeled
//!
//! # Enthalpy Breakpoints
//!
//! Enthalpy is zero at absolute zero, which places the breakpoints at
//! `h_s = cp·T_s` and `h_l = h_s + L`. They are computed once when the model
//! is built, and `T(h)`, `k(h)` and the phase classification all split on them.
//!
//! # Degenerate Band
//!
//! A zero latent heat is accepted, as is one too small to separate the
//! breakpoints in floating point. The two breakpoints coincide, the mushy
//! branch of `T(h)` becomes unreachable, and an enthalpy equal to the shared
//! breakpoint resolves to the solid branch. The model reports this through
//! [`PhaseChange::domain_warning`].
//!
//! Positions inside the band are measured against the stored breakpoints, not
//! against `L`, so a latent heat that rounds when added to `h_s` still keeps
//! the liquid fraction within `[0, 1]`.

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        MassDensity, Pressure, Ratio, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    thermo::{
        State,
        capability::{HasCp, HasEnthalpy, HasThermalConductivity, StateFrom, ThermoModel},
        fluid::Pcm,
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhaseChangeParametersError {
    #[error("invalid solidus temperature: {solidus:?}")]
    SolidusTemperature { solidus: ThermodynamicTemperature },
    #[error("liquidus must be above solidus: solidus={solidus:?}, liquidus={liquidus:?}")]
    MeltingRange {
        solidus: ThermodynamicTemperature,
        liquidus: ThermodynamicTemperature,
    },
    #[error("invalid solid conductivity: {k_solid:?}")]
    SolidConductivity { k_solid: ThermalConductivity },
    #[error("invalid liquid conductivity: {k_liquid:?}")]
    LiquidConductivity { k_liquid: ThermalConductivity },
    #[error("invalid latent heat: {latent_heat:?}")]
    LatentHeat { latent_heat: SpecificEnthalpy },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
}

/// Non-fatal conditions detected while building a [`PhaseChange`] model.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainWarning {
    /// The solidus and liquidus enthalpies coincide, so the mushy band is a
    /// single enthalpy point.
    ///
    /// This happens for a zero latent heat and for one below the resolution of
    /// `h_s`. An enthalpy equal to that point is treated as solid.
    #[error("mushy band collapses to a single enthalpy; the breakpoint enthalpy resolves to solid")]
    DegenerateMushyBand,
}

/// Branch of the equation of state that an enthalpy falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// At or below the solidus enthalpy.
    Solid,
    /// Strictly above the solidus enthalpy and at or below the liquidus enthalpy.
    Mushy,
    /// Above the liquidus enthalpy.
    Liquid,
}

/// Calibration constants for the [`PhaseChange`] model.
///
/// These values are typically provided by a fluid's [`PhaseChangeFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseChangeParameters {
    /// Temperature below which the material is fully solid.
    pub solidus: ThermodynamicTemperature,
    /// Temperature above which the material is fully liquid.
    pub liquidus: ThermodynamicTemperature,
    pub k_solid: ThermalConductivity,
    pub k_liquid: ThermalConductivity,
    /// Enthalpy absorbed across the mushy band.
    pub latent_heat: SpecificEnthalpy,
    /// Effective heat capacity of both the solid and liquid branches.
    pub cp: SpecificHeatCapacity,
    /// Effective density of all phases.
    pub density: MassDensity,
}

impl PhaseChangeParameters {
    #[must_use]
    pub fn new(
        solidus: ThermodynamicTemperature,
        liquidus: ThermodynamicTemperature,
        k_solid: ThermalConductivity,
        k_liquid: ThermalConductivity,
        latent_heat: SpecificEnthalpy,
        cp: SpecificHeatCapacity,
        density: MassDensity,
    ) -> Self {
        Self {
            solidus,
            liquidus,
            k_solid,
            k_liquid,
            latent_heat,
            cp,
            density,
        }
    }
}

/// Fluid constants required by the [`PhaseChange`] model.
pub trait PhaseChangeFluid {
    /// Returns the calibration constants for use with [`PhaseChange`].
    fn parameters() -> PhaseChangeParameters;
}

/// SI values of the piecewise breakpoints and slopes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Breakpoints {
    t_solidus: f64,
    t_liquidus: f64,
    h_solidus: f64,
    h_liquidus: f64,
    cp: f64,
    k_solid: f64,
    k_liquid: f64,
}

impl Breakpoints {
    fn new(parameters: &PhaseChangeParameters) -> Self {
        let cp = parameters.cp.get::<joule_per_kilogram_kelvin>();
        let latent_heat = parameters.latent_heat.get::<joule_per_kilogram>();
        let t_solidus = parameters.solidus.get::<kelvin>();
        let h_solidus = cp * t_solidus;

        Self {
            t_solidus,
            t_liquidus: parameters.liquidus.get::<kelvin>(),
            h_solidus,
            h_liquidus: h_solidus + latent_heat,
            cp,
            k_solid: parameters.k_solid.get::<watt_per_meter_kelvin>(),
            k_liquid: parameters.k_liquid.get::<watt_per_meter_kelvin>(),
        }
    }

    fn phase(&self, h: f64) -> Phase {
        if h <= self.h_solidus {
            Phase::Solid
        } else if h <= self.h_liquidus {
            Phase::Mushy
        } else {
            Phase::Liquid
        }
    }

    /// Enthalpy width of the mushy band as stored, which can differ from the
    /// latent heat once `h_s + L` rounds.
    fn band_width(&self) -> f64 {
        self.h_liquidus - self.h_solidus
    }

    /// Position of `h` within `(h_s, h_l]`; only called in the mushy branch,
    /// which is empty unless `h_l > h_s`.
    fn mushy_fraction(&self, h: f64) -> f64 {
        (h - self.h_solidus) / self.band_width()
    }
}

/// Phase-change equation of state with a linear mushy band.
///
/// The model is immutable after construction and holds no per-call state,
/// so one instance can be shared by every node and thread of a simulation.
///
/// # Example
///
/// ```
/// use twine_pcm::support::thermo::{fluid::Pcm, model::PhaseChange};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let sat = PhaseChange::from_pcm(Pcm::SodiumAcetateTrihydrate).unwrap();
/// let h = sat.enthalpy(ThermodynamicTemperature::new::<degree_celsius>(57.0));
/// let t = sat.temperature(h);
/// assert!((t.get::<degree_celsius>() - 57.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseChange<Fluid> {
    parameters: PhaseChangeParameters,
    breakpoints: Breakpoints,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for PhaseChange<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> PhaseChange<Fluid> {
    /// Creates a phase-change model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseChangeParametersError`] if any constant is invalid.
    pub fn new() -> Result<Self, PhaseChangeParametersError>
    where
        Fluid: PhaseChangeFluid,
    {
        Self::with_parameters(Fluid::parameters())
    }

    /// Creates a phase-change model from explicit calibration constants.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseChangeParametersError`] if any constant is invalid.
    pub fn with_parameters(
        parameters: PhaseChangeParameters,
    ) -> Result<Self, PhaseChangeParametersError> {
        validate(&parameters)?;

        let breakpoints = Breakpoints::new(&parameters);
        log::debug!(
            "phase-change breakpoints: h_solidus={} J/kg, h_liquidus={} J/kg",
            breakpoints.h_solidus,
            breakpoints.h_liquidus
        );

        let model = Self {
            parameters,
            breakpoints,
            _marker: PhantomData,
        };

        if let Some(warning) = model.domain_warning() {
            log::warn!("{warning}");
        }

        Ok(model)
    }

    /// Returns the calibration constants this model was built from.
    #[must_use]
    pub fn parameters(&self) -> &PhaseChangeParameters {
        &self.parameters
    }

    /// Returns the enthalpy at the solidus temperature, `h_s = cp·T_s`.
    #[must_use]
    pub fn solidus_enthalpy(&self) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<joule_per_kilogram>(self.breakpoints.h_solidus)
    }

    /// Returns the enthalpy at the liquidus temperature, `h_l = h_s + L`.
    #[must_use]
    pub fn liquidus_enthalpy(&self) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<joule_per_kilogram>(self.breakpoints.h_liquidus)
    }

    /// Returns a warning if the parameters are valid but degenerate.
    #[must_use]
    pub fn domain_warning(&self) -> Option<DomainWarning> {
        let bp = &self.breakpoints;
        (bp.h_liquidus == bp.h_solidus).then_some(DomainWarning::DegenerateMushyBand)
    }

    /// Computes specific enthalpy from temperature.
    ///
    /// Continuous and non-decreasing in `T`.
    #[must_use]
    pub fn enthalpy(&self, temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
        let bp = &self.breakpoints;
        let t = temperature.get::<kelvin>();

        let h = if t <= bp.t_solidus {
            bp.cp * t
        } else if t <= bp.t_liquidus {
            bp.h_solidus + (t - bp.t_solidus) / (bp.t_liquidus - bp.t_solidus) * bp.band_width()
        } else {
            bp.h_liquidus + bp.cp * (t - bp.t_liquidus)
        };

        SpecificEnthalpy::new::<joule_per_kilogram>(h)
    }

    /// Computes temperature from specific enthalpy.
    ///
    /// This is the inverse of [`enthalpy`](Self::enthalpy), split on the
    /// enthalpy breakpoints.
    #[must_use]
    pub fn temperature(&self, enthalpy: SpecificEnthalpy) -> ThermodynamicTemperature {
        let bp = &self.breakpoints;
        let h = enthalpy.get::<joule_per_kilogram>();

        let t = match bp.phase(h) {
            Phase::Solid => h / bp.cp,
            Phase::Mushy => bp.t_solidus + (bp.t_liquidus - bp.t_solidus) * bp.mushy_fraction(h),
            Phase::Liquid => bp.t_liquidus + (h - bp.h_liquidus) / bp.cp,
        };

        ThermodynamicTemperature::new::<kelvin>(t)
    }

    /// Returns the effective density.
    ///
    /// The enthalpy and pressure arguments are accepted for parity with the
    /// other property functions and a pressure-aware model, and are ignored.
    #[must_use]
    pub fn density(
        &self,
        _enthalpy: SpecificEnthalpy,
        _pressure: Option<Pressure>,
    ) -> MassDensity {
        self.parameters.density
    }

    /// Returns the effective specific heat capacity.
    ///
    /// No latent-heat spike appears here; the latent heat lives entirely in
    /// the enthalpy ramp. Arguments are ignored, as for [`density`](Self::density).
    #[must_use]
    pub fn cp(
        &self,
        _enthalpy: SpecificEnthalpy,
        _pressure: Option<Pressure>,
    ) -> SpecificHeatCapacity {
        self.parameters.cp
    }

    /// Computes thermal conductivity from specific enthalpy.
    ///
    /// Constant in the solid and liquid branches and linear in enthalpy across
    /// the mushy band. Pressure is ignored.
    #[must_use]
    pub fn conductivity(
        &self,
        enthalpy: SpecificEnthalpy,
        _pressure: Option<Pressure>,
    ) -> ThermalConductivity {
        let bp = &self.breakpoints;
        let h = enthalpy.get::<joule_per_kilogram>();

        let k = match bp.phase(h) {
            Phase::Solid => bp.k_solid,
            Phase::Mushy => bp.k_solid + (bp.k_liquid - bp.k_solid) * bp.mushy_fraction(h),
            Phase::Liquid => bp.k_liquid,
        };

        ThermalConductivity::new::<watt_per_meter_kelvin>(k)
    }

    /// Returns the branch that `enthalpy` falls in.
    #[must_use]
    pub fn phase(&self, enthalpy: SpecificEnthalpy) -> Phase {
        self.breakpoints.phase(enthalpy.get::<joule_per_kilogram>())
    }

    /// Returns the mass fraction of liquid, between zero and one.
    #[must_use]
    pub fn liquid_fraction(&self, enthalpy: SpecificEnthalpy) -> Ratio {
        let bp = &self.breakpoints;
        let h = enthalpy.get::<joule_per_kilogram>();

        let fraction = match bp.phase(h) {
            Phase::Solid => 0.0,
            Phase::Mushy => bp.mushy_fraction(h),
            Phase::Liquid => 1.0,
        };

        Ratio::new::<ratio>(fraction)
    }

    /// Returns the enthalpy change per unit mass between two temperatures.
    ///
    /// Positive when heating (`to` above `from`), including any latent heat
    /// absorbed on the way.
    #[must_use]
    pub fn enthalpy_change(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> SpecificEnthalpy {
        self.enthalpy(to) - self.enthalpy(from)
    }
}

impl PhaseChange<Pcm> {
    /// Creates a phase-change model for a substance chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseChangeParametersError`] if the substance's constants are invalid.
    pub fn from_pcm(pcm: Pcm) -> Result<Self, PhaseChangeParametersError> {
        Self::with_parameters(pcm.parameters())
    }
}

fn validate(parameters: &PhaseChangeParameters) -> Result<(), PhaseChangeParametersError> {
    let PhaseChangeParameters {
        solidus,
        liquidus,
        k_solid,
        k_liquid,
        latent_heat,
        cp,
        density,
    } = *parameters;

    if StrictlyPositive::check(&solidus.value).is_err() {
        return Err(PhaseChangeParametersError::SolidusTemperature { solidus });
    }

    if StrictlyPositive::check(&liquidus.minus(solidus).value).is_err() {
        return Err(PhaseChangeParametersError::MeltingRange { solidus, liquidus });
    }

    if StrictlyPositive::check(&k_solid.value).is_err() {
        return Err(PhaseChangeParametersError::SolidConductivity { k_solid });
    }

    if StrictlyPositive::check(&k_liquid.value).is_err() {
        return Err(PhaseChangeParametersError::LiquidConductivity { k_liquid });
    }

    if NonNegative::check(&latent_heat.value).is_err() {
        return Err(PhaseChangeParametersError::LatentHeat { latent_heat });
    }

    if StrictlyPositive::check(&cp.value).is_err() {
        return Err(PhaseChangeParametersError::Cp { cp });
    }

    if StrictlyPositive::check(&density.value).is_err() {
        return Err(PhaseChangeParametersError::Density { density });
    }

    Ok(())
}

impl<Fluid> HasEnthalpy for PhaseChange<Fluid> {
    fn enthalpy(&self, state: &State<Fluid>) -> SpecificEnthalpy {
        PhaseChange::enthalpy(self, state.temperature)
    }
}

impl<Fluid> HasCp for PhaseChange<Fluid> {
    fn cp(&self, state: &State<Fluid>) -> SpecificHeatCapacity {
        let h = PhaseChange::enthalpy(self, state.temperature);
        PhaseChange::cp(self, h, None)
    }
}

impl<Fluid> HasThermalConductivity for PhaseChange<Fluid> {
    fn thermal_conductivity(&self, state: &State<Fluid>) -> ThermalConductivity {
        let h = PhaseChange::enthalpy(self, state.temperature);
        self.conductivity(h, None)
    }
}

/// Enables state creation from temperature.
impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature)> for PhaseChange<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature): (Fluid, ThermodynamicTemperature),
    ) -> Result<State<Fluid>, Self::Error> {
        let h = PhaseChange::enthalpy(self, temperature);

        Ok(State {
            temperature,
            density: self.density(h, None),
            fluid,
        })
    }
}

/// Enables state creation from specific enthalpy, as held by an enthalpy-method solver.
impl<Fluid> StateFrom<(Fluid, SpecificEnthalpy)> for PhaseChange<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, enthalpy): (Fluid, SpecificEnthalpy),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State {
            temperature: self.temperature(enthalpy),
            density: self.density(enthalpy, None),
            fluid,
        })
    }
}

impl<Fluid: Default> StateFrom<ThermodynamicTemperature> for PhaseChange<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<State<Fluid>, Self::Error> {
        self.state_from((Fluid::default(), temperature))
    }
}

impl<Fluid: Default> StateFrom<SpecificEnthalpy> for PhaseChange<Fluid> {
    type Error = Infallible;

    fn state_from(&self, enthalpy: SpecificEnthalpy) -> Result<State<Fluid>, Self::Error> {
        self.state_from((Fluid::default(), enthalpy))
    }
}
