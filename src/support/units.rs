//! Extensions to [`uom`].
//!
//! Every physical value in this crate is a [`uom`] quantity, so a temperature
//! given in degrees Celsius or an enthalpy given in kJ/kg is converted once,
//! explicitly, at the call site instead of being silently misread as SI.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use twine_pcm::support::units::TemperatureDifference;
//!
//! let liquidus = ThermodynamicTemperature::new::<degree_celsius>(58.0);
//! let solidus = ThermodynamicTemperature::new::<degree_celsius>(56.0);
//! let band = liquidus.minus(solidus);
//! assert!((band.get::<kelvin>() - 2.0).abs() < 1e-12);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
