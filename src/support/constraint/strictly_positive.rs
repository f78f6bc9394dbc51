use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use twine_pcm::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&1310.0).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&-1.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MassDensity, ThermalConductivity},
        mass_density::kilogram_per_cubic_meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::check(&0.1).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::check(&-5.0),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn conductivities() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.653);
        assert!(StrictlyPositive::check(&k.value).is_ok());

        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        assert_eq!(StrictlyPositive::check(&k.value), Err(ConstraintError::Zero));
    }

    #[test]
    fn densities() {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(2004.0);
        assert!(StrictlyPositive::check(&rho.value).is_ok());

        let rho = MassDensity::new::<kilogram_per_cubic_meter>(-1.0);
        assert_eq!(
            StrictlyPositive::check(&rho.value),
            Err(ConstraintError::Negative)
        );
    }
}
