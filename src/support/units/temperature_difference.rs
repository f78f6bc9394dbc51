use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values (absolute temperatures)
/// should yield a [`TemperatureInterval`], but [`uom`] does not provide that
/// operation directly. See
/// [#380](https://github.com/iliekturtles/uom/issues/380) and
/// [#289](https://github.com/iliekturtles/uom/issues/289).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn mushy_band_width() {
        let solidus = ThermodynamicTemperature::new::<degree_celsius>(77.0);
        let liquidus = ThermodynamicTemperature::new::<abs_kelvin>(352.15);

        assert_relative_eq!(
            liquidus.minus(solidus).get::<delta_kelvin>(),
            2.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            solidus.minus(liquidus).get::<delta_celsius>(),
            -2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn same_temperature_in_different_units() {
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(56.0);
        let t_in_k = ThermodynamicTemperature::new::<abs_kelvin>(329.15);
        assert_relative_eq!(t_in_k.minus(t_in_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}
