use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a material at one solver node.
///
/// The `Fluid` type parameter is either a marker type such as
/// [`SodiumAcetateTrihydrate`](super::fluid::SodiumAcetateTrihydrate) or the
/// runtime [`Pcm`](super::fluid::Pcm) identifier.
///
/// # Example
///
/// ```
/// use twine_pcm::support::thermo::{State, fluid::Pcm};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<degree_celsius>(57.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1310.0),
///     Pcm::SodiumAcetateTrihydrate,
/// );
/// assert_eq!(state.fluid, Pcm::SodiumAcetateTrihydrate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
