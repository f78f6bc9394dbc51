//! Thermodynamic property modeling for phase-change materials.
//!
//! - [`model`]: The [`PhaseChange`](model::PhaseChange) equation of state.
//! - [`fluid`]: Calibrated substances and the [`Pcm`](fluid::Pcm) lookup table.
//! - [`capability`]: Traits for querying properties from a [`State`].

mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use state::State;
