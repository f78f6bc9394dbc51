//! # Twine PCM
//!
//! Phase-change material (PCM) property models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The centerpiece is [`PhaseChange`](support::thermo::model::PhaseChange), an
//! enthalpy-based equation of state that converts between temperature and
//! specific enthalpy across a narrow melting band and derives density,
//! conductivity, and heat capacity from the enthalpy state. Calibrated
//! constants for several salt hydrates live in [`support::thermo::fluid`].
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for solver nodes.
//! - [`support`]: Property models, units, and validation utilities.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Model construction emits the derived enthalpy breakpoints at `debug` and a
//! degenerate melting band at `warn`.

pub mod models;
pub mod support;
