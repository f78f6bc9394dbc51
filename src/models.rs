//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `thermal`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to a property model in [`crate::support`]. The adapter owns no physics.

pub mod thermal;
