//! Thermal systems models.
//!
//! This module contains models for thermal storage media queried node by node
//! by an external time-stepping solver.

pub mod pcm;
