//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked when parameters are validated.
//! - [`thermo`]: Phase-change property models, fluids, and capability traits.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod thermo;
pub mod units;
