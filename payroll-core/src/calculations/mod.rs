//! Payroll tax calculation modules.
//!
//! This module provides the three calculation surfaces of the engine: slab
//! income-tax computation, CTC decomposition, and TDS distribution. All of
//! them are pure functions over their inputs.

pub mod common;
pub mod ctc_breakdown;
pub mod slab_tax;
pub mod tds_schedule;

pub use ctc_breakdown::{CtcBreakdown, CtcDecomposeError, CtcDecomposer};
pub use slab_tax::{SlabTaxCalculator, SlabTaxError};
pub use tds_schedule::{
    DistributionMethod, MonthlyDeduction, TdsDistributionError, TdsDistributionRequest,
    TdsSchedule, distribute,
};
