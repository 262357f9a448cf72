//! Slab income-tax computation.
//!
//! This module implements the marginal-rate ("slab") income-tax calculation:
//! a standard deduction is subtracted from annual income, the remainder is
//! taxed bracket by bracket from the top slab downward, and a flat cess
//! percentage is applied to the accumulated total.
//!
//! # Computation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | `taxable = max(0, annual_income − standard_deduction)` |
//! | 2    | For each slab, highest lower bound first: tax the portion of `taxable` above the bound at the slab rate, then clamp `taxable` down to the bound |
//! | 3    | Multiply the accumulated tax by `1 + cess_rate/100` |
//! | 4    | Round to the nearest whole rupee (half-up) |
//!
//! Per-slab accumulation is exact; step 4 is the only rounding point.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{RegimeConfig, RegimeKind, TaxSlab};
//! use payroll_core::calculations::SlabTaxCalculator;
//!
//! // FY 2025-26 new-regime slab table.
//! let regime = RegimeConfig {
//!     financial_year: "2025-26".to_string(),
//!     regime: RegimeKind::New,
//!     standard_deduction: dec!(75000),
//!     cess_rate: dec!(4),
//!     slabs: vec![
//!         TaxSlab { lower_bound: dec!(0), upper_bound: Some(dec!(400000)), rate: dec!(0) },
//!         TaxSlab { lower_bound: dec!(400000), upper_bound: Some(dec!(800000)), rate: dec!(5) },
//!         TaxSlab { lower_bound: dec!(800000), upper_bound: Some(dec!(1200000)), rate: dec!(10) },
//!         TaxSlab { lower_bound: dec!(1200000), upper_bound: Some(dec!(1600000)), rate: dec!(15) },
//!         TaxSlab { lower_bound: dec!(1600000), upper_bound: Some(dec!(2000000)), rate: dec!(20) },
//!         TaxSlab { lower_bound: dec!(2000000), upper_bound: Some(dec!(2400000)), rate: dec!(25) },
//!         TaxSlab { lower_bound: dec!(2400000), upper_bound: None, rate: dec!(30) },
//!     ],
//! };
//!
//! let calculator = SlabTaxCalculator::new(&regime);
//!
//! // Taxable 1,225,000 → 20,000 + 40,000 + 3,750 = 63,750 before cess.
//! assert_eq!(calculator.compute_tax(dec!(1300000)).unwrap(), dec!(66300));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{max, round_rupee};
use crate::models::{RegimeConfig, TaxSlab};

/// Errors that can occur during slab tax computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabTaxError {
    /// Annual income must be non-negative.
    #[error("annual income must be non-negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Calculator for gross annual income-tax liability under one regime.
///
/// Wraps an immutable [`RegimeConfig`] snapshot; each call operates only on
/// its argument and the snapshot, so a calculator may be shared freely
/// across threads.
///
/// A malformed slab table (gaps, overlaps, decreasing rates) is not
/// validated: it still computes, which is the contract the configuration
/// source relies on. An empty table yields zero tax.
#[derive(Debug, Clone)]
pub struct SlabTaxCalculator<'a> {
    regime: &'a RegimeConfig,
}

impl<'a> SlabTaxCalculator<'a> {
    /// Creates a calculator over the given regime snapshot.
    pub fn new(regime: &'a RegimeConfig) -> Self {
        Self { regime }
    }

    /// Computes the gross annual tax liability, cess included, rounded to a
    /// whole rupee.
    ///
    /// Monotonic in `annual_income`: increasing income never decreases tax.
    /// Zero income yields zero tax.
    ///
    /// # Errors
    ///
    /// Returns [`SlabTaxError::NegativeIncome`] if `annual_income` is
    /// negative.
    pub fn compute_tax(
        &self,
        annual_income: Decimal,
    ) -> Result<Decimal, SlabTaxError> {
        if annual_income < Decimal::ZERO {
            return Err(SlabTaxError::NegativeIncome(annual_income));
        }

        let mut taxable = max(
            annual_income - self.regime.standard_deduction,
            Decimal::ZERO,
        );

        // Highest lower bound first, whatever order the table arrived in.
        let mut slabs: Vec<&TaxSlab> = self.regime.slabs.iter().collect();
        slabs.sort_by(|a, b| b.lower_bound.cmp(&a.lower_bound));

        let mut tax = Decimal::ZERO;
        for slab in slabs {
            if taxable > slab.lower_bound {
                tax += (taxable - slab.lower_bound) * slab.rate / Decimal::ONE_HUNDRED;
                taxable = slab.lower_bound;
            }
        }

        let with_cess = tax * (Decimal::ONE + self.regime.cess_rate / Decimal::ONE_HUNDRED);
        Ok(round_rupee(with_cess))
    }
}
