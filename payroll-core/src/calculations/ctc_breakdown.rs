//! Annual CTC decomposition into salary components.
//!
//! A decomposition profile names the ratios and flat constants that split a
//! cost-to-company figure into basic pay, HRA, fixed allowances, employer
//! retirals (PF, gratuity), and a residual special allowance clamped at
//! zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::CtcProfile;
//! use payroll_core::calculations::CtcDecomposer;
//!
//! let profile = CtcProfile::lta();
//! let breakdown = CtcDecomposer::new(&profile).decompose(dec!(1850000)).unwrap();
//!
//! assert_eq!(breakdown.basic, dec!(740000));
//! assert_eq!(breakdown.hra, dec!(370000));
//! assert_eq!(breakdown.gratuity, dec!(32782));
//! assert_eq!(breakdown.special_allowance, dec!(635618));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{max, round_rupee};
use crate::models::{CtcProfile, CtcProfileError, GratuityRule};

/// Errors that can occur during CTC decomposition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CtcDecomposeError {
    /// Annual CTC must be non-negative.
    #[error("annual CTC must be non-negative, got {0}")]
    NegativeCtc(Decimal),

    /// The decomposition profile carries out-of-range values.
    #[error(transparent)]
    Profile(#[from] CtcProfileError),
}

/// Result of decomposing an annual CTC under one profile.
///
/// `gross_annual` covers the employee-side components only (basic, HRA,
/// special allowance, fixed allowances); employer PF and gratuity sit
/// outside gross. `monthly_gross` is left unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtcBreakdown {
    pub basic: Decimal,
    pub hra: Decimal,
    pub special_allowance: Decimal,
    pub fixed_allowances: BTreeMap<String, Decimal>,
    pub employer_pf: Decimal,
    pub gratuity: Decimal,
    pub gross_annual: Decimal,
    pub monthly_gross: Decimal,
}

/// Calculator splitting an annual CTC according to a decomposition profile.
#[derive(Debug, Clone)]
pub struct CtcDecomposer<'a> {
    profile: &'a CtcProfile,
}

impl<'a> CtcDecomposer<'a> {
    /// Creates a decomposer over the given profile.
    pub fn new(profile: &'a CtcProfile) -> Self {
        Self { profile }
    }

    /// Decomposes `annual_ctc` into named components.
    ///
    /// Each derived line is rounded to a whole rupee independently, so the
    /// components reconcile to the CTC within a few rupees whenever the
    /// residual special allowance was not clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CtcDecomposeError`] if the CTC is negative or the profile
    /// fails validation.
    pub fn decompose(
        &self,
        annual_ctc: Decimal,
    ) -> Result<CtcBreakdown, CtcDecomposeError> {
        self.profile.validate()?;
        if annual_ctc < Decimal::ZERO {
            return Err(CtcDecomposeError::NegativeCtc(annual_ctc));
        }

        let basic = round_rupee(annual_ctc * self.profile.basic_ratio);
        let hra = round_rupee(basic * self.profile.hra_ratio_of_basic);

        // Flat constants apply only to a non-zero CTC; a zero CTC decomposes
        // to all-zero components.
        let (fixed_allowances, employer_pf) = if annual_ctc > Decimal::ZERO {
            (
                self.profile.fixed_allowances.clone(),
                self.profile.employer_pf_annual,
            )
        } else {
            (BTreeMap::new(), Decimal::ZERO)
        };

        let gratuity = match &self.profile.gratuity {
            GratuityRule::DaysOfBasic { days } => {
                round_rupee(basic / Decimal::from(26) * Decimal::from(*days))
            }
            GratuityRule::RatioOfBasic { ratio } => round_rupee(basic * *ratio),
        };

        let fixed_total: Decimal = fixed_allowances.values().copied().sum();
        let special_allowance = max(
            annual_ctc - basic - hra - fixed_total - employer_pf - gratuity,
            Decimal::ZERO,
        );

        let gross_annual = basic + hra + special_allowance + fixed_total;
        let monthly_gross = gross_annual / Decimal::from(12);

        Ok(CtcBreakdown {
            basic,
            hra,
            special_allowance,
            fixed_allowances,
            employer_pf,
            gratuity,
            gross_annual,
            monthly_gross,
        })
    }
}
