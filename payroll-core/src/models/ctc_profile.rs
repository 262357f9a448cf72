use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a decomposition profile carries out-of-range values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CtcProfileError {
    /// The basic ratio must be between 0 and 1.
    #[error("basic ratio must be between 0 and 1, got {0}")]
    InvalidBasicRatio(Decimal),

    /// The HRA ratio must be between 0 and 1.
    #[error("HRA ratio must be between 0 and 1, got {0}")]
    InvalidHraRatio(Decimal),

    /// The gratuity ratio must be between 0 and 1.
    #[error("gratuity ratio must be between 0 and 1, got {0}")]
    InvalidGratuityRatio(Decimal),

    /// Fixed allowance amounts must be non-negative.
    #[error("fixed allowance '{name}' must be non-negative, got {amount}")]
    NegativeAllowance { name: String, amount: Decimal },

    /// The employer PF contribution must be non-negative.
    #[error("employer PF contribution must be non-negative, got {0}")]
    NegativeEmployerPf(Decimal),
}

/// Identifier for a built-in decomposition profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileCode {
    Standard,
    Lta,
}

impl ProfileCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STD",
            Self::Lta => "LTA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "STD" => Some(Self::Standard),
            "LTA" => Some(Self::Lta),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the annual gratuity provision is derived from annual basic pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GratuityRule {
    /// The statutory days-of-pay formula: `basic / 26 × days`, kept as the
    /// exact fraction rather than a pre-rounded ratio.
    DaysOfBasic { days: u32 },

    /// A plain fraction of annual basic: `round(basic × ratio)`.
    RatioOfBasic { ratio: Decimal },
}

/// How an annual CTC splits into salary components: a basic ratio, an HRA
/// ratio of basic, flat annual allowances, a flat employer PF contribution,
/// and a gratuity rule. The residual becomes special allowance.
///
/// Profiles are long-lived configuration owned by a [`crate::ConfigStore`];
/// two built-ins are provided via [`CtcProfile::builtin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtcProfile {
    pub code: ProfileCode,
    /// Fraction of CTC paid as basic, 0 to 1.
    pub basic_ratio: Decimal,
    /// Fraction of basic paid as HRA, 0 to 1.
    pub hra_ratio_of_basic: Decimal,
    /// Flat annual allowances by name (e.g. LTA), applied only when CTC > 0.
    pub fixed_allowances: BTreeMap<String, Decimal>,
    /// Flat annual employer PF contribution; does not scale with CTC.
    pub employer_pf_annual: Decimal,
    pub gratuity: GratuityRule,
}

impl CtcProfile {
    /// Returns the built-in profile for `code`.
    pub fn builtin(code: ProfileCode) -> Self {
        match code {
            ProfileCode::Standard => Self::standard(),
            ProfileCode::Lta => Self::lta(),
        }
    }

    /// Basic 50% of CTC, HRA 50% of basic, flat employer PF of 21,600,
    /// gratuity by the 15-days-of-pay formula, no fixed allowances.
    pub fn standard() -> Self {
        Self {
            code: ProfileCode::Standard,
            basic_ratio: Decimal::new(5, 1),
            hra_ratio_of_basic: Decimal::new(5, 1),
            fixed_allowances: BTreeMap::new(),
            employer_pf_annual: Decimal::from(21_600),
            gratuity: GratuityRule::DaysOfBasic { days: 15 },
        }
    }

    /// Basic 40% of CTC, HRA 50% of basic, flat LTA of 50,000, flat
    /// employer PF of 21,600, gratuity at 4.43% of basic.
    pub fn lta() -> Self {
        Self {
            code: ProfileCode::Lta,
            basic_ratio: Decimal::new(4, 1),
            hra_ratio_of_basic: Decimal::new(5, 1),
            fixed_allowances: BTreeMap::from([("LTA".to_string(), Decimal::from(50_000))]),
            employer_pf_annual: Decimal::from(21_600),
            gratuity: GratuityRule::RatioOfBasic {
                ratio: Decimal::new(443, 4),
            },
        }
    }

    /// Validates the profile values.
    ///
    /// # Errors
    ///
    /// Returns [`CtcProfileError`] if:
    /// - `basic_ratio` is not in [0, 1]
    /// - `hra_ratio_of_basic` is not in [0, 1]
    /// - a `RatioOfBasic` gratuity ratio is not in [0, 1]
    /// - any fixed allowance or the employer PF contribution is negative
    pub fn validate(&self) -> Result<(), CtcProfileError> {
        if self.basic_ratio < Decimal::ZERO || self.basic_ratio > Decimal::ONE {
            return Err(CtcProfileError::InvalidBasicRatio(self.basic_ratio));
        }
        if self.hra_ratio_of_basic < Decimal::ZERO || self.hra_ratio_of_basic > Decimal::ONE {
            return Err(CtcProfileError::InvalidHraRatio(self.hra_ratio_of_basic));
        }
        if let GratuityRule::RatioOfBasic { ratio } = &self.gratuity {
            if *ratio < Decimal::ZERO || *ratio > Decimal::ONE {
                return Err(CtcProfileError::InvalidGratuityRatio(*ratio));
            }
        }
        for (name, amount) in &self.fixed_allowances {
            if *amount < Decimal::ZERO {
                return Err(CtcProfileError::NegativeAllowance {
                    name: name.clone(),
                    amount: *amount,
                });
            }
        }
        if self.employer_pf_annual < Decimal::ZERO {
            return Err(CtcProfileError::NegativeEmployerPf(self.employer_pf_annual));
        }
        Ok(())
    }
}
