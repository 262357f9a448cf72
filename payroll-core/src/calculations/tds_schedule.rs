//! TDS distribution across payroll months.
//!
//! This module spreads an annual tax-deducted-at-source liability across a
//! caller-selected, ordered subset of payroll months using one of four
//! strategies, each with its own edge-case policy.
//!
//! # Strategies
//!
//! | Method         | Behavior |
//! |----------------|----------|
//! | `Equal`        | `floor(liability / n)` to every selected month; the floor loss is accepted |
//! | `Weighted`     | `round(liability × weight / 100)` per month; weight sums other than 100 are reported, not rejected |
//! | `MinThreshold` | Equal when the share meets the minimum; otherwise only the first `floor(liability / min)` months stay active, the last of them absorbing the rounding remainder |
//! | `MaxCap`       | Every month gets `min(cap, floor(liability / n))`; the shortfall is reported as carry-forward, never redistributed |
//!
//! The result always lists all twelve months in fiscal order; months outside
//! the selection carry amount zero and the reason `"excluded"`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::PayrollMonth;
//! use payroll_core::calculations::{DistributionMethod, TdsDistributionRequest, distribute};
//!
//! let request = TdsDistributionRequest {
//!     annual_liability: dec!(120000),
//!     months: PayrollMonth::FISCAL_YEAR[..10].to_vec(),
//!     method: DistributionMethod::Equal,
//! };
//!
//! let schedule = distribute(&request).unwrap();
//!
//! assert_eq!(schedule.months[0].amount, dec!(12000));
//! assert_eq!(schedule.total_deducted, dec!(120000));
//! assert_eq!(schedule.carry_forward, None);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{floor_rupee, round_rupee};
use crate::models::PayrollMonth;

/// Reason attached to months outside the selection.
pub const REASON_NOT_SELECTED: &str = "excluded";

/// Reason attached to selected months dropped by the minimum-threshold walk.
pub const REASON_AUTO_EXCLUDED: &str = "auto-excluded to meet minimum threshold";

/// Reason attached to the month that absorbs the rounding remainder.
pub const REASON_REMAINDER_ADJUSTED: &str = "adjusted to absorb rounding remainder";

/// The closed set of distribution strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionMethod {
    Equal,
    /// Percentage per selected month; a missing entry counts as zero, and
    /// entries for unselected months are ignored.
    Weighted { weights: BTreeMap<PayrollMonth, Decimal> },
    /// No active month may fall below `min_monthly`.
    MinThreshold { min_monthly: Decimal },
    /// No active month may exceed `max_monthly`.
    MaxCap { max_monthly: Decimal },
}

/// One TDS distribution request. `months` is the caller's selection, in an
/// order that is significant for [`DistributionMethod::MinThreshold`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsDistributionRequest {
    pub annual_liability: Decimal,
    pub months: Vec<PayrollMonth>,
    pub method: DistributionMethod,
}

/// Errors that can occur when validating a distribution request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TdsDistributionError {
    /// The month selection is empty.
    #[error("no payroll months selected")]
    NoMonthsSelected,

    /// A month appears more than once in the selection.
    #[error("month {0} appears more than once in the selection")]
    DuplicateMonth(PayrollMonth),

    /// The annual liability must be non-negative.
    #[error("annual liability must be non-negative, got {0}")]
    NegativeLiability(Decimal),

    /// A weight must be a percentage between 0 and 100.
    #[error("weight for {month} must be between 0 and 100, got {weight}")]
    WeightOutOfRange { month: PayrollMonth, weight: Decimal },

    /// The minimum monthly amount must be non-negative.
    #[error("minimum monthly amount must be non-negative, got {0}")]
    NegativeThreshold(Decimal),

    /// The monthly cap must be non-negative.
    #[error("monthly cap must be non-negative, got {0}")]
    NegativeCap(Decimal),
}

/// One month's line in a distribution schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDeduction {
    pub month: PayrollMonth,
    pub amount: Decimal,
    pub included: bool,
    /// Set when the month was excluded or its amount was adjusted.
    pub reason: Option<String>,
}

impl MonthlyDeduction {
    fn active(
        month: PayrollMonth,
        amount: Decimal,
    ) -> Self {
        Self {
            month,
            amount,
            included: true,
            reason: None,
        }
    }

    fn excluded(
        month: PayrollMonth,
        reason: &str,
    ) -> Self {
        Self {
            month,
            amount: Decimal::ZERO,
            included: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Result of one distribution: all twelve months in fiscal order, the total
/// actually scheduled, and — for [`DistributionMethod::MaxCap`] only — the
/// carry-forward shortfall left unscheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsSchedule {
    pub months: Vec<MonthlyDeduction>,
    pub total_deducted: Decimal,
    pub carry_forward: Option<Decimal>,
}

impl TdsDistributionRequest {
    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`TdsDistributionError`] if:
    /// - the selection is empty or contains a duplicate month
    /// - the annual liability is negative
    /// - a consulted weight falls outside 0–100
    /// - the strategy's threshold or cap is negative
    pub fn validate(&self) -> Result<(), TdsDistributionError> {
        if self.months.is_empty() {
            return Err(TdsDistributionError::NoMonthsSelected);
        }
        let mut seen = BTreeSet::new();
        for month in &self.months {
            if !seen.insert(*month) {
                return Err(TdsDistributionError::DuplicateMonth(*month));
            }
        }
        if self.annual_liability < Decimal::ZERO {
            return Err(TdsDistributionError::NegativeLiability(
                self.annual_liability,
            ));
        }
        match &self.method {
            DistributionMethod::Equal => {}
            DistributionMethod::Weighted { weights } => {
                for month in &self.months {
                    let weight = weights.get(month).copied().unwrap_or(Decimal::ZERO);
                    if weight < Decimal::ZERO || weight > Decimal::ONE_HUNDRED {
                        return Err(TdsDistributionError::WeightOutOfRange {
                            month: *month,
                            weight,
                        });
                    }
                }
            }
            DistributionMethod::MinThreshold { min_monthly } => {
                if *min_monthly < Decimal::ZERO {
                    return Err(TdsDistributionError::NegativeThreshold(*min_monthly));
                }
            }
            DistributionMethod::MaxCap { max_monthly } => {
                if *max_monthly < Decimal::ZERO {
                    return Err(TdsDistributionError::NegativeCap(*max_monthly));
                }
            }
        }
        Ok(())
    }
}

/// Spreads `request.annual_liability` across the selected months.
///
/// Pure and idempotent: the schedule is a function of the request alone.
///
/// # Errors
///
/// Returns [`TdsDistributionError`] as described on
/// [`TdsDistributionRequest::validate`]; nothing is computed from an
/// invalid request.
pub fn distribute(
    request: &TdsDistributionRequest,
) -> Result<TdsSchedule, TdsDistributionError> {
    request.validate()?;

    let liability = request.annual_liability;
    let selected = &request.months;
    let count = Decimal::from(selected.len());

    let mut allocations: BTreeMap<PayrollMonth, MonthlyDeduction> = BTreeMap::new();

    match &request.method {
        DistributionMethod::Equal => {
            let per_month = floor_rupee(liability / count);
            for month in selected {
                allocations.insert(*month, MonthlyDeduction::active(*month, per_month));
            }
        }
        DistributionMethod::Weighted { weights } => {
            let mut weight_total = Decimal::ZERO;
            for month in selected {
                let weight = weights.get(month).copied().unwrap_or(Decimal::ZERO);
                weight_total += weight;
                let amount = round_rupee(liability * weight / Decimal::ONE_HUNDRED);
                allocations.insert(*month, MonthlyDeduction::active(*month, amount));
            }
            if weight_total != Decimal::ONE_HUNDRED {
                warn!(
                    %weight_total,
                    "weighted distribution percentages do not sum to 100"
                );
            }
        }
        DistributionMethod::MinThreshold { min_monthly } => {
            let equal_share = floor_rupee(liability / count);
            if equal_share >= *min_monthly {
                for month in selected {
                    allocations.insert(*month, MonthlyDeduction::active(*month, equal_share));
                }
            } else {
                // min_monthly > equal_share ≥ 0 here, so the division is safe.
                let active_months = floor_rupee(liability / *min_monthly)
                    .to_usize()
                    .unwrap_or(0)
                    .clamp(1, selected.len());
                let per_month = floor_rupee(liability / Decimal::from(active_months));
                let remainder = liability - per_month * Decimal::from(active_months);

                for (index, month) in selected.iter().enumerate() {
                    if index + 1 < active_months {
                        allocations.insert(*month, MonthlyDeduction::active(*month, per_month));
                    } else if index + 1 == active_months {
                        // The last active month absorbs the rounding remainder.
                        let mut entry =
                            MonthlyDeduction::active(*month, per_month + remainder);
                        if remainder > Decimal::ZERO {
                            entry.reason = Some(REASON_REMAINDER_ADJUSTED.to_string());
                        }
                        allocations.insert(*month, entry);
                    } else {
                        allocations.insert(
                            *month,
                            MonthlyDeduction::excluded(*month, REASON_AUTO_EXCLUDED),
                        );
                    }
                }
            }
        }
        DistributionMethod::MaxCap { max_monthly } => {
            let equal_share = floor_rupee(liability / count);
            let per_month = equal_share.min(*max_monthly);
            for month in selected {
                allocations.insert(*month, MonthlyDeduction::active(*month, per_month));
            }
        }
    }

    let mut months = Vec::with_capacity(PayrollMonth::FISCAL_YEAR.len());
    let mut total_deducted = Decimal::ZERO;
    for month in PayrollMonth::FISCAL_YEAR {
        match allocations.remove(&month) {
            Some(entry) => {
                if entry.included {
                    total_deducted += entry.amount;
                }
                months.push(entry);
            }
            None => months.push(MonthlyDeduction::excluded(month, REASON_NOT_SELECTED)),
        }
    }

    let carry_forward = match &request.method {
        DistributionMethod::MaxCap { .. } => Some(liability - total_deducted),
        _ => None,
    };
    match carry_forward {
        Some(shortfall) if shortfall > Decimal::ZERO => {
            warn!(%shortfall, "capped schedule leaves a carry-forward");
        }
        _ => {}
    }

    Ok(TdsSchedule {
        months,
        total_deducted,
        carry_forward,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("payroll_core=debug")
            .with_test_writer()
            .try_init();
    }

    fn first_months(n: usize) -> Vec<PayrollMonth> {
        PayrollMonth::FISCAL_YEAR[..n].to_vec()
    }

    fn amounts_for_selected(
        schedule: &TdsSchedule,
        n: usize,
    ) -> Vec<Decimal> {
        schedule.months[..n].iter().map(|m| m.amount).collect()
    }

    // =========================================================================
    // Equal tests
    // =========================================================================

    #[test]
    fn equal_splits_across_selected_months() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::Equal,
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(amounts_for_selected(&schedule, 10), vec![dec!(12000); 10]);
        assert_eq!(schedule.total_deducted, dec!(120000));
        assert_eq!(schedule.carry_forward, None);
    }

    #[test]
    fn equal_marks_unselected_months_excluded() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::Equal,
        };

        let schedule = distribute(&request).unwrap();

        for entry in &schedule.months[10..] {
            assert_eq!(entry.amount, dec!(0));
            assert!(!entry.included);
            assert_eq!(entry.reason.as_deref(), Some(REASON_NOT_SELECTED));
        }
    }

    #[test]
    fn equal_accepts_the_floor_loss() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(100000),
            months: first_months(7),
            method: DistributionMethod::Equal,
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(amounts_for_selected(&schedule, 7), vec![dec!(14285); 7]);
        assert_eq!(schedule.total_deducted, dec!(99995));
    }

    #[test]
    fn equal_with_zero_liability_assigns_zero_everywhere() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(0),
            months: first_months(12),
            method: DistributionMethod::Equal,
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(schedule.total_deducted, dec!(0));
        assert!(schedule.months.iter().all(|m| m.included));
    }

    // =========================================================================
    // Weighted tests
    // =========================================================================

    #[test]
    fn weighted_applies_percentages_per_month() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(3),
            method: DistributionMethod::Weighted {
                weights: BTreeMap::from([
                    (PayrollMonth::April, dec!(50)),
                    (PayrollMonth::May, dec!(30)),
                    (PayrollMonth::June, dec!(20)),
                ]),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(
            amounts_for_selected(&schedule, 3),
            vec![dec!(60000), dec!(36000), dec!(24000)]
        );
        assert_eq!(schedule.total_deducted, dec!(120000));
    }

    #[test]
    fn weighted_rounds_half_up() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(1001),
            months: first_months(2),
            method: DistributionMethod::Weighted {
                weights: BTreeMap::from([
                    (PayrollMonth::April, dec!(50)),
                    (PayrollMonth::May, dec!(50)),
                ]),
            },
        };

        let schedule = distribute(&request).unwrap();

        // 1,001 × 50% = 500.5 → 501 for each month.
        assert_eq!(amounts_for_selected(&schedule, 2), vec![dec!(501), dec!(501)]);
    }

    #[test]
    fn weighted_reports_achieved_total_when_weights_fall_short() {
        init_tracing();

        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(3),
            method: DistributionMethod::Weighted {
                // June has no weight; the sum is 70, not 100.
                weights: BTreeMap::from([
                    (PayrollMonth::April, dec!(40)),
                    (PayrollMonth::May, dec!(30)),
                ]),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(
            amounts_for_selected(&schedule, 3),
            vec![dec!(48000), dec!(36000), dec!(0)]
        );
        assert_eq!(schedule.total_deducted, dec!(84000));
    }

    #[test]
    fn weighted_ignores_weights_for_unselected_months() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(2),
            method: DistributionMethod::Weighted {
                weights: BTreeMap::from([
                    (PayrollMonth::April, dec!(50)),
                    (PayrollMonth::May, dec!(50)),
                    (PayrollMonth::March, dec!(50)),
                ]),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(schedule.total_deducted, dec!(120000));
        let march = schedule.months.last().unwrap();
        assert_eq!(march.month, PayrollMonth::March);
        assert_eq!(march.amount, dec!(0));
        assert!(!march.included);
    }

    #[test]
    fn weighted_rejects_weight_above_100() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(1),
            method: DistributionMethod::Weighted {
                weights: BTreeMap::from([(PayrollMonth::April, dec!(150))]),
            },
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::WeightOutOfRange {
                month: PayrollMonth::April,
                weight: dec!(150),
            })
        );
    }

    #[test]
    fn weighted_rejects_negative_weight() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(1),
            method: DistributionMethod::Weighted {
                weights: BTreeMap::from([(PayrollMonth::April, dec!(-10))]),
            },
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::WeightOutOfRange {
                month: PayrollMonth::April,
                weight: dec!(-10),
            })
        );
    }

    // =========================================================================
    // MinThreshold tests
    // =========================================================================

    #[test]
    fn min_threshold_behaves_as_equal_when_share_meets_minimum() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(10000),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(amounts_for_selected(&schedule, 10), vec![dec!(12000); 10]);
        assert_eq!(schedule.total_deducted, dec!(120000));
    }

    #[test]
    fn min_threshold_auto_excludes_trailing_months() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(15000),
            },
        };

        let schedule = distribute(&request).unwrap();

        // Equal share 12,000 is under the minimum; 120,000 / 15,000 keeps
        // the first 8 selected months active at exactly 15,000.
        assert_eq!(amounts_for_selected(&schedule, 8), vec![dec!(15000); 8]);
        for entry in &schedule.months[8..10] {
            assert_eq!(entry.amount, dec!(0));
            assert!(!entry.included);
            assert_eq!(entry.reason.as_deref(), Some(REASON_AUTO_EXCLUDED));
        }
        assert_eq!(schedule.total_deducted, dec!(120000));
    }

    #[test]
    fn min_threshold_keeps_plain_exclusion_reason_for_unselected_months() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(15000),
            },
        };

        let schedule = distribute(&request).unwrap();

        for entry in &schedule.months[10..] {
            assert_eq!(entry.reason.as_deref(), Some(REASON_NOT_SELECTED));
        }
    }

    #[test]
    fn min_threshold_last_active_month_absorbs_remainder() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(100000),
            months: first_months(10),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(15000),
            },
        };

        let schedule = distribute(&request).unwrap();

        // 100,000 / 15,000 → 6 active months; floor(100,000 / 6) = 16,666
        // with a remainder of 4 landing on the sixth month.
        assert_eq!(amounts_for_selected(&schedule, 5), vec![dec!(16666); 5]);
        let sixth = &schedule.months[5];
        assert_eq!(sixth.amount, dec!(16670));
        assert_eq!(sixth.reason.as_deref(), Some(REASON_REMAINDER_ADJUSTED));
        assert_eq!(schedule.total_deducted, dec!(100000));
    }

    #[test]
    fn min_threshold_clamps_active_months_to_one() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(8000),
            months: first_months(3),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(10000),
            },
        };

        let schedule = distribute(&request).unwrap();

        // floor(8,000 / 10,000) = 0, clamped to a single month absorbing
        // the full liability.
        assert_eq!(schedule.months[0].amount, dec!(8000));
        for entry in &schedule.months[1..3] {
            assert_eq!(entry.reason.as_deref(), Some(REASON_AUTO_EXCLUDED));
        }
        assert_eq!(schedule.total_deducted, dec!(8000));
    }

    #[test]
    fn min_threshold_rejects_negative_minimum() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(-1),
            },
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::NegativeThreshold(dec!(-1)))
        );
    }

    // =========================================================================
    // MaxCap tests
    // =========================================================================

    #[test]
    fn max_cap_caps_each_month_and_reports_carry_forward() {
        init_tracing();

        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MaxCap {
                max_monthly: dec!(10000),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(amounts_for_selected(&schedule, 10), vec![dec!(10000); 10]);
        assert_eq!(schedule.total_deducted, dec!(100000));
        assert_eq!(schedule.carry_forward, Some(dec!(20000)));
    }

    #[test]
    fn max_cap_without_shortfall_reports_zero_carry_forward() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MaxCap {
                max_monthly: dec!(15000),
            },
        };

        let schedule = distribute(&request).unwrap();

        assert_eq!(amounts_for_selected(&schedule, 10), vec![dec!(12000); 10]);
        assert_eq!(schedule.carry_forward, Some(dec!(0)));
    }

    #[test]
    fn max_cap_floor_loss_lands_in_carry_forward() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(100000),
            months: first_months(3),
            method: DistributionMethod::MaxCap {
                max_monthly: dec!(50000),
            },
        };

        let schedule = distribute(&request).unwrap();

        // floor(100,000 / 3) = 33,333 per month, under the cap; the floor
        // loss of 1 is reported, not redistributed.
        assert_eq!(schedule.total_deducted, dec!(99999));
        assert_eq!(schedule.carry_forward, Some(dec!(1)));
    }

    #[test]
    fn max_cap_rejects_negative_cap() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MaxCap {
                max_monthly: dec!(-1),
            },
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::NegativeCap(dec!(-1)))
        );
    }

    // =========================================================================
    // request validation tests
    // =========================================================================

    #[test]
    fn empty_selection_is_rejected() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: vec![],
            method: DistributionMethod::Equal,
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::NoMonthsSelected)
        );
    }

    #[test]
    fn duplicate_month_is_rejected() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: vec![PayrollMonth::April, PayrollMonth::May, PayrollMonth::April],
            method: DistributionMethod::Equal,
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::DuplicateMonth(PayrollMonth::April))
        );
    }

    #[test]
    fn negative_liability_is_rejected() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(-120000),
            months: first_months(10),
            method: DistributionMethod::Equal,
        };

        assert_eq!(
            distribute(&request),
            Err(TdsDistributionError::NegativeLiability(dec!(-120000)))
        );
    }

    // =========================================================================
    // schedule shape tests
    // =========================================================================

    #[test]
    fn schedule_lists_all_twelve_months_in_fiscal_order() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            // Selection order deliberately differs from fiscal order.
            months: vec![PayrollMonth::January, PayrollMonth::April],
            method: DistributionMethod::Equal,
        };

        let schedule = distribute(&request).unwrap();

        let listed: Vec<PayrollMonth> = schedule.months.iter().map(|m| m.month).collect();
        assert_eq!(listed, PayrollMonth::FISCAL_YEAR.to_vec());
        assert!(schedule.months[0].included); // April
        assert!(schedule.months[9].included); // January
    }

    #[test]
    fn min_threshold_walk_follows_selection_order() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(30000),
            // March listed first, so March stays active and April is dropped.
            months: vec![PayrollMonth::March, PayrollMonth::April],
            method: DistributionMethod::MinThreshold {
                min_monthly: dec!(20000),
            },
        };

        let schedule = distribute(&request).unwrap();

        let march = schedule.months.last().unwrap();
        let april = &schedule.months[0];
        assert_eq!(march.amount, dec!(30000));
        assert!(march.included);
        assert_eq!(april.amount, dec!(0));
        assert_eq!(april.reason.as_deref(), Some(REASON_AUTO_EXCLUDED));
    }

    #[test]
    fn identical_requests_give_identical_schedules() {
        let request = TdsDistributionRequest {
            annual_liability: dec!(120000),
            months: first_months(10),
            method: DistributionMethod::MaxCap {
                max_monthly: dec!(10000),
            },
        };

        assert_eq!(distribute(&request), distribute(&request));
    }
}
