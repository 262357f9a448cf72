//! Common utility functions for payroll calculations.
//!
//! This module provides shared functionality used across the calculators:
//! whole-rupee rounding and flooring, and decimal comparison helpers.

use rust_decimal::Decimal;

/// Rounds a decimal value to a whole rupee using half-up rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.5 are rounded up (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_rupee;
///
/// assert_eq!(round_rupee(dec!(123.4)), dec!(123));
/// assert_eq!(round_rupee(dec!(123.5)), dec!(124));
/// assert_eq!(round_rupee(dec!(-123.5)), dec!(-124)); // Away from zero
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a decimal value to a whole rupee.
///
/// Used where a division deliberately discards the fractional part, such as
/// splitting an annual liability across months.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::floor_rupee;
///
/// assert_eq!(floor_rupee(dec!(14285.71)), dec!(14285));
/// assert_eq!(floor_rupee(dec!(12000)), dec!(12000));
/// ```
pub fn floor_rupee(value: Decimal) -> Decimal {
    value.floor()
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
