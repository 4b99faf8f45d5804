//! Shared arithmetic helpers for the calculation engine.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half-up.
///
/// Midpoints round away from zero, the usual convention on tax forms.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use assist_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(624.995)), dec!(625.00));
/// assert_eq!(round_half_up(dec!(624.994)), dec!(624.99));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero from below.
///
/// Used wherever a subtraction must not produce a negative monetary amount,
/// such as taxable income after deductions.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
