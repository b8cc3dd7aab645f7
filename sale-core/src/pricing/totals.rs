//! Deterministic line-total arithmetic.
//!
//! Totals are recomputed from scratch on every price or quantity event, so
//! the functions here are pure and rounding happens in exactly one place.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero), matching
/// standard financial rounding conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sale_core::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Line total for a unit price and quantity, rounded to cents.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sale_core::pricing::line_total;
///
/// assert_eq!(line_total(dec!(1234.5), dec!(2)), dec!(2469.00));
/// assert_eq!(line_total(dec!(19.9), dec!(0.5)), dec!(9.95));
/// ```
pub fn line_total(
    unit_price: Decimal,
    quantity: Decimal,
) -> Decimal {
    round_half_up(unit_price * quantity)
}
