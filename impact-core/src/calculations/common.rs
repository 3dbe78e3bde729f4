//! Common utility functions for impact calculations.
//!
//! This module provides shared rounding helpers used across the worksheet
//! calculations and the chart projections.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// Chart values and headline currency figures are presented in whole units;
/// this is the single place that rounding happens for them.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(21000000.4)), dec!(21000000));
/// assert_eq!(round_whole(dec!(21000000.5)), dec!(21000001));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        let result = round_whole(dec!(99.4));

        assert_eq!(result, dec!(99));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        let result = round_whole(dec!(99.5));

        assert_eq!(result, dec!(100));
    }

    #[test]
    fn round_whole_handles_negative_values() {
        let result = round_whole(dec!(-99.5));

        assert_eq!(result, dec!(-100)); // Away from zero
    }

    #[test]
    fn round_whole_preserves_whole_values() {
        let result = round_whole(dec!(21000000));

        assert_eq!(result, dec!(21000000));
    }
}
