//! Common utility functions for assessment calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to a whole rupee using half-up rounding.
///
/// Municipal demand notes are issued in whole rupees; values at exactly
/// 0.5 are rounded up (away from zero).
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use stms_core::assessment::common::round_rupees;
///
/// assert_eq!(round_rupees(dec!(5399.4)), dec!(5399));
/// assert_eq!(round_rupees(dec!(5399.5)), dec!(5400));
/// assert_eq!(round_rupees(dec!(5399.6)), dec!(5400));
/// assert_eq!(round_rupees(dec!(-5399.5)), dec!(-5400)); // Away from zero
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_rupees_rounds_down_below_midpoint() {
        let result = round_rupees(dec!(1234.49));

        assert_eq!(result, dec!(1234));
    }

    #[test]
    fn round_rupees_rounds_up_at_midpoint() {
        let result = round_rupees(dec!(1234.50));

        assert_eq!(result, dec!(1235));
    }

    #[test]
    fn round_rupees_rounds_up_above_midpoint() {
        let result = round_rupees(dec!(1234.51));

        assert_eq!(result, dec!(1235));
    }

    #[test]
    fn round_rupees_handles_negative_values() {
        let result = round_rupees(dec!(-1234.50));

        assert_eq!(result, dec!(-1235)); // Away from zero
    }

    #[test]
    fn round_rupees_preserves_whole_values() {
        let result = round_rupees(dec!(1234));

        assert_eq!(result, dec!(1234));
    }

    #[test]
    fn round_rupees_handles_zero() {
        let result = round_rupees(dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn round_rupees_handles_sub_rupee_values() {
        let result = round_rupees(dec!(0.49));

        assert_eq!(result, dec!(0));
    }
}
