//! Shared numeric helpers for monetary rounding

/// Round a monetary amount to the nearest cent/penny.
///
/// Used for reported totals and cash flows. Intermediate arithmetic stays at
/// full precision; rounding happens once, when a figure lands on a snapshot.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(round_cents(666.6666666), 666.67);
        assert_eq!(round_cents(1042.185), 1042.19);
        assert_eq!(round_cents(100.0), 100.0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_cents(0.005), 0.01);
        assert_eq!(round_cents(-0.005), -0.01);
        assert_eq!(round_cents(-42.586666), -42.59);
    }

    #[test]
    fn test_zero_is_unchanged() {
        assert_eq!(round_cents(0.0), 0.0);
    }
}
