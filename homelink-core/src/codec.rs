//! Fixed-point decimal codec
//!
//! Every protocol value carries exactly one fractional decimal digit and
//! travels as two separate bytes: the integer part and the fractional digit.
//!
//! ```text
//! 25.5  ->  int = 25, frac = 5
//! 25.95 ->  int = 25, frac = round(9.5) = 10  ->  carry  ->  int = 26, frac = 0
//! ```

use std::fmt;

use tracing::warn;

use crate::constants::masks;

/// Split a decimal value into its integer part and a single fractional digit
///
/// The integer part is truncated toward zero. The fractional digit is the
/// remainder scaled by ten and rounded half to even; a digit that rounds up
/// to 10 is carried into the integer part.
///
/// `value` must be finite. Callers are expected to reject NaN and infinities
/// before encoding.
///
/// # Examples
///
/// ```
/// use homelink_core::codec;
///
/// assert_eq!(codec::encode(25.5), (25, 5));
/// assert_eq!(codec::encode(25.95), (26, 0));
/// assert_eq!(codec::encode(25.25), (25, 2));
/// ```
pub fn encode(value: f64) -> (i64, i64) {
    debug_assert!(value.is_finite(), "cannot encode non-finite value {value}");

    let whole = value.trunc();
    let mut int_part = whole as i64;
    // Scale before subtracting so one-decimal inputs stay exact
    let mut frac_digit = (value * 10.0 - whole * 10.0).round_ties_even() as i64;

    if frac_digit == 10 {
        int_part = int_part.saturating_add(1);
        frac_digit = 0;
    } else if frac_digit == -10 {
        int_part = int_part.saturating_sub(1);
        frac_digit = 0;
    }

    (int_part, frac_digit)
}

/// Rebuild a decimal value from its integer part and fractional digit
///
/// ```
/// use homelink_core::codec;
///
/// assert_eq!(codec::decode(24, 5), 24.5);
/// ```
pub fn decode(int_part: i64, frac_digit: i64) -> f64 {
    (int_part as f64 * 10.0 + frac_digit as f64) / 10.0
}

/// Clamp a component into the six-bit payload range `0..=63`
///
/// Emits a warning when the value had to be changed.
pub fn clamp6bit(n: i64) -> u8 {
    let max = i64::from(masks::DATA_6BIT_MAX);
    let clamped = n.clamp(0, max);

    if clamped != n {
        warn!(value = n, clamped, "Value outside 6-bit range, clamped");
    }

    clamped as u8
}

/// A reading reconstructed from an integer byte and a fractional-digit byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPoint {
    /// Integer part as received
    pub int_part: u8,

    /// Fractional digit as received (0-9 from a well-behaved peer)
    pub frac_digit: u8,
}

impl FixedPoint {
    pub fn new(int_part: u8, frac_digit: u8) -> Self {
        Self {
            int_part,
            frac_digit,
        }
    }

    /// Decimal value of this reading
    pub fn value(&self) -> f64 {
        decode(i64::from(self.int_part), i64::from(self.frac_digit))
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode(25.5), (25, 5));
        assert_eq!(encode(25.6), (25, 6));
        assert_eq!(encode(0.0), (0, 0));
        assert_eq!(encode(63.9), (63, 9));
    }

    #[test]
    fn test_encode_carry() {
        assert_eq!(encode(25.95), (26, 0));
        assert_eq!(encode(9.96), (10, 0));
    }

    #[test]
    fn test_encode_rounds_second_digit() {
        assert_eq!(encode(27.75), (27, 8));
        assert_eq!(encode(27.74), (27, 7));
        assert_eq!(encode(0.56), (0, 6));
    }

    #[test]
    fn test_encode_ties_round_to_even() {
        assert_eq!(encode(25.25), (25, 2));
        assert_eq!(encode(0.25), (0, 2));
        assert_eq!(encode(0.35), (0, 4));
    }

    #[test]
    fn test_encode_negative_truncates_toward_zero() {
        assert_eq!(encode(-0.3), (0, -3));
        assert_eq!(encode(-2.5), (-2, -5));
        assert_eq!(encode(-2.96), (-3, 0));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(10, 0), 10.0);
        assert_eq!(decode(24, 5), 24.5);
        assert_eq!(decode(13, 2), 13.2);
        assert_eq!(decode(50, 5), 50.5);
    }

    #[test]
    fn test_clamp6bit() {
        assert_eq!(clamp6bit(0), 0);
        assert_eq!(clamp6bit(25), 25);
        assert_eq!(clamp6bit(63), 63);
        assert_eq!(clamp6bit(64), 63);
        assert_eq!(clamp6bit(1000), 63);
        assert_eq!(clamp6bit(-1), 0);
    }

    #[test]
    fn test_fixed_point_value() {
        let reading = FixedPoint::new(24, 5);
        assert_eq!(reading.value(), 24.5);
        assert_eq!(reading.to_string(), "24.5");
        assert_eq!(FixedPoint::default().value(), 0.0);
    }

    proptest! {
        #[test]
        fn test_round_trip(tenths in 0i64..640) {
            let value = tenths as f64 / 10.0;
            let (int_part, frac_digit) = encode(value);

            prop_assert!((0..=9).contains(&frac_digit));
            prop_assert_eq!(decode(int_part, frac_digit), value);
        }

        #[test]
        fn test_clamp6bit_idempotent(n in any::<i64>()) {
            let once = clamp6bit(n);
            prop_assert_eq!(clamp6bit(i64::from(once)), once);
        }

        #[test]
        fn test_encode_frac_in_range(value in 0.0f64..64.0) {
            let (int_part, frac_digit) = encode(value);

            prop_assert!((0..=9).contains(&frac_digit));
            prop_assert!((decode(int_part, frac_digit) - value).abs() <= 0.05 + 1e-9);
        }
    }
}
