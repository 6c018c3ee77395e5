//! Number classification and construction.

use crate::error::Reason;

/// A decoded JSON number.
///
/// An integer literal whose magnitude fits the signed 64-bit range is always
/// `Integer`; the presence of a decimal point or exponent always yields
/// `Double`. A bare integer literal outside the signed 64-bit range is a
/// [`Reason::NumberOverflow`] failure, never a silent float.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact signed 64-bit integer.
    Integer(i64),
    /// An IEEE-754 64-bit float.
    Double(f64),
}

const I64_MAX: u64 = i64::MAX as u64;

/// Builds a [`Number`] from the scanner's accumulated parts.
///
/// `divisor` is ten times the power-of-ten scale of `mantissa`, matching the
/// scanner's per-digit accumulation. The exponent is applied by repeated
/// multiplication or division by ten rather than a power function, so results
/// track the digit-at-a-time semantics exactly.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub(crate) fn build(
    significand: u64,
    mantissa: Option<u64>,
    exponent: Option<u64>,
    divisor: f64,
    negative: bool,
    negative_exponent: bool,
) -> Result<Number, Reason> {
    if mantissa.is_some() || exponent.is_some() {
        let divisor = divisor / 10.0;
        let sign = if negative { -1.0 } else { 1.0 };
        let mut value = sign * (significand as f64 + mantissa.unwrap_or(0) as f64 / divisor);

        if let Some(exponent) = exponent {
            for _ in 0..exponent {
                if negative_exponent {
                    value /= 10.0;
                } else {
                    value *= 10.0;
                }
            }
        }

        return Ok(Number::Double(value));
    }

    match (significand, negative) {
        (0..=I64_MAX, false) => Ok(Number::Integer(significand as i64)),
        (0..=I64_MAX, true) => Ok(Number::Integer(-(significand as i64))),
        // |i64::MIN| does not fit the positive range; map it directly.
        (s, true) if s == I64_MAX + 1 => Ok(Number::Integer(i64::MIN)),
        _ => Err(Reason::NumberOverflow),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::{Number, build};
    use crate::error::Reason;

    #[test]
    fn bare_significand_is_integer() {
        assert_eq!(build(24, None, None, 10.0, false, false), Ok(Number::Integer(24)));
        assert_eq!(build(32, None, None, 10.0, true, false), Ok(Number::Integer(-32)));
    }

    #[test]
    fn signed_64_bit_boundaries() {
        let max = i64::MAX as u64;
        assert_eq!(build(max, None, None, 10.0, false, false), Ok(Number::Integer(i64::MAX)));
        assert_eq!(build(max + 1, None, None, 10.0, true, false), Ok(Number::Integer(i64::MIN)));
        assert_eq!(
            build(max + 1, None, None, 10.0, false, false),
            Err(Reason::NumberOverflow)
        );
        assert_eq!(
            build(max + 2, None, None, 10.0, true, false),
            Err(Reason::NumberOverflow)
        );
    }

    #[test]
    fn mantissa_scales_by_divisor() {
        // 46.57: two fractional digits leave divisor at 1000.
        let Ok(Number::Double(value)) = build(46, Some(57), None, 1000.0, false, false) else {
            panic!("expected a double");
        };
        assert_eq!(value, 46.57);
    }

    #[test]
    fn exponent_applies_by_repeated_scaling() {
        let Ok(Number::Double(value)) = build(24, None, Some(2), 10.0, false, false) else {
            panic!("expected a double");
        };
        assert_eq!(value, 2400.0);

        let Ok(Number::Double(value)) = build(24, Some(3245), Some(2), 100_000.0, true, true) else {
            panic!("expected a double");
        };
        assert_eq!(value, -0.243245);
    }

    #[test]
    fn mantissa_alone_is_double() {
        let Ok(Number::Double(value)) = build(0, Some(98), None, 1000.0, true, false) else {
            panic!("expected a double");
        };
        assert_eq!(value, -0.98);
    }
}
