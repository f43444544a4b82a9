use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Round the number to the given number of decimals.
///
/// Halfway cases round away from zero. The result is never negative zero, so
/// that formatting it does not produce `-0`.
pub(crate) fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10.0 as Float).powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Normalize the hue to `0..360`.
///
/// Not-a-number and infinite hues become zero, as does negative zero.
pub(crate) fn normalize_hue(hue: Float) -> Float {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);
    if hue == 0.0 || 360.0 <= hue {
        0.0
    } else {
        hue
    }
}

/// Clamp the number to the given range, mapping not-a-number to the lower
/// bound.
#[inline]
pub(crate) fn clamp_finite(value: Float, min: Float, max: Float) -> Float {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod test {
    use super::{clamp_finite, normalize_hue, round_to};
    use crate::Float;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-0.0004, 3).to_string(), "0");
        assert_eq!(round_to(300.0, 0).to_string(), "300");
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(-0.0).to_string(), "0");
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(Float::NAN), 0.0);
        assert_eq!(normalize_hue(Float::INFINITY), 0.0);
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(Float::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp_finite(3.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp_finite(Float::NEG_INFINITY, 0.0, 255.0), 0.0);
    }
}
