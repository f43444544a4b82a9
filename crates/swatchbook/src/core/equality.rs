use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two numbers differ by no more than the given
/// tolerance.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function replaces not-a-number and infinite coordinates with zero.
#[inline]
pub(crate) fn normalize(coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    let clean = |c: Float| if c.is_finite() { c } else { 0.0 };
    [clean(c1), clean(c2), clean(c3)]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::{normalize, to_eq_bits};
    use crate::Float;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_ne!(to_eq_bits(0.5), to_eq_bits(0.25));
        assert_close_enough!(0.1 + 0.2, 0.3);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(&[Float::NAN, Float::INFINITY, 0.5]),
            [0.0, 0.0, 0.5]
        );
    }
}
