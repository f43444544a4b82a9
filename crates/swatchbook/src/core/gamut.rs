use super::conversion::{oklch_to_srgb, srgb_to_hsl};
use super::{convert, ColorSpace};
use crate::Float;

/// Round-trip Oklch coordinates through 24-bit sRGB.
///
/// Lightness is a percentage, chroma is absolute, and hue is in degrees. This
/// function converts the coordinates to sRGB, clamps and quantizes the
/// channels to 8 bits each, and converts the result back to Oklch with the
/// same units. It returns `None` if the conversion produces non-finite
/// channels.
pub(crate) fn round_trip_oklch(lightness: Float, chroma: Float, hue: Float) -> Option<[Float; 3]> {
    let srgb = oklch_to_srgb(&[lightness / 100.0, chroma, hue]);
    if srgb.iter().any(|c| !c.is_finite()) {
        return None;
    }

    let quantize = |c: Float| (c.clamp(0.0, 1.0) * 255.0).round() / 255.0;
    let srgb = [quantize(srgb[0]), quantize(srgb[1]), quantize(srgb[2])];
    let [l, c, h] = convert(ColorSpace::Srgb, ColorSpace::Oklch, &srgb);

    Some([l * 100.0, c, h])
}

/// Determine the distance between two hues in degrees, which ranges `0..=180`.
#[inline]
pub(crate) fn hue_distance(hue1: Float, hue2: Float) -> Float {
    let difference = (hue1 - hue2).abs();
    if 180.0 < difference {
        360.0 - difference
    } else {
        difference
    }
}

/// Determine whether the sRGB channels in `0..=255` are achromatic in HSL.
pub(crate) fn is_achromatic(channels: &[Float; 3]) -> bool {
    let [_, saturation, _] = srgb_to_hsl(&[
        channels[0] / 255.0,
        channels[1] / 255.0,
        channels[2] / 255.0,
    ]);
    saturation <= 0.0
}
