use super::conversion::{srgb_to_linear, LINEAR_SRGB_TO_XYZ};
use super::round_to;
use crate::Float;

/// Compute the WCAG relative luminance of sRGB channels in `0..=255`.
///
/// The luminance is the dot product of the linearized channels with the
/// Y row of the linear sRGB to XYZ matrix.
pub(crate) fn relative_luminance(channels: &[Float; 3]) -> Float {
    let [_, y_row, _] = &LINEAR_SRGB_TO_XYZ;
    let [r, g, b] = *channels;

    y_row[0].mul_add(
        srgb_to_linear(r / 255.0),
        y_row[1].mul_add(
            srgb_to_linear(g / 255.0),
            y_row[2] * srgb_to_linear(b / 255.0),
        ),
    )
}

/// Composite the translucent foreground over an opaque background.
///
/// Both colors are sRGB channels in `0..=255`. The result is opaque.
pub(crate) fn composite(
    foreground: &[Float; 3],
    alpha: Float,
    background: &[Float; 3],
) -> [Float; 3] {
    let mix = |fg: Float, bg: Float| fg.mul_add(alpha, bg * (1.0 - alpha));
    [
        mix(foreground[0], background[0]),
        mix(foreground[1], background[1]),
        mix(foreground[2], background[2]),
    ]
}

/// Compute the contrast ratio between two relative luminances, rounded to two
/// decimals.
///
/// The ratio does not depend on the order of arguments and ranges from 1 to
/// 21.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    round_to((lighter + 0.05) / (darker + 0.05), 2)
}
