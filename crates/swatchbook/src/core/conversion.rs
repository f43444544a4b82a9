use super::{normalize, normalize_hue, ColorSpace};
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a single sRGB channel in unit range to linear light.
#[inline]
pub(crate) fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Convert a single linear channel in unit range to gamma-corrected sRGB.
#[inline]
pub(crate) fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(1.0 / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_to_srgb(value[0]),
        linear_to_srgb(value[1]),
        linear_to_srgb(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4123907993, 0.3575843394, 0.1804807884 ],
    [ 0.2126390059, 0.7151686788, 0.0721923154 ],
    [ 0.0193308187, 0.1191947798, 0.9505321522 ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.240969942,  -1.5373831776, -0.4986107603 ],
    [ -0.9692436363,  1.8759675015,  0.0415550574 ],
    [  0.0556300797, -0.2039769589,  1.0569715142 ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for HSL to gamma-corrected sRGB. This is a one-hop,
/// direct conversion.
///
/// The hue is in degrees, whereas saturation and lightness are percentages.
/// Out-of-range saturation and lightness saturate.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
        let t = if t < 0.0 {
            t + 1.0
        } else if 1.0 < t {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            (q - p).mul_add(6.0 * t, p)
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
        } else {
            p
        }
    }

    let h = normalize_hue(value[0]) / 360.0;
    let s = value[1].clamp(0.0, 100.0) / 100.0;
    let l = value[2].clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Convert coordinates for gamma-corrected sRGB to HSL. This is a one-hop,
/// direct conversion.
///
/// Achromatic colors have hue and saturation zero.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l * 100.0];
    }

    let d = max - min;
    let s = if 0.5 < l {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [normalize_hue(h * 60.0), s * 100.0, l * 100.0]
}

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use crate::core::normalize_hue;
    use crate::Float;

    /// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }

    const EPSILON: Float = 0.0002;

    /// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
    /// conversion.
    ///
    /// Achromatic colors have chroma and hue zero. The hue is never
    /// not-a-number.
    #[allow(non_snake_case)]
    pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        if a_m < EPSILON && b.abs() < EPSILON {
            return [L, 0.0, 0.0];
        }

        // per herbie 2.1
        let C = if a_m < b.abs() {
            b.abs().hypot(a_m)
        } else {
            a_m.hypot(b)
        };

        let h = normalize_hue(b.atan2(a).to_degrees());

        [L, C, h]
    }
}

pub(crate) use oklab::{oklab_to_oklch, oklch_to_oklab};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8189330101, 0.3618667424, -0.1288597137 ],
    [ 0.0329845436, 0.9293118715,  0.0361456387 ],
    [ 0.0482003018, 0.2643662691,  0.633851707  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.793617785,  -0.0040720468 ],
    [ 1.9779984951, -2.428592205,   0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.808675766  ],
];

/// Convert coordinates for XYZ to Oklab. This is a one-hop, direct conversion.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.99999999845051981432,  0.39633777736240243769,  0.21580375730249306069 ],
    [ 1.00000000838056630002, -0.10556134579289659905, -0.06385417279300911922 ],
    [ 1.00000005467234261899, -0.08948417752909546082, -1.2914855480408174125  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.226879878071479,   -0.5578149965684922,  0.2813910501598616  ],
    [ -0.04057575003935402,  1.112286829376436,  -0.07171107933708207 ],
    [ -0.07637293665230801, -0.4214933235444953,  1.586161639400282   ],
];

/// Convert coordinates for Oklab to XYZ. This is a one-hop, direct conversion.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = srgb_to_linear_srgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_srgb_to_srgb(&linear_srgb)
}

/// Convert coordinates for HSL to linear sRGB. This is a two-hop conversion.
#[inline]
fn hsl_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let srgb = hsl_to_srgb(value);
    srgb_to_linear_srgb(&srgb)
}

/// Convert coordinates for linear sRGB to HSL. This is a two-hop conversion.
#[inline]
fn linear_srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let srgb = linear_srgb_to_srgb(value);
    srgb_to_hsl(&srgb)
}

/// Convert coordinates for HSL to XYZ. This is a three-hop conversion.
#[inline]
fn hsl_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let srgb = hsl_to_srgb(value);
    srgb_to_xyz(&srgb)
}

/// Convert coordinates for XYZ to HSL. This is a three-hop conversion.
#[inline]
fn xyz_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let srgb = xyz_to_srgb(value);
    srgb_to_hsl(&srgb)
}

/// Convert coordinates for Oklch to XYZ. This is a two-hop conversion.
#[inline]
fn oklch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let oklab = oklch_to_oklab(value);
    oklab_to_xyz(&oklab)
}

/// Convert coordinates for XYZ to Oklch. This is a two-hop conversion.
#[inline]
fn xyz_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let oklab = xyz_to_oklab(value);
    oklab_to_oklch(&oklab)
}

/// Convert coordinates for Oklch to gamma-corrected sRGB. This is a
/// four-hop conversion.
///
/// Unlike [`convert`], this function does not normalize its input, so that
/// non-finite coordinates show up in the result.
pub(crate) fn oklch_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let xyz = oklch_to_xyz(value);
    xyz_to_srgb(&xyz)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to the targeted color space, which may be the same as the original
/// color space. It does not check whether the result is in gamut for the
/// targeted color space.
///
/// ```
/// # use swatchbook::{convert, ColorSpace};
/// let [l, c, h] = convert(ColorSpace::Srgb, ColorSpace::Oklch, &[1.0, 1.0, 1.0]);
/// assert!((l - 1.0).abs() < 1e-6);
/// assert!(c < 1e-6);
/// assert!((0.0..360.0).contains(&h));
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn convert(from_space: ColorSpace, to_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return srgb_to_linear_srgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_srgb_to_srgb(&coordinates),
        (Hsl, Srgb) => return hsl_to_srgb(&coordinates),
        (Srgb, Hsl) => return srgb_to_hsl(&coordinates),
        (Hsl, LinearSrgb) => return hsl_to_linear_srgb(&coordinates),
        (LinearSrgb, Hsl) => return linear_srgb_to_hsl(&coordinates),
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(&coordinates),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Hsl => hsl_to_xyz(&coordinates),
        Oklch => oklch_to_xyz(&coordinates),
        Oklab => oklab_to_xyz(&coordinates),
        Xyz => coordinates,
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Hsl => xyz_to_hsl(&intermediate),
        Oklch => xyz_to_oklch(&intermediate),
        Oklab => xyz_to_oklab(&intermediate),
        Xyz => intermediate,
    }
}
