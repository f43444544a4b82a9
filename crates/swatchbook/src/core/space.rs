#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported color spaces.
///
/// # sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the color space of all
/// textual notations this crate parses and formats. Its gamma-corrected form
/// [`ColorSpace::Srgb`] and its linear form [`ColorSpace::LinearSrgb`] both
/// have in-gamut coordinates ranging from 0 to 1, inclusive. HSL is a
/// cylindrical reshaping of gamma-corrected sRGB with the hue in degrees and
/// saturation and lightness as percentages `0..=100`.
///
/// # Oklab and Oklch
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) is a perceptually
/// uniform color space, which uses one coordinate for lightness L and two
/// coordinates for "colorness." Oklab uses Cartesian coordinates a, b, whereas
/// Oklch uses polar coordinates C/h, with C expressing chroma and h expressing
/// hue in degrees. Lightness ranges `0..=1`, chroma is non-negative and in
/// practice bounded by 0.4, and hue ranges `0..360`. Achromatic colors have a
/// hue of zero.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) with the D65
/// standard illuminant serves as foundational color space. All conversions
/// between unrelated color spaces go through XYZ.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "swatchbook.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Hsl,
    Oklab,
    Oklch,
    Xyz,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// HSL and Oklch are polar, with the hue as third coordinate.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Oklch)
    }

    /// Determine whether this color space is RGB.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Hsl => "HSL",
            Oklab => "Oklab",
            Oklch => "Oklch",
            Xyz => "XYZ",
        };

        f.write_str(s)
    }
}
