//! Formatting colors as text.
//!
//! [`Format`] enumerates the supported notations and [`Formatted`] is the
//! typed result of formatting a color, which distinguishes between the
//! notation of a valid color and the error message of an invalid one.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::round_to;
use crate::error::FormatNameError;
use crate::{AlphaStyle, Color, Float};

/// A textual color notation.
///
/// The modern functional notations separate coordinates with spaces and
/// include a `/ alpha` suffix only when alpha is not 1. The legacy notations
/// separate coordinates with commas, and their alpha variants always include
/// alpha. The `a`-less functional notations ignore alpha altogether.
///
/// [`Format::Auto`] picks a notation based on the color itself: It prefers
/// short hexadecimal notation and otherwise sticks with the notation of the
/// parsed string, falling back on `#rrggbb` for opaque and `rgb(r g b / a)`
/// for translucent colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "swatchbook.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#rrggbb`
    Hex,
    /// `#rrggbbaa`, omitting alpha if 1
    Hexa,
    /// `#rgb` if possible
    HexShort,
    /// `#rgba` if possible
    HexaShort,
    /// `rgb(r g b)`
    Rgb,
    /// `rgb(r g b / a)`
    Rgba,
    /// `rgb(r, g, b)`
    RgbLegacy,
    /// `rgba(r, g, b, a)`
    RgbaLegacy,
    /// `hsl(h s% l%)`
    Hsl,
    /// `hsl(h s% l% / a)`
    Hsla,
    /// `hsl(h, s%, l%)`
    HslLegacy,
    /// `hsla(h, s%, l%, a)`
    HslaLegacy,
    /// `oklch(l% c h)`
    Oklch,
    /// `oklch(l% c h / a)`
    Oklcha,
    #[default]
    Auto,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Format {
    /// Get this format's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hexa => "hexa",
            Self::HexShort => "hex-short",
            Self::HexaShort => "hexa-short",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::RgbLegacy => "rgb-legacy",
            Self::RgbaLegacy => "rgba-legacy",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::HslLegacy => "hsl-legacy",
            Self::HslaLegacy => "hsla-legacy",
            Self::Oklch => "oklch",
            Self::Oklcha => "oklcha",
            Self::Auto => "auto",
        }
    }

    /// Parse a format name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(name: &str) -> Result<Self, FormatNameError> {
        name.parse()
    }

    /// Get a string representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl std::str::FromStr for Format {
    type Err = FormatNameError;

    /// Parse a format name.
    ///
    /// Names are case-insensitive and the legacy and short names may be
    /// written with or without dash.
    ///
    /// ```
    /// # use swatchbook::Format;
    /// assert_eq!("HexShort".parse::<Format>(), Ok(Format::HexShort));
    /// assert_eq!("rgba-legacy".parse::<Format>(), Ok(Format::RgbaLegacy));
    /// assert!("cmyk".parse::<Format>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let format = match name.as_str() {
            "hex" => Self::Hex,
            "hexa" => Self::Hexa,
            "hex-short" | "hexshort" => Self::HexShort,
            "hexa-short" | "hexashort" => Self::HexaShort,
            "rgb" => Self::Rgb,
            "rgba" => Self::Rgba,
            "rgb-legacy" | "rgblegacy" => Self::RgbLegacy,
            "rgba-legacy" | "rgbalegacy" => Self::RgbaLegacy,
            "hsl" => Self::Hsl,
            "hsla" => Self::Hsla,
            "hsl-legacy" | "hsllegacy" => Self::HslLegacy,
            "hsla-legacy" | "hslalegacy" => Self::HslaLegacy,
            "oklch" => Self::Oklch,
            "oklcha" => Self::Oklcha,
            "auto" => Self::Auto,
            _ => return Err(FormatNameError(s.to_string())),
        };

        Ok(format)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// ====================================================================================================================

/// The result of formatting a color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formatted {
    /// The notation of a valid color.
    Color(String),
    /// The error message of an invalid color.
    Invalid(String),
}

impl Formatted {
    /// Get the formatted text, independent of validity.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Color(s) | Self::Invalid(s) => s,
        }
    }

    /// Determine whether this result is a color's notation.
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// Convert into the formatted text, independent of validity.
    pub fn into_string(self) -> String {
        match self {
            Self::Color(s) | Self::Invalid(s) => s,
        }
    }
}

impl AsRef<str> for Formatted {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Formatted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ====================================================================================================================

/// Format the color with the given format.
pub(crate) fn format(color: &Color, format: Format) -> Formatted {
    if let Some(error) = color.error() {
        return Formatted::Invalid(error.to_string());
    }

    let text = match format {
        Format::Hex => hex(color),
        Format::Hexa => hexa(color),
        Format::HexShort => hex_short(color).unwrap_or_else(|| hex(color)),
        Format::HexaShort => hexa_short(color).unwrap_or_else(|| hexa(color)),
        Format::Rgb => rgb(color, false),
        Format::Rgba => rgba(color, false),
        Format::RgbLegacy => rgb(color, true),
        Format::RgbaLegacy => rgba(color, true),
        Format::Hsl => hsl(color, false),
        Format::Hsla => hsla(color, false),
        Format::HslLegacy => hsl(color, true),
        Format::HslaLegacy => hsla(color, true),
        Format::Oklch => oklch(color),
        Format::Oklcha => oklcha(color),
        Format::Auto => auto(color),
    };

    Formatted::Color(text)
}

/// The notation family of the string a color was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Oklch,
    Hsl,
    Rgb,
}

fn family(color: &Color) -> Option<Family> {
    let input = color.input()?.trim_start().to_ascii_lowercase();
    if input.starts_with("oklch") {
        Some(Family::Oklch)
    } else if input.starts_with("hsl") {
        Some(Family::Hsl)
    } else if input.starts_with("rgb") {
        Some(Family::Rgb)
    } else {
        None
    }
}

fn auto(color: &Color) -> String {
    let alpha = color.alpha();

    if alpha < 1.0 {
        if let Some(text) = hexa_short(color) {
            return text;
        }

        let alpha_text = alpha_string(color, false);
        let is_fractional = alpha_text.ends_with('%')
            || (color.alpha_style() == AlphaStyle::Number && alpha != alpha.round());
        if is_fractional {
            match family(color) {
                Some(Family::Oklch) => return oklcha(color),
                Some(Family::Hsl) => return hsla(color, false),
                Some(Family::Rgb) | None => (),
            }
        }
        return rgba(color, false);
    }

    if let Some(text) = hex_short(color) {
        return text;
    }

    match family(color) {
        Some(Family::Oklch) => oklch(color),
        Some(Family::Hsl) => hsl(color, false),
        Some(Family::Rgb) => rgb(color, false),
        None => hex(color),
    }
}

// --------------------------------------------------------------------------------------------------------------------

const EPSILON: Float = 1e-9;

/// Render alpha.
///
/// Legacy notation always uses a decimal with two places. Modern notation
/// uses a decimal with three places for the number style and an integer
/// percentage otherwise. Leading `0.` is shortened to `.`.
fn alpha_string(color: &Color, legacy: bool) -> String {
    let alpha = color.alpha();
    if (alpha - 1.0).abs() < EPSILON {
        return "1".to_string();
    }

    if legacy {
        return decimal(round_to(alpha, 2));
    }

    if alpha.abs() < EPSILON {
        return "0".to_string();
    }

    match color.alpha_style() {
        AlphaStyle::Number => decimal(round_to(alpha, 3)),
        AlphaStyle::Percent | AlphaStyle::Unset => format!("{}%", round_to(alpha * 100.0, 0)),
    }
}

fn decimal(value: Float) -> String {
    let text = value.to_string();
    match text.strip_prefix("0.") {
        Some(fraction) => format!(".{}", fraction),
        None => text,
    }
}

fn byte(value: Float) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

fn alpha_byte(color: &Color) -> u8 {
    byte(color.alpha() * 255.0)
}

fn hex(color: &Color) -> String {
    let [r, g, b] = color.to_rgb();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn hexa(color: &Color) -> String {
    if color.alpha() == 1.0 {
        return hex(color);
    }
    format!("{}{:02x}", hex(color), alpha_byte(color))
}

/// Determine whether both nibbles of a byte are the same.
fn is_doubled(value: u8) -> bool {
    (value >> 4) == (value & 0xf)
}

fn hex_short(color: &Color) -> Option<String> {
    if color.alpha() < 1.0 {
        return None;
    }

    let [r, g, b] = color.to_rgb();
    if is_doubled(r) && is_doubled(g) && is_doubled(b) {
        Some(format!("#{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf))
    } else {
        None
    }
}

fn hexa_short(color: &Color) -> Option<String> {
    let [r, g, b] = color.to_rgb();
    let a = alpha_byte(color);
    if !(is_doubled(r) && is_doubled(g) && is_doubled(b) && is_doubled(a)) {
        return None;
    }

    if color.alpha() == 1.0 {
        Some(format!("#{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf))
    } else {
        Some(format!(
            "#{:x}{:x}{:x}{:x}",
            r & 0xf,
            g & 0xf,
            b & 0xf,
            a & 0xf
        ))
    }
}

fn rgb(color: &Color, legacy: bool) -> String {
    let [r, g, b] = color.to_rgb();
    if legacy {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        format!("rgb({} {} {})", r, g, b)
    }
}

fn rgba(color: &Color, legacy: bool) -> String {
    let [r, g, b] = color.to_rgb();
    if legacy {
        format!("rgba({}, {}, {}, {})", r, g, b, alpha_string(color, true))
    } else if color.alpha() == 1.0 {
        rgb(color, false)
    } else {
        format!("rgb({} {} {} / {})", r, g, b, alpha_string(color, false))
    }
}

fn hsl_parts(color: &Color) -> [Float; 3] {
    let hsl = color.to_hsl();
    [round_to(hsl.h, 0), round_to(hsl.s, 0), round_to(hsl.l, 0)]
}

fn hsl(color: &Color, legacy: bool) -> String {
    let [h, s, l] = hsl_parts(color);
    if legacy {
        format!("hsl({}, {}%, {}%)", h, s, l)
    } else {
        format!("hsl({} {}% {}%)", h, s, l)
    }
}

fn hsla(color: &Color, legacy: bool) -> String {
    let [h, s, l] = hsl_parts(color);
    if legacy {
        format!("hsla({}, {}%, {}%, {})", h, s, l, alpha_string(color, true))
    } else if color.alpha() == 1.0 {
        hsl(color, false)
    } else {
        format!("hsl({} {}% {}% / {})", h, s, l, alpha_string(color, false))
    }
}

fn oklch_parts(color: &Color) -> [Float; 3] {
    let oklch = color.to_oklch();
    [
        round_to(oklch.l, 0),
        round_to(oklch.c, 3),
        round_to(oklch.h, 0),
    ]
}

fn oklch(color: &Color) -> String {
    let [l, c, h] = oklch_parts(color);
    format!("oklch({}% {} {})", l, c, h)
}

fn oklcha(color: &Color) -> String {
    if color.alpha() == 1.0 {
        return oklch(color);
    }

    let [l, c, h] = oklch_parts(color);
    format!("oklch({}% {} {} / {})", l, c, h, alpha_string(color, false))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Format, Formatted};
    use crate::{AlphaStyle, Color};

    fn fmt(input: &str, format: Format) -> String {
        Color::parse(input).format(format).into_string()
    }

    #[test]
    fn test_hex() {
        assert_eq!(fmt("#ff0000", Format::Hex), "#ff0000");
        assert_eq!(fmt("#ff000080", Format::Hex), "#ff0000");
        assert_eq!(fmt("#ff000080", Format::Hexa), "#ff000080");
        assert_eq!(fmt("#ff0000", Format::Hexa), "#ff0000");
        assert_eq!(fmt("#ff0000", Format::HexShort), "#f00");
        assert_eq!(fmt("#ff0080", Format::HexShort), "#ff0080");
        assert_eq!(fmt("#ff000088", Format::HexShort), "#ff0000");
        assert_eq!(fmt("#ff000088", Format::HexaShort), "#f008");
        assert_eq!(fmt("#ff000080", Format::HexaShort), "#ff000080");
        assert_eq!(fmt("#ff0000", Format::HexaShort), "#f00");
    }

    #[test]
    fn test_functional() {
        assert_eq!(fmt("rgb(0 128 255)", Format::Rgb), "rgb(0 128 255)");
        assert_eq!(fmt("rgb(0 128 255)", Format::Rgba), "rgb(0 128 255)");
        assert_eq!(fmt("rgb(0 128 255)", Format::RgbLegacy), "rgb(0, 128, 255)");
        assert_eq!(fmt("rgb(0 128 255)", Format::RgbaLegacy), "rgba(0, 128, 255, 1)");
        assert_eq!(fmt("rgb(0 128 255 / 25%)", Format::Rgb), "rgb(0 128 255)");
        assert_eq!(fmt("rgb(0 128 255 / 25%)", Format::Rgba), "rgb(0 128 255 / 25%)");

        assert_eq!(fmt("#f00", Format::Hsl), "hsl(0 100% 50%)");
        assert_eq!(fmt("#f00", Format::HslLegacy), "hsl(0, 100%, 50%)");
        assert_eq!(fmt("#f008", Format::HslaLegacy), "hsla(0, 100%, 50%, .53)");
        assert_eq!(fmt("#808080", Format::Hsla), "hsl(0 0% 50%)");

        assert_eq!(fmt("white", Format::Oklch), "oklch(100% 0 0)");
        assert_eq!(fmt("#f00", Format::Oklch), "oklch(63% 0.258 29)");
        assert_eq!(fmt("rgb(255 0 0 / 0.5)", Format::Oklcha), "oklch(63% 0.258 29 / .5)");
    }

    #[test]
    fn test_alpha_style() {
        assert_eq!(fmt("rgba(0,0,0,50%)", Format::Rgba), "rgb(0 0 0 / 50%)");
        assert_eq!(fmt("rgba(0,0,0,0.5)", Format::Rgba), "rgb(0 0 0 / .5)");
        assert_eq!(fmt("rgba(0,0,0,0.125)", Format::Rgba), "rgb(0 0 0 / .125)");
        assert_eq!(fmt("rgba(0,0,0,0)", Format::Rgba), "rgb(0 0 0 / 0)");
        assert_eq!(fmt("rgba(0,0,0,0)", Format::RgbaLegacy), "rgba(0, 0, 0, 0)");
        assert_eq!(fmt("rgba(0,0,0,12.5%)", Format::RgbaLegacy), "rgba(0, 0, 0, .13)");
        assert_eq!(fmt("#0008", Format::Rgba), "rgb(0 0 0 / .533)");
    }

    #[test]
    fn test_auto() {
        assert_eq!(fmt("rgb(255 0 0)", Format::Auto), "#f00");
        assert_eq!(fmt("rgb(255 0 1)", Format::Auto), "rgb(255 0 1)");
        assert_eq!(fmt("hsl(200 50% 30%)", Format::Auto), "hsl(200 50% 30%)");
        assert_eq!(fmt("hsl(200 50% 40%)", Format::Auto), "#379");
        assert!(fmt("oklch(50% 0.1 200)", Format::Auto).starts_with("oklch("));
        assert_eq!(fmt("#123457", Format::Auto), "#123457");
        assert_eq!(fmt("darkorange", Format::Auto), "#ff8c00");

        assert_eq!(fmt("rgb(255 0 0 / 53.33%)", Format::Auto), "#f008");
        assert_eq!(fmt("hsl(200 50% 30% / 30%)", Format::Auto), "hsl(200 50% 30% / 30%)");
        assert_eq!(fmt("#12345680", Format::Auto), "rgb(18 52 86 / .502)");
        assert_eq!(fmt("rgb(18 52 86 / 50%)", Format::Auto), "rgb(18 52 86 / 50%)");
        assert_eq!(fmt("hsl(200 50% 30% / 0)", Format::Auto), "rgb(38 89 115 / 0)");
    }

    #[test]
    fn test_invalid() {
        let color = Color::parse("notacolor");
        let result = color.format(Format::Hex);
        assert!(!result.is_color());
        assert_eq!(
            result,
            Formatted::Invalid(color.error().map(ToString::to_string).unwrap_or_default())
        );
        assert_eq!(result.as_str(), r#"unrecognized color format "notacolor""#);
    }

    #[test]
    fn test_synthetic() {
        let color = Color::from_rgba(12.4, 99.6, 200.0, 0.25, AlphaStyle::Number);
        assert_eq!(color.format(Format::Rgba).as_str(), "rgb(12 100 200 / .25)");
        assert_eq!(color.format(Format::Auto).as_str(), "rgb(12 100 200 / .25)");
    }

    #[test]
    fn test_format_names() {
        for format in [
            Format::Hex,
            Format::Hexa,
            Format::HexShort,
            Format::HexaShort,
            Format::Rgb,
            Format::Rgba,
            Format::RgbLegacy,
            Format::RgbaLegacy,
            Format::Hsl,
            Format::Hsla,
            Format::HslLegacy,
            Format::HslaLegacy,
            Format::Oklch,
            Format::Oklcha,
            Format::Auto,
        ] {
            assert_eq!(format.name().parse::<Format>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }

        assert_eq!("HSLALEGACY".parse::<Format>(), Ok(Format::HslaLegacy));
        assert_eq!(
            "nope".parse::<Format>().map_err(|e| e.to_string()),
            Err("\"nope\" should name a color format but does not".to_string())
        );
    }
}
