#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_finite, composite, convert, parse, relative_luminance, srgb_to_hsl, to_contrast_ratio,
    ColorSpace,
};
#[cfg(feature = "pyffi")]
use crate::error::HarmonyNameError;
use crate::error::{ColorError, Grammar};
use crate::format::{Format, Formatted};
use crate::palette::Harmony;
use crate::Float;

/// The style of a color's alpha when written as text.
///
/// The parser records whether an alpha was written as a percentage or as a
/// plain number, so that formatting can write it back the same way. Colors
/// without explicit alpha have the [`AlphaStyle::Unset`] style.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "swatchbook.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaStyle {
    #[default]
    Unset,
    Percent,
    Number,
}

/// A color's HSL coordinates.
///
/// The hue is in degrees `0..360`, whereas saturation and lightness are
/// percentages `0..=100`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "swatchbook.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

/// A color's Oklch coordinates.
///
/// Lightness is a percentage `0..=100`, chroma is non-negative and in practice
/// bounded by 0.4, and hue is in degrees `0..360`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "swatchbook.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

const WHITE: [Float; 3] = [255.0, 255.0, 255.0];

// ====================================================================================================================

/// A textual color.
///
/// A color combines sRGB channels `0..=255` with an alpha `0..=1`. Channels
/// keep their fractional precision until they are formatted. A color also
/// remembers how its alpha was written and the string it was parsed from, so
/// that [`Format::Auto`] can write it back in the same notation.
///
/// Parsing never fails. Instead, it may produce an *invalid* color, which
/// carries a [`ColorError`] and has inert defaults for all derived
/// quantities: black channels, opaque alpha, zero HSL and Oklch coordinates,
/// a relative luminance of 0, a contrast ratio of 1, and a palette holding
/// only itself.
///
/// ```
/// # use swatchbook::{Color, Format};
/// let teal = Color::parse("rgb(0 128 128)");
/// assert!(teal.is_valid());
/// assert_eq!(teal.format(Format::Hex).as_str(), "#008080");
///
/// let nope = Color::parse("notacolor");
/// assert!(!nope.is_valid());
/// assert_eq!(nope.to_rgb(), [0, 0, 0]);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: rgb(0 128 128);"></div>
/// </div>
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "swatchbook.color"))]
#[derive(Clone, PartialEq)]
pub struct Color {
    channels: [Float; 3],
    alpha: Float,
    alpha_style: AlphaStyle,
    input: Option<String>,
    error: Option<ColorError>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This constructor implements the same functionality as
    /// [`Color::parse`].
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(input: &str) -> Self {
        Self::parse(input)
    }

    /// Instantiate a color from channels and alpha. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "from_rgba")]
    pub fn py_from_rgba(r: Float, g: Float, b: Float, a: Float, alpha_style: AlphaStyle) -> Self {
        Self::from_rgba(r, g, b, a, alpha_style)
    }

    /// Determine whether this color is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Get this color's alpha, which is 1 for invalid colors.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Get this color's alpha style.
    #[inline]
    pub fn alpha_style(&self) -> AlphaStyle {
        self.alpha_style
    }

    /// Get the error message for an invalid color. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "error")]
    pub fn py_error(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Get the string this color was parsed from. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "input")]
    pub fn py_input(&self) -> Option<String> {
        self.input.clone()
    }

    /// Get the channels rounded to integers.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::parse("rgb(10.4 20.5 300)").to_rgb(), [10, 21, 255]);
    /// ```
    pub fn to_rgb(&self) -> [u8; 3] {
        let [r, g, b] = self.channels;
        [
            r.round().clamp(0.0, 255.0) as u8,
            g.round().clamp(0.0, 255.0) as u8,
            b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Get the channels rounded to integers as well as alpha.
    pub fn to_rgba(&self) -> ([u8; 3], Float) {
        (self.to_rgb(), self.alpha)
    }

    /// Get this color's HSL coordinates.
    ///
    /// Achromatic colors have hue and saturation zero. Invalid colors have all
    /// coordinates zero.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let hsl = Color::parse("#ff0000").to_hsl();
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
    /// ```
    pub fn to_hsl(&self) -> Hsl {
        if !self.is_valid() {
            return Hsl::default();
        }

        let [h, s, l] = srgb_to_hsl(&self.unit_channels());
        Hsl { h, s, l }
    }

    /// Get this color's HSL coordinates as well as alpha.
    pub fn to_hsla(&self) -> (Hsl, Float) {
        (self.to_hsl(), self.alpha)
    }

    /// Get this color's Oklch coordinates.
    ///
    /// Lightness is scaled to a percentage. Invalid colors have all
    /// coordinates zero.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// let white = Color::parse("white").to_oklch();
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert_eq!(white.c, 0.0);
    /// ```
    pub fn to_oklch(&self) -> Oklch {
        if !self.is_valid() {
            return Oklch::default();
        }

        let [l, c, h] = convert(ColorSpace::Srgb, ColorSpace::Oklch, &self.unit_channels());
        Oklch { l: l * 100.0, c, h }
    }

    /// Get this color's Oklch coordinates as well as alpha.
    pub fn to_oklcha(&self) -> (Oklch, Float) {
        (self.to_oklch(), self.alpha)
    }

    /// Format this color in `#rrggbb` notation. Invalid colors produce their
    /// error message instead.
    pub fn to_hex(&self) -> String {
        self.format(Format::Hex).into_string()
    }

    /// Compute this color's WCAG relative luminance.
    ///
    /// The luminance ignores alpha. It is 0 for invalid colors.
    pub fn relative_luminance(&self) -> Float {
        if !self.is_valid() {
            return 0.0;
        }
        relative_luminance(&self.channels)
    }

    /// Replace this color's alpha.
    ///
    /// This method clamps the alpha to `0..=1` and records the given alpha
    /// style, with [`AlphaStyle::Unset`] becoming [`AlphaStyle::Percent`]. The
    /// channels and input are unchanged. An invalid color stays invalid.
    ///
    /// ```
    /// # use swatchbook::{AlphaStyle, Color, Format};
    /// let red = Color::parse("red").with_alpha(0.25, AlphaStyle::Number);
    /// assert_eq!(red.format(Format::Rgba).as_str(), "rgb(255 0 0 / .25)");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float, alpha_style: AlphaStyle) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        if self.channels.iter().any(|c| !c.is_finite()) {
            return Self::invalid(ColorError::NonFinite(Grammar::Rgb), self.input.clone());
        }

        let alpha_style = match alpha_style {
            AlphaStyle::Unset => AlphaStyle::Percent,
            style => style,
        };

        Self {
            alpha: clamp_finite(alpha, 0.0, 1.0),
            alpha_style,
            ..self.clone()
        }
    }

    /// Flatten this color onto the given background.
    ///
    /// This method composites a translucent color onto the background and
    /// returns an opaque color. A translucent background is first flattened
    /// onto opaque white, but only ever onto white. Flattening an invalid color
    /// yields an invalid color with the same error, and flattening onto an
    /// invalid background yields an invalid color with
    /// [`ColorError::InvalidBackground`].
    ///
    /// ```
    /// # use swatchbook::{Color, Format};
    /// let black = Color::parse("rgb(0 0 0 / 50%)");
    /// let gray = black.flatten(&Color::parse("white"));
    /// assert_eq!(gray.format(Format::Rgb).as_str(), "rgb(128 128 128)");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn flatten(&self, background: &Color) -> Self {
        if let Some(error) = &self.error {
            return Self::invalid(error.clone(), None);
        }

        let [r, g, b] = self.channels;
        if 1.0 <= self.alpha {
            return Self::from_rgba(r, g, b, 1.0, self.alpha_style);
        }

        if !background.is_valid() {
            return Self::invalid(ColorError::InvalidBackground, None);
        }

        let backdrop = if background.alpha < 1.0 {
            composite(&background.channels, background.alpha, &WHITE)
        } else {
            background.channels
        };

        let [r, g, b] = composite(&self.channels, self.alpha, &backdrop);
        Self::from_rgba(r, g, b, 1.0, self.alpha_style)
    }

    /// Flatten this color onto opaque white.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn flatten_over_white(&self) -> Self {
        self.flatten(&Self::white())
    }

    /// Compute the WCAG contrast ratio of this color as foreground against the
    /// given background.
    ///
    /// See [`contrast_ratio`](crate::contrast_ratio).
    pub fn contrast_ratio(&self, background: &Color) -> Float {
        crate::contrast_ratio(self, background)
    }

    /// Generate a palette for the named harmony with default parameters. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "palette")]
    pub fn py_palette(&self, harmony: &str) -> Result<Vec<Color>, HarmonyNameError> {
        Ok(self.palette(harmony.parse()?))
    }

    /// Format this color with the given format. <i class=python-only>Python
    /// only!</i>
    ///
    /// Invalid colors produce their error message.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "format")]
    pub fn py_format(&self, format: Format) -> String {
        self.format(format).into_string()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Color {
    /// Parse a color from its string representation.
    ///
    /// This method never fails. If the string does not describe a color, it
    /// returns an invalid color carrying the error. Use [`str::parse`] or
    /// `Color::try_from` for a `Result` instead.
    ///
    /// The parser trims the input, resolves CSS named colors independent of
    /// case, and then tries, in order, hexadecimal notation with optional `#`,
    /// `0x` hexadecimal notation with leading alpha, `oklch()`, `hsl()` and
    /// `hsla()`, as well as `rgb()` and `rgba()`. The first notation that
    /// matches the input's structure decides the outcome. Out-of-range
    /// components saturate.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(Color::parse("Red").to_hex(), Color::parse("#ff0000").to_hex());
    /// assert_eq!(Color::parse("0x80ff0000").to_rgba(), ([255, 0, 0], 128.0 / 255.0));
    /// assert_eq!(
    ///     Color::parse("hsl(120 50 50)").error().map(ToString::to_string).as_deref(),
    ///     Some("invalid hsl format: saturation and lightness should end in `%` but do not")
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        match parse(input) {
            Ok(parsed) => Self {
                channels: parsed.channels,
                alpha: parsed.alpha,
                alpha_style: parsed.alpha_style,
                input: Some(input.to_string()),
                error: None,
            },
            Err(error) => Self::invalid(error, Some(input.to_string())),
        }
    }

    /// Parse a color from raw bytes.
    ///
    /// Bytes that are not UTF-8 produce an invalid color with
    /// [`ColorError::NotText`].
    pub fn from_utf8(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(input) => Self::parse(input),
            Err(_) => Self::invalid(ColorError::NotText, None),
        }
    }

    /// Instantiate a color from channels `0..=255`, alpha `0..=1`, and alpha
    /// style.
    ///
    /// This method clamps channels and alpha, with not-a-number becoming
    /// zero. The color has no input string.
    pub fn from_rgba(r: Float, g: Float, b: Float, a: Float, alpha_style: AlphaStyle) -> Self {
        Self {
            channels: [
                clamp_finite(r, 0.0, 255.0),
                clamp_finite(g, 0.0, 255.0),
                clamp_finite(b, 0.0, 255.0),
            ],
            alpha: clamp_finite(a, 0.0, 1.0),
            alpha_style,
            input: None,
            error: None,
        }
    }

    /// Get the error of an invalid color.
    #[inline]
    pub fn error(&self) -> Option<&ColorError> {
        self.error.as_ref()
    }

    /// Get the string this color was parsed from.
    #[inline]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Format this color.
    ///
    /// See [`Format`] for the available notations. The result distinguishes
    /// between formatted colors and error messages for invalid colors.
    ///
    /// ```
    /// # use swatchbook::{Color, Format, Formatted};
    /// let color = Color::parse("rgba(0,0,0,50%)");
    /// assert_eq!(color.format(Format::RgbaLegacy).as_str(), "rgba(0, 0, 0, .5)");
    /// assert_eq!(color.format(Format::Rgba).as_str(), "rgb(0 0 0 / 50%)");
    ///
    /// let nope = Color::parse("notacolor");
    /// assert!(matches!(nope.format(Format::Hex), Formatted::Invalid(_)));
    /// ```
    pub fn format(&self, format: Format) -> Formatted {
        crate::format::format(self, format)
    }

    /// Generate a palette for the given harmony.
    ///
    /// See [`Harmony`] for the rules.
    pub fn palette(&self, harmony: Harmony) -> Vec<Color> {
        crate::palette::generate(self, harmony)
    }

    /// Get the channels with fractional precision.
    #[inline]
    pub(crate) fn channels(&self) -> &[Float; 3] {
        &self.channels
    }

    /// Get the channels scaled to unit range.
    #[inline]
    pub(crate) fn unit_channels(&self) -> [Float; 3] {
        let [r, g, b] = self.channels;
        [r / 255.0, g / 255.0, b / 255.0]
    }

    /// Create an invalid color.
    pub(crate) fn invalid(error: ColorError, input: Option<String>) -> Self {
        Self {
            channels: [0.0, 0.0, 0.0],
            alpha: 1.0,
            alpha_style: AlphaStyle::Unset,
            input,
            error: Some(error),
        }
    }

    /// Create opaque white.
    pub(crate) fn white() -> Self {
        let [r, g, b] = WHITE;
        Self::from_rgba(r, g, b, 1.0, AlphaStyle::Unset)
    }
}

/// Compute the WCAG contrast ratio between a foreground and a background
/// color.
///
/// This function flattens the background onto white and then the foreground
/// onto the flattened background, before computing the ratio between their
/// relative luminances. The ratio is rounded to two decimals and ranges from 1
/// to 21. It is 1 if either color is invalid.
///
/// Flattened channels are not rounded to 8 bits. As a result, the ratio for
/// translucent colors may differ in the second decimal from tools that round
/// composited colors first, which matters for thresholds such as 4.5.
///
/// ```
/// # use swatchbook::{contrast_ratio, Color};
/// let black = Color::parse("black");
/// let white = Color::parse("white");
/// assert_eq!(contrast_ratio(&black, &white), 21.0);
/// assert_eq!(contrast_ratio(&white, &white), 1.0);
/// assert_eq!(contrast_ratio(&Color::parse("nope"), &white), 1.0);
///
/// let shadow = Color::parse("rgb(0 0 0 / 50%)");
/// assert_eq!(contrast_ratio(&shadow, &white), 3.98);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(foreground: &Color, background: &Color) -> Float {
    if !foreground.is_valid() || !background.is_valid() {
        return 1.0;
    }

    let background = background.flatten_over_white();
    let foreground = foreground.flatten(&background);
    if !foreground.is_valid() || !background.is_valid() {
        return 1.0;
    }

    to_contrast_ratio(
        foreground.relative_luminance(),
        background.relative_luminance(),
    )
}

impl Default for Color {
    /// Create an instance of the default color, which is opaque black.
    #[inline]
    fn default() -> Self {
        Self::from_rgba(0.0, 0.0, 0.0, 1.0, AlphaStyle::Unset)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    /// Parse a color from its string representation, failing for strings
    /// that do not describe a color.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// # use swatchbook::error::ColorError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("navy")?;
    /// assert_eq!(navy.to_rgb(), [0, 0, 128]);
    ///
    /// let empty: Result<Color, ColorError> = str::parse("  ");
    /// assert_eq!(empty, Err(ColorError::EmptyInput));
    /// # Ok::<(), ColorError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = Color::parse(s);
        match color.error {
            Some(error) => Err(error),
            None => Ok(color),
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(error) => f.write_fmt(format_args!("Color(invalid: {})", error)),
            None => {
                let [r, g, b] = self.channels;
                f.write_fmt(format_args!(
                    "Color(rgb [{}, {}, {}], alpha {}, {:?})",
                    r, g, b, self.alpha, self.alpha_style
                ))
            }
        }
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// Valid colors use [`Format::Auto`], which prefers short hexadecimal
    /// notation and otherwise sticks with the notation of the parsed string.
    /// Invalid colors display their input or, lacking input, their error
    /// message.
    ///
    /// ```
    /// # use swatchbook::Color;
    /// assert_eq!(format!("{}", Color::parse("rgb(255 0 0)")), "#f00");
    /// assert_eq!(format!("{}", Color::parse("hsl(200 50% 30%)")), "hsl(200 50% 30%)");
    /// assert_eq!(format!("{}", Color::parse("nope")), "nope");
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #f00;"></div>
    /// <div style="background-color: hsl(200 50% 30%);"></div>
    /// </div>
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.error, &self.input) {
            (None, _) => f.write_str(self.format(Format::Auto).as_str()),
            (Some(_), Some(input)) => f.write_str(input),
            (Some(error), None) => write!(f, "{}", error),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{AlphaStyle, Color};
    use crate::core::assert_within;
    use crate::error::ColorError;
    use crate::Format;

    #[test]
    fn test_invalid_defaults() {
        let color = Color::parse("notacolor");
        assert!(!color.is_valid());
        assert_eq!(color.input(), Some("notacolor"));
        assert_eq!(color.to_rgba(), ([0, 0, 0], 1.0));
        assert_eq!(color.to_hsl().l, 0.0);
        assert_eq!(color.to_oklch().l, 0.0);
        assert_eq!(color.relative_luminance(), 0.0);
        assert_eq!(
            color.to_hex(),
            color.error().map(ToString::to_string).unwrap_or_default()
        );
    }

    #[test]
    fn test_from_utf8() {
        assert!(Color::from_utf8(b"#abc").is_valid());
        assert_eq!(
            Color::from_utf8(&[0xff, 0xfe]).error(),
            Some(&ColorError::NotText)
        );
    }

    #[test]
    fn test_from_rgba() {
        let color = Color::from_rgba(300.0, -1.0, crate::Float::NAN, 2.0, AlphaStyle::Number);
        assert!(color.is_valid());
        assert_eq!(color.to_rgba(), ([255, 0, 0], 1.0));
        assert_eq!(color.input(), None);
    }

    #[test]
    fn test_with_alpha() {
        let color = Color::parse("#123456");
        let translucent = color.with_alpha(0.5, AlphaStyle::Unset);
        assert_eq!(translucent.alpha(), 0.5);
        assert_eq!(translucent.alpha_style(), AlphaStyle::Percent);
        assert_eq!(translucent.to_rgb(), color.to_rgb());
        assert_eq!(color.with_alpha(-3.0, AlphaStyle::Number).alpha(), 0.0);

        let invalid = Color::parse("").with_alpha(0.5, AlphaStyle::Number);
        assert_eq!(invalid.error(), Some(&ColorError::EmptyInput));
    }

    #[test]
    fn test_hsl_round_trip() {
        for input in ["#123456", "#fedcba", "#808080", "#00ff7f", "#c71585"] {
            let color = Color::parse(input);
            let hsl = color.to_hsl();
            let back = Color::parse(&format!("hsl({} {}% {}%)", hsl.h, hsl.s, hsl.l));
            let [r1, g1, b1] = color.to_rgb();
            let [r2, g2, b2] = back.to_rgb();
            assert!((r1 as i16 - r2 as i16).abs() <= 1, "{}", input);
            assert!((g1 as i16 - g2 as i16).abs() <= 1, "{}", input);
            assert!((b1 as i16 - b2 as i16).abs() <= 1, "{}", input);
        }
    }

    #[test]
    fn test_flatten() {
        let fg = Color::parse("rgb(255 0 0 / 50%)");
        let bg = Color::parse("rgb(0 0 255 / 0%)");
        let flat = fg.flatten(&bg);
        assert_eq!(flat.alpha(), 1.0);
        assert_eq!(flat.to_rgb(), [255, 128, 128]);

        assert_eq!(
            fg.flatten(&Color::parse("nope")).error(),
            Some(&ColorError::InvalidBackground)
        );
        assert_eq!(
            Color::parse("").flatten(&bg).error(),
            Some(&ColorError::EmptyInput)
        );

        let opaque = Color::parse("teal").flatten(&Color::parse("nope"));
        assert_eq!(opaque.to_rgba(), ([0, 128, 128], 1.0));
    }

    #[test]
    fn test_contrast() {
        let black = Color::parse("#000");
        let white = Color::parse("#fff");
        assert_eq!(black.contrast_ratio(&white), 21.0);
        assert_eq!(white.contrast_ratio(&black), 21.0);
        assert_eq!(white.contrast_ratio(&white), 1.0);

        // A fully transparent foreground disappears into the background.
        let clear = Color::parse("transparent");
        assert_eq!(clear.contrast_ratio(&white), 1.0);
        assert_eq!(clear.contrast_ratio(&black), 1.0);
        assert_eq!(Color::parse("rgb(0 0 0 / 50%)").contrast_ratio(&black), 1.0);

        // Composited channels stay fractional, here 127.5 gray.
        let shadow = Color::parse("rgb(0 0 0 / 50%)");
        assert_eq!(shadow.flatten_over_white().channels(), &[127.5, 127.5, 127.5]);
        assert_eq!(shadow.contrast_ratio(&white), 3.98);
    }

    #[test]
    fn test_oklch_accessor() {
        let red = Color::parse("red").to_oklch();
        assert_within!(red.l, 62.8, 0.1);
        assert_within!(red.c, 0.2577, 0.001);
        assert_within!(red.h, 29.23, 0.1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("#abc".parse::<Color>().map(|c| c.to_rgb()), Ok([170, 187, 204]));
        assert!(Color::try_from("nope").is_err());
        assert!(Color::try_from(String::from("hsl(0 0% 0%)")).is_ok());
        assert_eq!(Color::default().format(Format::Hex).as_str(), "#000000");
    }
}
