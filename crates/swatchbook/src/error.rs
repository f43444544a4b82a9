//! Utility module with swatchbook's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// A color grammar.
///
/// The parser tries the grammars in the order of this enumeration's variants,
/// with named colors resolving to hexadecimal notation first. Once a grammar
/// matches an input structurally, parsing either succeeds with that grammar or
/// fails with an error naming the grammar.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "swatchbook.color")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `#rgb`, `#rgba`, `#rrggbb`, and `#rrggbbaa`, with optional `#`.
    Hex,
    /// `0xrrggbb` and `0xaarrggbb`, with alpha leading.
    LegacyHex,
    /// `oklch(L C H / A)` in modern syntax only.
    Oklch,
    /// `hsl()` and `hsla()` in modern and legacy syntax.
    Hsl,
    /// `rgb()` and `rgba()` in modern and legacy syntax.
    Rgb,
}

impl Grammar {
    /// Get this grammar's lower-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::LegacyHex => "0x hex",
            Self::Oklch => "oklch",
            Self::Hsl => "hsl",
            Self::Rgb => "rgb",
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// An erroneous color.
///
/// A failed parse does not abort anything. Instead, it produces an invalid
/// [`Color`](crate::Color) that carries one of these errors, so that
/// downstream code needs to check validity exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// An input that is empty after trimming whitespace.
    EmptyInput,

    /// An input that is not text, i.e., bytes that are not valid UTF-8.
    NotText,

    /// An input that matches none of the grammars. The variant carries the
    /// raw input.
    UnknownFormat(String),

    /// A hexadecimal color with a digit that is not hexadecimal or with the
    /// wrong number of digits.
    MalformedHex(Grammar),

    /// An HSL color whose saturation or lightness lacks the `%` unit. For
    /// example, `hsl(120 50 50)` is missing both.
    MissingPercent(Grammar),

    /// A functional notation with a malformed number. For example,
    /// `rgb(1.2.3 0 0)` has a malformed red channel.
    MalformedNumber(Grammar),

    /// A color whose conversion to sRGB produced a channel that is not a
    /// finite number.
    NonFinite(Grammar),

    /// A translucent color flattened onto an invalid background.
    InvalidBackground,
}

impl ColorError {
    /// Get the grammar that produced this error, if any.
    pub fn grammar(&self) -> Option<Grammar> {
        use ColorError::*;

        match self {
            MalformedHex(g) | MissingPercent(g) | MalformedNumber(g) | NonFinite(g) => Some(*g),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorError::*;

        match self {
            EmptyInput => f.write_str("input empty"),
            NotText => f.write_str("input should be text but is not"),
            UnknownFormat(input) => write!(f, "unrecognized color format \"{}\"", input),
            MalformedHex(grammar) => write!(
                f,
                "invalid {} format: should have a valid number of hexadecimal digits but does not",
                grammar
            ),
            MissingPercent(grammar) => write!(
                f,
                "invalid {} format: saturation and lightness should end in `%` but do not",
                grammar
            ),
            MalformedNumber(grammar) => write!(
                f,
                "invalid {} format: components should be numbers but are not",
                grammar
            ),
            NonFinite(grammar) => write!(
                f,
                "invalid {} format: conversion should yield finite channels but does not",
                grammar
            ),
            InvalidBackground => f.write_str("background color should be valid but is not"),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown format name.
///
/// This error indicates a string that does not name one of the
/// [`Format`](crate::format::Format) modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatNameError(pub String);

impl std::fmt::Display for FormatNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" should name a color format but does not", self.0)
    }
}

impl std::error::Error for FormatNameError {}

#[cfg(feature = "pyffi")]
impl From<FormatNameError> for PyErr {
    fn from(value: FormatNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

/// An unknown palette harmony name.
///
/// This error indicates a string that does not name one of the
/// [`Harmony`](crate::palette::Harmony) rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarmonyNameError(pub String);

impl std::fmt::Display for HarmonyNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" should name a palette harmony but does not", self.0)
    }
}

impl std::error::Error for HarmonyNameError {}

#[cfg(feature = "pyffi")]
impl From<HarmonyNameError> for PyErr {
    fn from(value: HarmonyNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorError, Grammar};

    #[test]
    fn test_messages() {
        assert_eq!(ColorError::EmptyInput.to_string(), "input empty");
        assert_eq!(
            ColorError::UnknownFormat("notacolor".to_string()).to_string(),
            "unrecognized color format \"notacolor\""
        );
        assert!(ColorError::MissingPercent(Grammar::Hsl)
            .to_string()
            .starts_with("invalid hsl format: "));
        assert_eq!(
            ColorError::MalformedNumber(Grammar::Rgb).grammar(),
            Some(Grammar::Rgb)
        );
        assert_eq!(ColorError::InvalidBackground.grammar(), None);
    }
}
