use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use super::conversion::{hsl_to_srgb, oklch_to_srgb};
use super::{clamp_finite, named_color, normalize_hue};
use crate::error::{ColorError, Grammar};
use crate::{AlphaStyle, Float};

/// The result of successfully parsing a color string.
///
/// Channels are gamma-corrected sRGB in `0..=255`, still with fractional
/// precision. Alpha is in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ParsedColor {
    pub channels: [Float; 3],
    pub alpha: Float,
    pub alpha_style: AlphaStyle,
}

/// A grammar matcher. It returns `None` if the input does not match the
/// grammar structurally, and otherwise the outcome of decoding the match.
type Matcher = fn(&str) -> Option<Result<ParsedColor, ColorError>>;

/// The grammars in priority order.
const GRAMMARS: [(Grammar, Matcher); 5] = [
    (Grammar::Hex, match_hex),
    (Grammar::LegacyHex, match_legacy_hex),
    (Grammar::Oklch, match_oklch),
    (Grammar::Hsl, match_hsl),
    (Grammar::Rgb, match_rgb),
];

/// Parse the string into a color.
///
/// After trimming the input and resolving named colors, this function tries
/// each grammar in turn. The first grammar that matches structurally decides
/// the outcome, even if decoding the components subsequently fails.
pub(crate) fn parse(input: &str) -> Result<ParsedColor, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!("failed to parse color: input is empty");
        return Err(ColorError::EmptyInput);
    }

    let source = named_color(trimmed).unwrap_or(trimmed);
    for (grammar, matcher) in GRAMMARS {
        if let Some(result) = matcher(source) {
            if let Err(ref error) = result {
                debug!("failed to parse {:?} as {} color: {}", input, grammar, error);
            }
            return result;
        }
    }

    debug!("failed to parse {:?}: no grammar matches", input);
    Err(ColorError::UnknownFormat(input.to_string()))
}

// --------------------------------------------------------------------------------------------------------------------

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$").expect("hex pattern is valid")
});

static LEGACY_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^0x([0-9a-f]{6}|[0-9a-f]{8})$").expect("0x hex pattern is valid"));

/// Parse the string of hexadecimal digits into bytes. Each digit of a three
/// or four digit string stands for a byte with the digit repeated.
fn parse_hex_digits(digits: &str, grammar: Grammar) -> Result<Vec<u8>, ColorError> {
    let malformed = || ColorError::MalformedHex(grammar);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| {
                let d = c.to_digit(16).ok_or_else(malformed)?;
                Ok((d * 17) as u8)
            })
            .collect(),
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|index| u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| malformed()))
            .collect(),
        _ => Err(malformed()),
    }
}

fn from_bytes(rgb: &[u8], alpha: Option<u8>) -> ParsedColor {
    let (alpha, alpha_style) = match alpha {
        Some(a) => (a as Float / 255.0, AlphaStyle::Number),
        None => (1.0, AlphaStyle::Unset),
    };

    ParsedColor {
        channels: [rgb[0] as Float, rgb[1] as Float, rgb[2] as Float],
        alpha,
        alpha_style,
    }
}

/// Match `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`, with the leading `#`
/// optional. Other digit counts do not match at all.
fn match_hex(input: &str) -> Option<Result<ParsedColor, ColorError>> {
    let captures = HEX.captures(input)?;
    let digits = captures.get(1)?.as_str();

    Some(
        parse_hex_digits(digits, Grammar::Hex)
            .map(|bytes| from_bytes(&bytes[..3], bytes.get(3).copied())),
    )
}

/// Match `0xrrggbb` or `0xaarrggbb`, with alpha leading.
fn match_legacy_hex(input: &str) -> Option<Result<ParsedColor, ColorError>> {
    let captures = LEGACY_HEX.captures(input)?;
    let digits = captures.get(1)?.as_str();
    Some(
        parse_hex_digits(digits, Grammar::LegacyHex).map(|bytes| match bytes.as_slice() {
            [a, rgb @ ..] if bytes.len() == 4 => from_bytes(rgb, Some(*a)),
            rgb => from_bytes(rgb, None),
        }),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Split a numeric component into its number and whether it ends in `%`.
fn parse_number(s: &str, grammar: Grammar) -> Result<(Float, bool), ColorError> {
    let (digits, is_percent) = match s.strip_suffix('%') {
        Some(digits) => (digits, true),
        None => (s, false),
    };

    let value = digits
        .parse::<Float>()
        .map_err(|_| ColorError::MalformedNumber(grammar))?;
    if value.is_nan() {
        return Err(ColorError::MalformedNumber(grammar));
    }

    Ok((value, is_percent))
}

/// Determine the length of the leading number, including an exponent with at
/// least one digit.
fn number_length(s: &str) -> usize {
    let mantissa = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(s.len());

    let rest = &s[mantissa..];
    let Some(exponent) = rest.strip_prefix(['e', 'E']) else {
        return mantissa;
    };
    let unsigned = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if digits == 0 {
        mantissa
    } else {
        s.len() - unsigned.len() + digits
    }
}

/// Parse a hue in degrees, radians, gradians, or turns and normalize it to
/// `0..360`. Unrecognized units yield a hue of zero.
fn parse_hue(s: &str, grammar: Grammar) -> Result<Float, ColorError> {
    let (digits, unit) = s.split_at(number_length(s));

    let value = digits
        .parse::<Float>()
        .map_err(|_| ColorError::MalformedNumber(grammar))?;

    let degrees = match unit.to_ascii_lowercase().as_str() {
        "" | "deg" | "°" => value,
        "rad" => value.to_degrees(),
        "grad" => value * 0.9,
        "turn" => value * 360.0,
        _ => 0.0,
    };

    Ok(normalize_hue(degrees))
}

/// Parse an optional alpha component.
fn parse_alpha(s: Option<&str>, grammar: Grammar) -> Result<(Float, AlphaStyle), ColorError> {
    let s = match s.map(str::trim) {
        None | Some("") => return Ok((1.0, AlphaStyle::Unset)),
        Some(s) => s,
    };

    let (value, is_percent) = parse_number(s, grammar)?;
    if is_percent {
        Ok((value.clamp(0.0, 100.0) / 100.0, AlphaStyle::Percent))
    } else {
        Ok((value.clamp(0.0, 1.0), AlphaStyle::Number))
    }
}

/// Scale unit range sRGB coordinates to channels in `0..=255`, failing on
/// non-finite coordinates.
fn to_channels(srgb: &[Float; 3], grammar: Grammar) -> Result<[Float; 3], ColorError> {
    if srgb.iter().any(|c| !c.is_finite()) {
        return Err(ColorError::NonFinite(grammar));
    }

    Ok([
        srgb[0].clamp(0.0, 1.0) * 255.0,
        srgb[1].clamp(0.0, 1.0) * 255.0,
        srgb[2].clamp(0.0, 1.0) * 255.0,
    ])
}

/// Get the group as string slice, if present.
#[inline]
fn group<'a>(captures: &Captures<'a>, index: usize) -> Option<&'a str> {
    captures.get(index).map(|m| m.as_str())
}

// --------------------------------------------------------------------------------------------------------------------

static OKLCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^oklch\(\s*([+\-\d.%]+)\s+([+\-\d.%]+)\s+([+\-\d.%a-z°]+)\s*(?:[/\s]\s*([+\-\d.%]+)\s*)?\)$",
    )
    .expect("oklch pattern is valid")
});

/// Match `oklch(L C H / A)`.
///
/// Lightness is a percentage or a number in unit range. Chroma is a number or
/// a percentage of 0.4.
fn match_oklch(input: &str) -> Option<Result<ParsedColor, ColorError>> {
    let captures = OKLCH.captures(input)?;
    Some(decode_oklch(&captures))
}

#[allow(non_snake_case)]
fn decode_oklch(captures: &Captures<'_>) -> Result<ParsedColor, ColorError> {
    let grammar = Grammar::Oklch;

    let (L, is_percent) = parse_number(group(captures, 1).unwrap_or_default(), grammar)?;
    let L = if is_percent { L } else { L * 100.0 };
    let L = L.clamp(0.0, 100.0);

    let (C, is_percent) = parse_number(group(captures, 2).unwrap_or_default(), grammar)?;
    let C = if is_percent { C / 100.0 * 0.4 } else { C };
    let C = C.max(0.0);

    let h = parse_hue(group(captures, 3).unwrap_or_default(), grammar)?;
    let (alpha, alpha_style) = parse_alpha(group(captures, 4), grammar)?;
    let channels = to_channels(&oklch_to_srgb(&[L / 100.0, C, h]), grammar)?;

    Ok(ParsedColor {
        channels,
        alpha,
        alpha_style,
    })
}

// --------------------------------------------------------------------------------------------------------------------

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*([+\-\d.%a-z°]+)\s+([+\-\d.%]+)\s+([+\-\d.%]+)\s*(?:[/\s]\s*([+\-\d.%]+)\s*)?\)$",
    )
    .expect("hsl pattern is valid")
});

static LEGACY_HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*([+\-\d.%a-z°]+)\s*,\s*([+\-\d.%]+)\s*,\s*([+\-\d.%]+)\s*(?:,\s*([+\-\d.%]+)\s*)?\)$",
    )
    .expect("legacy hsl pattern is valid")
});

/// Match `hsl()` or `hsla()` in modern or legacy syntax.
///
/// Saturation and lightness must be percentages.
fn match_hsl(input: &str) -> Option<Result<ParsedColor, ColorError>> {
    let captures = HSL
        .captures(input)
        .or_else(|| LEGACY_HSL.captures(input))?;

    Some(decode_hsl(&captures))
}

fn decode_hsl(captures: &Captures<'_>) -> Result<ParsedColor, ColorError> {
    let grammar = Grammar::Hsl;
    let percentage = |index| -> Result<Float, ColorError> {
        let (value, is_percent) = parse_number(group(captures, index).unwrap_or_default(), grammar)?;
        if !is_percent {
            return Err(ColorError::MissingPercent(grammar));
        }
        Ok(value.clamp(0.0, 100.0))
    };

    let h = parse_hue(group(captures, 1).unwrap_or_default(), grammar)?;
    let s = percentage(2)?;
    let l = percentage(3)?;
    let (alpha, alpha_style) = parse_alpha(group(captures, 4), grammar)?;
    let channels = to_channels(&hsl_to_srgb(&[h, s, l]), grammar)?;

    Ok(ParsedColor {
        channels,
        alpha,
        alpha_style,
    })
}

// --------------------------------------------------------------------------------------------------------------------

static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([+\-\d.%]+)\s+([+\-\d.%]+)\s+([+\-\d.%]+)\s*(?:[/\s]\s*([+\-\d.%]+)\s*)?\)$",
    )
    .expect("rgb pattern is valid")
});

static LEGACY_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([+\-\d.%]+)\s*,\s*([+\-\d.%]+)\s*,\s*([+\-\d.%]+)\s*(?:,\s*([+\-\d.%]+)\s*)?\)$",
    )
    .expect("legacy rgb pattern is valid")
});

/// Match `rgb()` or `rgba()` in modern or legacy syntax.
///
/// Channels are numbers in `0..=255` or percentages thereof.
fn match_rgb(input: &str) -> Option<Result<ParsedColor, ColorError>> {
    let captures = RGB
        .captures(input)
        .or_else(|| LEGACY_RGB.captures(input))?;

    Some(decode_rgb(&captures))
}

fn decode_rgb(captures: &Captures<'_>) -> Result<ParsedColor, ColorError> {
    let grammar = Grammar::Rgb;
    let channel = |index| -> Result<Float, ColorError> {
        let (value, is_percent) = parse_number(group(captures, index).unwrap_or_default(), grammar)?;
        let value = if is_percent { value / 100.0 * 255.0 } else { value };
        Ok(clamp_finite(value, 0.0, 255.0))
    };

    let channels = [channel(1)?, channel(2)?, channel(3)?];
    let (alpha, alpha_style) = parse_alpha(group(captures, 4), grammar)?;

    Ok(ParsedColor {
        channels,
        alpha,
        alpha_style,
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{number_length, parse, parse_hue, ParsedColor};
    use crate::core::assert_within;
    use crate::error::{ColorError, Grammar};
    use crate::{AlphaStyle, Float};

    fn channels(input: &str) -> [Float; 3] {
        parse(input).map(|c| c.channels).unwrap_or([-1.0; 3])
    }

    #[test]
    fn test_hex() {
        assert_eq!(
            parse("#ff0000"),
            Ok(ParsedColor {
                channels: [255.0, 0.0, 0.0],
                alpha: 1.0,
                alpha_style: AlphaStyle::Unset,
            })
        );
        assert_eq!(channels("abc"), [170.0, 187.0, 204.0]);
        assert_eq!(channels("#ABC"), [170.0, 187.0, 204.0]);

        let color = parse("#11223380").expect("valid hex with alpha");
        assert_eq!(color.channels, [17.0, 34.0, 51.0]);
        assert_within!(color.alpha, 128.0 / 255.0, 1e-12);
        assert_eq!(color.alpha_style, AlphaStyle::Number);

        let color = parse("#fff0").expect("valid short hex with alpha");
        assert_eq!(color.alpha, 0.0);

        for input in ["#ggg", "#12345", "#notacolor", "12345", "#1234567"] {
            assert_eq!(parse(input), Err(ColorError::UnknownFormat(input.to_string())));
        }
    }

    #[test]
    fn test_legacy_hex() {
        let color = parse("0x80ff0000").expect("valid 0x hex with alpha");
        assert_eq!(color.channels, [255.0, 0.0, 0.0]);
        assert_within!(color.alpha, 128.0 / 255.0, 1e-12);

        assert_eq!(channels("0X00ff00"), [0.0, 255.0, 0.0]);
        for input in ["0x12345", "0xgg0000", "0xfff", "0x123456789"] {
            assert_eq!(parse(input), Err(ColorError::UnknownFormat(input.to_string())));
        }
    }

    #[test]
    fn test_named() {
        assert_eq!(channels("Red"), [255.0, 0.0, 0.0]);
        assert_eq!(channels("  rebeccapurple "), [102.0, 51.0, 153.0]);

        let color = parse("transparent").expect("transparent is named");
        assert_eq!(color.alpha, 0.0);
        assert_eq!(color.alpha_style, AlphaStyle::Number);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(channels("rgb(0 128 255)"), [0.0, 128.0, 255.0]);
        assert_eq!(channels("rgb(0, 128, 255)"), [0.0, 128.0, 255.0]);
        assert_eq!(channels("RGBA(300 -5 50%)"), [255.0, 0.0, 127.5]);

        let color = parse("rgba(0,0,0,50%)").expect("valid legacy rgba");
        assert_eq!((color.alpha, color.alpha_style), (0.5, AlphaStyle::Percent));

        let color = parse("rgb(0 0 0 / 0.25)").expect("valid modern rgba");
        assert_eq!((color.alpha, color.alpha_style), (0.25, AlphaStyle::Number));

        let color = parse("rgb(0 0 0 / 7)").expect("valid modern rgba");
        assert_eq!(color.alpha, 1.0);

        assert_eq!(
            parse("rgb(1.2.3 0 0)"),
            Err(ColorError::MalformedNumber(Grammar::Rgb))
        );
        assert_eq!(
            parse("rgb(1 2)"),
            Err(ColorError::UnknownFormat("rgb(1 2)".to_string()))
        );
    }

    #[test]
    fn test_hsl() {
        assert_eq!(channels("hsl(0 100% 50%)"), [255.0, 0.0, 0.0]);
        assert_eq!(channels("hsla(120, 100%, 50%, 1)"), [0.0, 255.0, 0.0]);
        assert_eq!(channels("hsl(0.5turn 0% 100%)"), [255.0, 255.0, 255.0]);
        assert_eq!(
            channels("hsl(1e2 100% 50%)"),
            channels("hsl(100 100% 50%)")
        );
        assert_eq!(
            parse("hsl(120 50 50)"),
            Err(ColorError::MissingPercent(Grammar::Hsl))
        );

        let blue = channels("hsl(240deg 100% 50%)");
        assert_within!(blue[2], 255.0, 1e-9);
        assert_within!(blue[0], 0.0, 1e-9);
    }

    #[test]
    fn test_oklch() {
        let red = channels("oklch(62.8% 0.2577 29.23)");
        assert_within!(red[0], 255.0, 1.0);
        assert_within!(red[1], 0.0, 1.0);
        assert_within!(red[2], 0.0, 1.0);

        let white = channels("oklch(1 0 0)");
        assert_within!(white[0], 255.0, 0.5);

        let black = parse("oklch(0% 0% 0 / 50%)").expect("valid oklch");
        assert_eq!(black.channels, [0.0, 0.0, 0.0]);
        assert_eq!(black.alpha_style, AlphaStyle::Percent);

        assert_eq!(
            parse("oklch(50%, 0.1, 30)"),
            Err(ColorError::UnknownFormat("oklch(50%, 0.1, 30)".to_string()))
        );
    }

    #[test]
    fn test_hue_units() {
        let g = Grammar::Hsl;
        assert_eq!(parse_hue("90", g), Ok(90.0));
        assert_eq!(parse_hue("90deg", g), Ok(90.0));
        assert_eq!(parse_hue("90°", g), Ok(90.0));
        assert_eq!(parse_hue("100grad", g), Ok(90.0));
        assert_eq!(parse_hue("0.25turn", g), Ok(90.0));
        assert_eq!(parse_hue("-90", g), Ok(270.0));
        assert_eq!(parse_hue("45parsec", g), Ok(0.0));
        assert_within!(
            parse_hue("3.14159265358979rad", g).unwrap_or_default(),
            180.0,
            1e-9
        );
        assert_eq!(parse_hue("deg", g), Err(ColorError::MalformedNumber(g)));

        assert_eq!(parse_hue("1e2", g), Ok(100.0));
        assert_eq!(parse_hue("1E2deg", g), Ok(100.0));
        assert_eq!(parse_hue("25e-1", g), Ok(2.5));
        assert_eq!(parse_hue("5e+1grad", g), Ok(45.0));
        assert_eq!(parse_hue("2em", g), Ok(0.0));
        assert_eq!(number_length("1e2turn"), 3);
        assert_eq!(number_length("1e"), 1);
        assert_eq!(number_length("1e+"), 1);
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse(""), Err(ColorError::EmptyInput));
        assert_eq!(parse("   "), Err(ColorError::EmptyInput));
        assert_eq!(
            parse("notacolor"),
            Err(ColorError::UnknownFormat("notacolor".to_string()))
        );
    }
}
