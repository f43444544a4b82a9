//! Color harmonies.
//!
//! A [`Harmony`] derives a palette from a base color by varying HSL lightness
//! or rotating HSL hue. Every palette includes the base color itself. Derived
//! colors inherit the base color's alpha and alpha style.
//!
//! ```
//! # use swatchbook::{Color, Format};
//! # use swatchbook::palette::Harmony;
//! let palette = Color::parse("#f00").palette(Harmony::Triadic);
//! let hexes: Vec<_> = palette
//!     .iter()
//!     .map(|c| c.format(Format::Hex).into_string())
//!     .collect();
//! assert_eq!(hexes, ["#ff0000", "#00ff00", "#0000ff"]);
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #f00;"></div>
//! <div style="background-color: #0f0;"></div>
//! <div style="background-color: #00f;"></div>
//! </div>

use log::trace;

use crate::core::{hsl_to_srgb, normalize_hue};
use crate::error::HarmonyNameError;
use crate::{Color, Float, Hsl};

/// A rule for deriving a palette from a base color.
///
/// The monochromatic palette is sorted by ascending lightness. All other
/// palettes are sorted by ascending hue. An invalid base color always yields
/// a palette with only that color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Harmony {
    /// Lighter and darker variants of the base color.
    ///
    /// A count of 2 adds one color that is 20 points darker if the base
    /// lightness exceeds 50 and 20 points lighter otherwise. Larger counts split the
    /// remaining colors into lighter and darker ones, with the lighter ones
    /// getting the extra color for an even count. Lighter variants approach
    /// white in equal steps scaled by `lighten` and darker variants approach
    /// black in equal steps scaled by `darken`. Counts 0 and 1 produce only
    /// the base color.
    Monochromatic {
        count: usize,
        lighten: Float,
        darken: Float,
    },
    /// The base color flanked by colors `angle` degrees to either side.
    Analogous { angle: Float },
    /// The base color and its complement.
    Complementary,
    /// The base color and the two colors `angle` degrees to either side of
    /// its complement.
    SplitComplementary { angle: Float },
    /// The base color and the colors 120° and 240° away.
    Triadic,
    /// The base color, its complement, and both rotated by `offset`
    /// degrees.
    Tetradic { offset: Float },
}

impl Harmony {
    /// Five monochromatic colors with the default factors 0.8 and 0.85.
    pub const fn monochromatic() -> Self {
        Self::Monochromatic {
            count: 5,
            lighten: 0.8,
            darken: 0.85,
        }
    }

    /// Analogous colors 30° apart.
    pub const fn analogous() -> Self {
        Self::Analogous { angle: 30.0 }
    }

    /// Complementary colors.
    pub const fn complementary() -> Self {
        Self::Complementary
    }

    /// Split-complementary colors 30° from the complement.
    pub const fn split_complementary() -> Self {
        Self::SplitComplementary { angle: 30.0 }
    }

    /// Triadic colors.
    pub const fn triadic() -> Self {
        Self::Triadic
    }

    /// Tetradic colors with a 60° offset.
    pub const fn tetradic() -> Self {
        Self::Tetradic { offset: 60.0 }
    }

    /// Get this harmony's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic { .. } => "monochromatic",
            Self::Analogous { .. } => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary { .. } => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic { .. } => "tetradic",
        }
    }
}

impl Default for Harmony {
    fn default() -> Self {
        Self::monochromatic()
    }
}

impl std::str::FromStr for Harmony {
    type Err = HarmonyNameError;

    /// Parse a harmony name into the harmony with default parameters.
    ///
    /// ```
    /// # use swatchbook::palette::Harmony;
    /// assert_eq!("Analogous".parse(), Ok(Harmony::Analogous { angle: 30.0 }));
    /// assert_eq!("splitcomplementary".parse(), Ok(Harmony::split_complementary()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let harmony = match s.trim().to_ascii_lowercase().as_str() {
            "monochromatic" => Self::monochromatic(),
            "analogous" => Self::analogous(),
            "complementary" => Self::complementary(),
            "split-complementary" | "splitcomplementary" => Self::split_complementary(),
            "triadic" => Self::triadic(),
            "tetradic" => Self::tetradic(),
            _ => return Err(HarmonyNameError(s.to_string())),
        };

        Ok(harmony)
    }
}

impl std::fmt::Display for Harmony {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// ====================================================================================================================

/// Generate the palette for the color and harmony.
pub(crate) fn generate(color: &Color, harmony: Harmony) -> Vec<Color> {
    if !color.is_valid() {
        return vec![color.clone()];
    }

    let base = color.to_hsl();
    let palette = match harmony {
        Harmony::Monochromatic {
            count,
            lighten,
            darken,
        } => monochromatic(color, &base, count, lighten, darken),
        Harmony::Analogous { angle } => by_hue(color, &base, &[-angle, angle]),
        Harmony::Complementary => by_hue(color, &base, &[180.0]),
        Harmony::SplitComplementary { angle } => {
            by_hue(color, &base, &[180.0 - angle, 180.0 + angle])
        }
        Harmony::Triadic => by_hue(color, &base, &[120.0, 240.0]),
        Harmony::Tetradic { offset } => {
            by_hue(color, &base, &[offset, 180.0, 180.0 + offset])
        }
    };

    trace!(
        "{} palette for {} has {} colors",
        harmony,
        color,
        palette.len()
    );
    palette
}

/// Create a variant of the color with the given HSL coordinates.
fn with_hsl(color: &Color, h: Float, s: Float, l: Float) -> Color {
    let [r, g, b] = hsl_to_srgb(&[
        normalize_hue(h),
        s.clamp(0.0, 100.0),
        l.clamp(0.0, 100.0),
    ]);
    Color::from_rgba(
        r * 255.0,
        g * 255.0,
        b * 255.0,
        color.alpha(),
        color.alpha_style(),
    )
}

fn monochromatic(
    color: &Color,
    base: &Hsl,
    count: usize,
    lighten: Float,
    darken: Float,
) -> Vec<Color> {
    let Hsl { h, s, l } = *base;
    let mut palette = vec![color.clone()];

    if count == 2 {
        let lightness = if 50.0 < l { l - 20.0 } else { l + 20.0 };
        palette.push(with_hsl(color, h, s, lightness));
    } else if 3 <= count {
        let lighter = count / 2;
        let darker = (count - 1) / 2;

        for index in 1..=lighter {
            let step = index as Float / (lighter + 1) as Float;
            palette.push(with_hsl(color, h, s, l + (100.0 - l) * step * lighten));
        }
        for index in 1..=darker {
            let step = index as Float / (darker + 1) as Float;
            palette.push(with_hsl(color, h, s, l * (1.0 - step * darken)));
        }
    }

    palette.sort_by(|c1, c2| c1.to_hsl().l.total_cmp(&c2.to_hsl().l));
    palette
}

/// Create the palette with the base color and variants rotated by the given
/// degrees.
fn by_hue(color: &Color, base: &Hsl, rotations: &[Float]) -> Vec<Color> {
    let Hsl { h, s, l } = *base;
    let mut palette = vec![color.clone()];
    palette.extend(
        rotations
            .iter()
            .map(|rotation| with_hsl(color, h + rotation, s, l)),
    );

    palette.sort_by(|c1, c2| {
        normalize_hue(c1.to_hsl().h).total_cmp(&normalize_hue(c2.to_hsl().h))
    });
    palette
}

#[cfg(test)]
mod test {
    use super::Harmony;
    use crate::core::assert_within;
    use crate::{AlphaStyle, Color, Float, Format};

    fn hexes(palette: &[Color]) -> Vec<String> {
        palette.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn test_invalid_base() {
        let color = Color::parse("nope");
        for harmony in [Harmony::monochromatic(), Harmony::triadic()] {
            let palette = color.palette(harmony);
            assert_eq!(palette.len(), 1);
            assert!(!palette[0].is_valid());
        }
    }

    #[test]
    fn test_monochromatic() {
        let base = Color::parse("hsl(210 60% 40%)");
        for count in 0..=9 {
            let palette = base.palette(Harmony::Monochromatic {
                count,
                lighten: 0.8,
                darken: 0.85,
            });
            assert_eq!(palette.len(), count.max(1));

            let lightness: Vec<Float> = palette.iter().map(|c| c.to_hsl().l).collect();
            assert!(lightness.windows(2).all(|pair| pair[0] <= pair[1]));
        }

        let pair = Color::parse("hsl(0 100% 70%)").palette(Harmony::Monochromatic {
            count: 2,
            lighten: 0.8,
            darken: 0.85,
        });
        assert_within!(pair[0].to_hsl().l, 50.0, 1e-6);
        assert_within!(pair[1].to_hsl().l, 70.0, 1e-6);
    }

    #[test]
    fn test_complementary() {
        let palette = Color::parse("hsl(30 80% 50%)").palette(Harmony::complementary());
        assert_eq!(palette.len(), 2);
        let h1 = palette[0].to_hsl().h;
        let h2 = palette[1].to_hsl().h;
        assert_within!((h2 - h1).rem_euclid(360.0), 180.0, 1e-6);
    }

    #[test]
    fn test_rotations() {
        assert_eq!(
            hexes(&Color::parse("#f00").palette(Harmony::tetradic())),
            ["#ff0000", "#ffff00", "#00ffff", "#0000ff"]
        );
        assert_eq!(
            hexes(&Color::parse("#f00").palette(Harmony::analogous())),
            ["#ff0000", "#ff8000", "#ff0080"]
        );
        assert_eq!(
            hexes(&Color::parse("#f00").palette(Harmony::split_complementary())),
            ["#ff0000", "#00ff80", "#0080ff"]
        );
    }

    #[test]
    fn test_inherits_alpha() {
        let base = Color::from_rgba(255.0, 0.0, 0.0, 0.5, AlphaStyle::Number);
        for color in base.palette(Harmony::triadic()) {
            assert_eq!(color.alpha(), 0.5);
            assert_eq!(color.alpha_style(), AlphaStyle::Number);
        }
        assert_eq!(
            base.palette(Harmony::triadic())[1].format(Format::Rgba).as_str(),
            "rgb(0 255 0 / .5)"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!("TRIADIC".parse::<Harmony>(), Ok(Harmony::Triadic));
        assert_eq!(Harmony::split_complementary().to_string(), "split-complementary");
        assert!("pentadic".parse::<Harmony>().is_err());
    }
}
