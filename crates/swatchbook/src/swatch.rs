//! Processing tables of named colors.
//!
//! Applications that show palettes, such as terminal or design-system color
//! sets, typically start with an ordered table from names to color strings. A
//! [`Swatch`] combines such an entry with the parsed color and the metrics
//! needed for sorting and for picking a legible foreground.
//!
//! ```
//! # use swatchbook::swatch::{NameSource, Swatch};
//! let swatches = Swatch::from_entries(
//!     [("Red", "#ff0000"), ("Gray", "#808080"), ("Bogus", "#xyz")],
//!     NameSource::Value,
//! );
//!
//! assert_eq!(swatches[0].hue, Some(0.0));
//! assert_eq!(swatches[1].hue, None);
//! assert!(!swatches[2].color.is_valid());
//! ```

use crate::core::is_achromatic;
use crate::{Color, Float};

/// The part of a table entry that describes the color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameSource {
    /// The value is the color, as for most palettes.
    #[default]
    Value,
    /// The name is the color, as for CSS named colors.
    Name,
}

/// A named color with its sort and contrast metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// The entry's name.
    pub name: String,
    /// The parsed color, which may be invalid.
    pub color: Color,
    /// The HSL hue in degrees, which is `None` for achromatic and invalid
    /// colors.
    pub hue: Option<Float>,
    /// The HSL saturation percentage.
    pub saturation: Float,
    /// The HSL lightness percentage.
    pub lightness: Float,
    /// The relative luminance.
    pub luminance: Float,
}

impl Swatch {
    /// Create a new swatch.
    pub fn new(name: &str, color: Color) -> Self {
        let hsl = color.to_hsl();
        let hue = if color.is_valid() && !is_achromatic(color.channels()) {
            Some(hsl.h)
        } else {
            None
        };

        Self {
            name: name.to_string(),
            luminance: color.relative_luminance(),
            color,
            hue,
            saturation: hsl.s,
            lightness: hsl.l,
        }
    }

    /// Process an ordered table of names and color strings.
    ///
    /// The result has one swatch per entry and preserves the table's order.
    /// Entries that do not describe a valid color produce swatches with
    /// invalid colors and zero metrics.
    pub fn from_entries<I, N, V>(entries: I, source: NameSource) -> Vec<Swatch>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|(name, value)| {
                let name = name.as_ref();
                let color = match source {
                    NameSource::Value => Color::parse(value.as_ref()),
                    NameSource::Name => Color::parse(name),
                };
                Swatch::new(name, color)
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::{NameSource, Swatch};
    use crate::core::assert_within;
    use crate::named_colors;

    #[test]
    fn test_named_table() {
        let swatches = Swatch::from_entries(named_colors(), NameSource::Name);
        assert_eq!(swatches.len(), named_colors().count());
        assert!(swatches.iter().all(|s| s.color.is_valid()));

        let names: Vec<_> = swatches.iter().map(|s| s.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let grays = swatches.iter().filter(|s| s.name.contains("gray")).count();
        let greys = swatches.iter().filter(|s| s.name.contains("grey")).count();
        assert_eq!(grays, greys);
        assert!(swatches
            .iter()
            .filter(|s| s.name.contains("gray"))
            .all(|s| s.hue.is_none() || s.name.contains("slate")));
    }

    #[test]
    fn test_metrics() {
        let swatches = Swatch::from_entries(
            vec![
                ("white".to_string(), "#ffffff".to_string()),
                ("teal".to_string(), "#008080".to_string()),
                ("broken".to_string(), String::new()),
            ],
            NameSource::Value,
        );

        let white = &swatches[0];
        assert_eq!(white.hue, None);
        assert_within!(white.lightness, 100.0, 1e-9);
        assert_within!(white.luminance, 1.0, 1e-9);

        let teal = &swatches[1];
        assert_within!(teal.hue.unwrap_or_default(), 180.0, 1e-9);
        assert_within!(teal.saturation, 100.0, 1e-9);

        let broken = &swatches[2];
        assert!(!broken.color.is_valid());
        assert_eq!(broken.hue, None);
        assert_eq!(broken.luminance, 0.0);
    }
}
