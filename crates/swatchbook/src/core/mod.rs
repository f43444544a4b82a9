mod contrast;
mod conversion;
mod equality;
mod gamut;
mod math;
mod named;
mod space;
mod string;

// contrast
pub(crate) use contrast::{composite, relative_luminance, to_contrast_ratio};

// conversion
pub use conversion::convert;
pub(crate) use conversion::{hsl_to_srgb, srgb_to_hsl};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;
pub(crate) use equality::normalize;

// gamut
pub(crate) use gamut::{hue_distance, is_achromatic, round_trip_oklch};

// math
pub(crate) use math::{clamp_finite, normalize_hue, round_to, FloatExt};

// named
pub use named::{named_color, named_colors};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::parse;
