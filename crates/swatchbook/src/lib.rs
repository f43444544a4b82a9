//! # Swatchbook
//!
//! Swatchbook reads, converts, and writes the color notations of CSS.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Build with the `pyffi` feature for a version that also covers Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Swatchbook's main abstractions are:
//!
//!   * [`Color`] is a **textual color**, i.e., an sRGB color with alpha that
//!     also remembers how it was written. [`Color::parse`] accepts hexadecimal
//!     notation with or without `#`, `0x` notation with leading alpha, the
//!     functional notations `rgb()`, `hsl()`, and `oklch()` in both modern and
//!     legacy syntax, as well as the CSS named colors. It never fails but
//!     produces an invalid color with a [`ColorError`](error::ColorError)
//!     instead.
//!   * [`Format`] selects the notation when writing a color, with
//!     [`Format::Auto`] favoring the notation the color was written in.
//!     Formatting produces a [`Formatted`] result, which distinguishes
//!     notations from error messages.
//!   * [`contrast_ratio`] computes the **WCAG 2 contrast ratio** between
//!     foreground and background, after compositing translucent colors.
//!   * [`palette::Harmony`] enumerates the **color harmonies** used by
//!     [`Color::palette`].
//!   * [`gamut::max_srgb_chroma`] determines the **largest displayable
//!     chroma** for an Oklch lightness and hue.
//!   * [`swatch::Swatch`] prepares **tables of named colors** for display.
//!
//! Underlying all of them are the conversions between sRGB, linear sRGB, HSL,
//! Oklab, Oklch, and XYZ, which are also available through [`convert`].
//!
//!
//! ## 2. Example
//!
//! ```
//! # use swatchbook::{contrast_ratio, Color, Format};
//! let text = Color::parse("rgb(0 0 0 / 60%)");
//! let paper = Color::parse("LightYellow");
//!
//! assert_eq!(text.format(Format::Hsla).as_str(), "hsl(0 0% 0% / 60%)");
//! assert_eq!(paper.to_hex(), "#ffffe0");
//! assert!(4.5 <= contrast_ratio(&text, &paper));
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Swatchbook supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls swatchbook's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Swatchbook uses the [`log`](https://crates.io/crates/log) facade for
//! diagnostics. The parser logs failures at debug level and the chroma search
//! logs its iterations at trace level. Applications need to install a logger
//! to see them.
#![cfg_attr(
    feature = "pyffi",
    doc = "\n\nItems that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod format;
pub mod gamut;
mod object;
pub mod palette;
pub mod swatch;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{convert, named_color, named_colors, ColorSpace};
pub use format::{Format, Formatted};
pub use object::{contrast_ratio, AlphaStyle, Color, Hsl, Oklch};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(gamut::max_srgb_chroma, m)?)?;

    m.add_class::<AlphaStyle>()?;
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<Format>()?;
    m.add_class::<error::Grammar>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Oklch>()?;

    Ok(())
}
