use std::env;

use swatchbook::gamut::max_srgb_chroma;
use swatchbook::palette::Harmony;
use swatchbook::swatch::{NameSource, Swatch};
use swatchbook::{contrast_ratio, Color, Format};

const FORMATS: [Format; 8] = [
    Format::Auto,
    Format::Hexa,
    Format::HexaShort,
    Format::Rgba,
    Format::RgbaLegacy,
    Format::Hsla,
    Format::HslaLegacy,
    Format::Oklcha,
];

/// Generate the xterm 256-color table.
fn xterm_colors() -> Vec<(String, String)> {
    const BASICS: [&str; 16] = [
        "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
        "#808080", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
    ];
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let mut colors: Vec<(String, String)> = BASICS
        .iter()
        .enumerate()
        .map(|(index, hex)| (format!("color{}", index), hex.to_string()))
        .collect();

    for r in LEVELS {
        for g in LEVELS {
            for b in LEVELS {
                let name = format!("color{}", colors.len());
                colors.push((name, format!("#{:02x}{:02x}{:02x}", r, g, b)));
            }
        }
    }

    for step in 0..24 {
        let level = 8 + step * 10;
        let name = format!("color{}", colors.len());
        colors.push((name, format!("#{:02x}{:02x}{:02x}", level, level, level)));
    }

    colors
}

/// Show a color in the terminal, with black or white text depending on
/// contrast.
fn chip(color: &Color) -> String {
    let [r, g, b] = color.flatten_over_white().to_rgb();
    let black = Color::parse("black");
    let white = Color::parse("white");
    let (fr, fg, fb) = if contrast_ratio(&black, color) >= contrast_ratio(&white, color) {
        (0, 0, 0)
    } else {
        (255, 255, 255)
    };

    format!(
        "\x1b[38;2;{};{};{};48;2;{};{};{}m {:^9} \x1b[m",
        fr,
        fg,
        fb,
        r,
        g,
        b,
        color.to_hex()
    )
}

fn inspect(input: &str) {
    let color = Color::parse(input);
    println!("\n{:?}", input);
    if !color.is_valid() {
        println!("    {}", color.format(Format::Auto));
        return;
    }

    println!("    {}", chip(&color));
    for format in FORMATS {
        println!("    {:<12} {}", format, color.format(format));
    }

    println!(
        "    contrast     {} on white, {} on black",
        color.contrast_ratio(&Color::parse("white")),
        color.contrast_ratio(&Color::parse("black"))
    );

    let oklch = color.to_oklch();
    println!(
        "    max chroma   {:.4} at oklch({:.0}% _ {:.0})",
        max_srgb_chroma(oklch.l, oklch.h, 0.4),
        oklch.l,
        oklch.h
    );

    for harmony in [
        Harmony::monochromatic(),
        Harmony::analogous(),
        Harmony::complementary(),
        Harmony::split_complementary(),
        Harmony::triadic(),
        Harmony::tetradic(),
    ] {
        let chips: Vec<_> = color.palette(harmony).iter().map(chip).collect();
        println!("    {:<20} {}", harmony, chips.join(""));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        let mut swatches = Swatch::from_entries(xterm_colors(), NameSource::Value);
        swatches.sort_by(|s1, s2| {
            s1.hue
                .unwrap_or(-1.0)
                .total_cmp(&s2.hue.unwrap_or(-1.0))
                .then(s1.lightness.total_cmp(&s2.lightness))
        });

        for row in swatches.chunks(8) {
            let chips: Vec<_> = row.iter().map(|s| chip(&s.color)).collect();
            println!("{}", chips.join(""));
        }
        return;
    }

    for input in &inputs {
        inspect(input);
    }
}
