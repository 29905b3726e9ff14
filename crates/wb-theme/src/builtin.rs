// SPDX-License-Identifier: MIT
//! Reference palettes shipped with the builder.
//!
//! The WordPress preset palette doubles as the fixed input of the
//! [`PaletteTransformer`](crate::transform::PaletteTransformer).

use crate::analysis::NamedPalette;

/// One entry of a reference palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    /// Slug used in CSS variable names.
    pub name: &'static str,
    pub hex: &'static str,
}

const fn preset(name: &'static str, hex: &'static str) -> PresetColor {
    PresetColor { name, hex }
}

/// The WordPress core preset palette (`--wp--preset--color--*`).
pub const WORDPRESS: &[PresetColor] = &[
    preset("black", "#000000"),
    preset("cyan-bluish-gray", "#abb8c3"),
    preset("white", "#ffffff"),
    preset("pale-pink", "#f78da7"),
    preset("vivid-red", "#cf2e2e"),
    preset("luminous-vivid-orange", "#ff6900"),
    preset("luminous-vivid-amber", "#fcb900"),
    preset("light-green-cyan", "#7bdcb5"),
    preset("vivid-green-cyan", "#00d084"),
    preset("pale-cyan-blue", "#8ed1fc"),
    preset("vivid-cyan-blue", "#0693e3"),
    preset("vivid-purple", "#9b51e0"),
];

/// The primary of [`WORDPRESS`] (vivid cyan blue).
pub const WORDPRESS_PRIMARY: &str = "#0693e3";

/// Material Design 500-weight hues.
pub const MATERIAL: &[PresetColor] = &[
    preset("red", "#f44336"),
    preset("pink", "#e91e63"),
    preset("purple", "#9c27b0"),
    preset("deep-purple", "#673ab7"),
    preset("indigo", "#3f51b5"),
    preset("blue", "#2196f3"),
    preset("light-blue", "#03a9f4"),
    preset("cyan", "#00bcd4"),
    preset("teal", "#009688"),
    preset("green", "#4caf50"),
];

/// Look up a builtin palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_palette(name: &str) -> Option<NamedPalette> {
    let colors = match name {
        "wordpress" | "wp" => WORDPRESS,
        "material" => MATERIAL,
        _ => return None,
    };
    Some(to_named(colors))
}

/// List all available builtin palette names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["wordpress", "material"]
}

/// Convert preset entries to a name → hex palette, preserving order.
#[must_use]
pub fn to_named(colors: &[PresetColor]) -> NamedPalette {
    colors
        .iter()
        .map(|c| (c.name.to_owned(), c.hex.to_owned()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
