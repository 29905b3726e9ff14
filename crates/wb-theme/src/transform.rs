// SPDX-License-Identifier: MIT
//! Hue-shift a fixed reference palette onto a new primary.
//!
//! A narrow special case of [`analysis`](crate::analysis): the reference
//! palette and its primary are known up front, so one signed hue delta is
//! enough. Neutral colors pass through untouched.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use wb_color::{hex_to_hsl, hsl_to_hex};

use crate::builtin::{PresetColor, WORDPRESS, WORDPRESS_PRIMARY};

/// CSS variable prefix of WordPress preset colors.
pub const PRESET_PREFIX: &str = "--wp--preset--color--";

const CSS_HEADER: &str = "/* WordPress Color Scheme - Transformed Values */";
/// Below this saturation (%) a reference color is treated as neutral.
const NEUTRAL_SATURATION: f64 = 15.0;
/// Names that never shift, whatever their saturation.
const FIXED_NAMES: [&str; 2] = ["black", "white"];

// ─── PaletteTransformer ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct PaletteTransformer {
    reference: &'static [PresetColor],
    original_primary: &'static str,
}

impl Default for PaletteTransformer {
    /// The WordPress preset palette around vivid cyan blue.
    fn default() -> Self {
        Self::new(WORDPRESS, WORDPRESS_PRIMARY)
    }
}

impl PaletteTransformer {
    #[must_use]
    pub const fn new(reference: &'static [PresetColor], original_primary: &'static str) -> Self {
        Self {
            reference,
            original_primary,
        }
    }

    #[must_use]
    pub const fn reference(&self) -> &'static [PresetColor] {
        self.reference
    }

    /// Shift every non-neutral reference color by the hue delta between the
    /// reference primary and `new_primary_hex`.
    #[must_use]
    pub fn transform(&self, new_primary_hex: &str) -> Transformation {
        let original = hex_to_hsl(self.original_primary);
        let target = hex_to_hsl(new_primary_hex);
        let hue_shift = wrap_signed(target.h - original.h);
        debug!(hue_shift, new_primary = new_primary_hex, "transforming reference palette");

        let mut transformed_count = 0;
        let colors = self
            .reference
            .iter()
            .map(|color| {
                let hsl = hex_to_hsl(color.hex);
                let value = if hsl.s < NEUTRAL_SATURATION || FIXED_NAMES.contains(&color.name) {
                    color.hex.to_owned()
                } else {
                    transformed_count += 1;
                    hsl_to_hex(hsl.h + hue_shift, hsl.s, hsl.l)
                };
                (color.name.to_owned(), value)
            })
            .collect();

        Transformation {
            colors,
            hue_shift,
            transformed_count,
            original_primary: self.original_primary.to_owned(),
            new_primary: new_primary_hex.to_owned(),
        }
    }
}

/// Wrap a hue delta into `[-180, 180]`.
fn wrap_signed(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

// ─── Transformation ──────────────────────────────────────────────────────────

/// Result of one transform: the shifted palette plus its statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    /// Reference name → hex, in reference order.
    pub colors: IndexMap<String, String>,
    /// Signed degrees, `[-180, 180]`.
    pub hue_shift: f64,
    pub transformed_count: usize,
    pub original_primary: String,
    pub new_primary: String,
}

impl Transformation {
    /// CSS custom property declarations, `--wp--preset--color--{name}`.
    pub fn declarations(&self) -> impl Iterator<Item = (String, &str)> {
        self.colors
            .iter()
            .map(|(name, hex)| (format!("{PRESET_PREFIX}{name}"), hex.as_str()))
    }

    /// Stylesheet fragment with a header comment and one declaration per
    /// color.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!("{CSS_HEADER}\n:root {{\n");
        for (property, value) in self.declarations() {
            let _ = writeln!(css, "  {property}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

// ─── Environment Detection ───────────────────────────────────────────────────

/// Snapshot of the document signals that reveal a WordPress page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSignals {
    /// Text of every `<style>` and linked stylesheet.
    pub stylesheets: Vec<String>,
    /// Computed value of `--wp--preset--color--vivid-cyan-blue` on the root.
    pub computed_primary: Option<String>,
    pub body_classes: Vec<String>,
    /// Number of `.wp-block` / `.wp-site` elements.
    pub wp_element_count: usize,
}

impl DocumentSignals {
    /// Whether any signal shows the preset palette is in use.
    #[must_use]
    pub fn is_wordpress(&self) -> bool {
        self.stylesheets.iter().any(|s| s.contains(PRESET_PREFIX))
            || self.computed_primary.as_deref().is_some_and(|v| !v.trim().is_empty())
            || self.body_classes.iter().any(|c| c == "wp-site" || c == "wordpress")
            || self.wp_element_count > 0
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
