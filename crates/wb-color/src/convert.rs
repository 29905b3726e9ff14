// SPDX-License-Identifier: MIT
//
// Converter entry points used by the palette and token layers.
//
// `hex_to_hsl` and `normalize` are deliberately infallible: they log the
// bad input and hand back neutral gray. Palette generation calls them on
// every seed color and must keep going when one of them is garbage.

use tracing::warn;

use crate::error::Result;
use crate::hsl::Hsl;
use crate::rgb::Rgb;

/// Convert `#rrggbb` to HSL rounded to whole degrees and percents.
///
/// Malformed input (wrong length, non-hex characters) logs a warning and
/// returns [`Hsl::NEUTRAL_GRAY`].
///
/// ```
/// use wb_color::hex_to_hsl;
///
/// assert_eq!(hex_to_hsl("#6366f1").to_string(), "hsl(239, 84%, 67%)");
/// assert_eq!(hex_to_hsl("not a color").to_string(), "hsl(0, 0%, 50%)");
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.to_hsl().rounded(),
        Err(err) => {
            warn!(input = hex, error = %err, "malformed hex color, using neutral gray");
            Hsl::NEUTRAL_GRAY
        }
    }
}

/// Convert an HSL triple to lowercase `#rrggbb`.
///
/// Out-of-range components are normalized first (hue wraps, percentages
/// clamp), so any finite input yields a valid hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Parse a color given either as `#rrggbb` or as `hsl(h, s%, l%)`.
///
/// Hex input is converted and rounded exactly like [`hex_to_hsl`], so a
/// hex seed and its formatted HSL string produce the same triple.
///
/// # Errors
///
/// Returns the strict parser's error for the notation the input looks like:
/// [`ColorError::InvalidHsl`](crate::ColorError::InvalidHsl) when it starts
/// with `hsl`, [`ColorError::InvalidHex`](crate::ColorError::InvalidHex)
/// otherwise.
pub fn parse_color(input: &str) -> Result<Hsl> {
    let trimmed = input.trim();
    if trimmed.starts_with("hsl") {
        Hsl::parse(trimmed)
    } else {
        Rgb::from_hex(trimmed).map(|rgb| rgb.to_hsl().rounded())
    }
}

/// Lenient [`parse_color`]: unreadable input logs a warning and yields
/// [`Hsl::NEUTRAL_GRAY`].
#[must_use]
pub fn normalize(input: &str) -> Hsl {
    parse_color(input).unwrap_or_else(|err| {
        warn!(input, error = %err, "unreadable color, using neutral gray");
        Hsl::NEUTRAL_GRAY
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
