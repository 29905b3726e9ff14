// SPDX-License-Identifier: MIT
//
// HSL: the color space every palette derivation is expressed in.
//
// Hue is an angle in degrees and wraps; saturation and lightness are
// percentages clamped to [0, 100]. Values stay floating point during
// derivation and are rounded to whole numbers only when formatted as
// `hsl(h, s%, l%)`.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};
use crate::rgb::{Rgb, to_u8};

/// `hsl(h, s%, l%)` with optional whitespace, decimals and a `deg` unit.
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d+(?:\.\d+)?)(?:deg)?\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$")
        .expect("HSL pattern is a valid regex")
});

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color as hue (degrees), saturation (%) and lightness (%).
///
/// Construction through [`Hsl::new`] normalizes the triple: hue is wrapped
/// into `[0, 360)`, saturation and lightness are clamped into `[0, 100]`.
/// Every operation on this type preserves that invariant.
///
/// ```
/// use wb_color::Hsl;
///
/// let blue = Hsl::parse("hsl(226, 100%, 55%)").unwrap();
/// assert_eq!(blue.to_string(), "hsl(226, 100%, 55%)");
/// assert_eq!(blue.shift_hue(180.0).to_string(), "hsl(46, 100%, 55%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation percent, `[0, 100]`.
    pub s: f64,
    /// Lightness percent, `[0, 100]`.
    pub l: f64,
}

impl Hsl {
    /// The fallback for unreadable input: `hsl(0, 0%, 50%)`.
    pub const NEUTRAL_GRAY: Self = Self { h: 0.0, s: 0.0, l: 50.0 };

    /// Build a normalized HSL triple.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Parse `hsl(h, s%, l%)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHsl`] when the string does not match the
    /// functional notation.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let caps = HSL_PATTERN.captures(trimmed).ok_or_else(|| ColorError::hsl(s))?;
        let component = |i: usize| -> Result<f64> {
            caps[i].parse::<f64>().map_err(|_| ColorError::hsl(s))
        };
        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }

    /// Round every component to a whole number, wrapping a hue that rounds
    /// up to 360 back to 0.
    #[must_use]
    pub fn rounded(self) -> Self {
        // `+ 0.0` folds a negative zero into positive zero.
        Self {
            h: normalize_hue(self.h.round()) + 0.0,
            s: self.s.round() + 0.0,
            l: self.l.round() + 0.0,
        }
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Uses the piecewise-linear channel function
    /// `f(n) = l - a * max(min(k - 3, 9 - k, 1), -1)` with
    /// `k = (n + h / 30) mod 12` and `a = s * min(l, 1 - l)`.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + self.h / 30.0) % 12.0;
            l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };
        Rgb::new(to_u8(channel(0.0)), to_u8(channel(8.0)), to_u8(channel(4.0)))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    // ─── Adjustments ─────────────────────────────────────────────────────
    //
    // All adjustments return a new normalized value.

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Replace the hue.
    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Replace the saturation (clamped).
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Replace the lightness (clamped).
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// The color 180° around the wheel.
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Whether saturation is at or below `threshold` percent.
    #[must_use]
    pub fn is_neutral(self, threshold: f64) -> bool {
        self.s <= threshold
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::NEUTRAL_GRAY
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-17 + 360.0 rounds to exactly 360.0.
    if h >= 360.0 { 0.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel), in `[0, 180]`.
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn new_wraps_hue() {
        assert!(approx_eq(Hsl::new(420.0, 50.0, 50.0).h, 60.0, 1e-9));
        assert!(approx_eq(Hsl::new(-30.0, 50.0, 50.0).h, 330.0, 1e-9));
        assert!(approx_eq(Hsl::new(360.0, 50.0, 50.0).h, 0.0, 1e-9));
    }

    #[test]
    fn new_clamps_percentages() {
        let c = Hsl::new(0.0, 140.0, -12.0);
        assert!(approx_eq(c.s, 100.0, 1e-9));
        assert!(approx_eq(c.l, 0.0, 1e-9));
    }

    #[test]
    fn nan_components_collapse_to_zero() {
        let c = Hsl::new(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(c, Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn rounding_wraps_full_circle() {
        let c = Hsl::new(359.7, 40.4, 40.5).rounded();
        assert!(approx_eq(c.h, 0.0, 1e-9));
        assert!(approx_eq(c.s, 40.0, 1e-9));
        assert!(approx_eq(c.l, 41.0, 1e-9));
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_canonical_form() {
        assert_eq!(Hsl::parse("hsl(142, 76%, 36%)").unwrap(), Hsl::new(142.0, 76.0, 36.0));
    }

    #[test]
    fn parses_without_spaces() {
        assert_eq!(Hsl::parse("hsl(226,100%,55%)").unwrap(), Hsl::new(226.0, 100.0, 55.0));
    }

    #[test]
    fn parses_decimals_and_deg_unit() {
        let c = Hsl::parse("hsl(12.5deg, 40.25%, 60.75%)").unwrap();
        assert!(approx_eq(c.h, 12.5, 1e-9));
        assert!(approx_eq(c.s, 40.25, 1e-9));
        assert!(approx_eq(c.l, 60.75, 1e-9));
    }

    #[test]
    fn rejects_missing_percent_signs() {
        assert!(Hsl::parse("hsl(10, 20, 30)").is_err());
    }

    #[test]
    fn rejects_other_notations() {
        assert!(Hsl::parse("rgb(1, 2, 3)").is_err());
        assert!(Hsl::parse("#ffffff").is_err());
        assert!(Hsl::parse("").is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_parse() {
        let c = Hsl::parse("hsl(400, 150%, 50%)").unwrap();
        assert!(approx_eq(c.h, 40.0, 1e-9));
        assert!(approx_eq(c.s, 100.0, 1e-9));
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn display_rounds_components() {
        assert_eq!(Hsl::new(238.7, 83.5, 66.67).to_string(), "hsl(239, 84%, 67%)");
    }

    #[test]
    fn display_parse_roundtrip() {
        let c = Hsl::new(200.0, 100.0, 45.0);
        assert_eq!(Hsl::parse(&c.to_string()).unwrap(), c);
    }

    // ── RGB Conversion ───────────────────────────────────────────────────

    #[test]
    fn pure_red_to_rgb() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn gray_to_rgb() {
        assert_eq!(Hsl::NEUTRAL_GRAY.to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn black_and_white_to_hex() {
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
    }

    #[test]
    fn vivid_cyan_blue_roundtrip() {
        let rgb = Rgb::new(6, 147, 227);
        assert_eq!(rgb.to_hsl().to_rgb(), rgb);
    }

    // ── Adjustments ──────────────────────────────────────────────────────

    #[test]
    fn complement_is_180_degrees() {
        let c = Hsl::new(30.0, 50.0, 50.0).complement();
        assert!(approx_eq(c.h, 210.0, 1e-9));
    }

    #[test]
    fn with_lightness_clamps() {
        assert!(approx_eq(Hsl::new(0.0, 0.0, 90.0).with_lightness(130.0).l, 100.0, 1e-9));
    }

    #[test]
    fn neutral_threshold_is_inclusive() {
        assert!(Hsl::new(0.0, 15.0, 50.0).is_neutral(15.0));
        assert!(!Hsl::new(0.0, 15.5, 50.0).is_neutral(15.0));
    }

    // ── Hue Distance ─────────────────────────────────────────────────────

    #[test]
    fn hue_distance_takes_short_arc() {
        assert!(approx_eq(hue_distance(350.0, 10.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(10.0, 350.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0, 1e-9));
    }
}
