// SPDX-License-Identifier: MIT
//! Wave-derived palettes: one input color, ten harmonious variations.
//!
//! Every variation is a clamped offset on one HSL axis of the input:
//!
//! ```text
//!   fundamental   (h, s, l)                      the input itself
//!   octave        l + min(25, 100 - l)           lighter
//!   fifth         h + 60                         hue interval
//!   beat          s = max(20, s - 25)            desaturated
//!   overtone      l - min(30, l - 10)            darker, floor 10
//!   subtle        l = min(92, l + 35), s - 10    near-white tint
//!   soft          l = (l + octave.l) / 2, s - 15 hover
//!   bold          l = (l + overtone.l) / 2       active
//!   vivid         l = max(15, l - 40), s + 10    borders
//! ```
//!
//! Generation is a pure function of the normalized input, so the same
//! `(color, role)` always yields an identical [`WavePalette`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wb_color::{Hsl, normalize, normalize_hue};

// ─── Role ────────────────────────────────────────────────────────────────────

/// Semantic color roles. Only [`Role::Primary`] is seeded by the caller;
/// the other roles keep fixed, designed hues whatever the primary is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl Role {
    /// Lowercase role name as used in CSS variable names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a role from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|r| r.name() == lower).copied()
    }

    /// All roles in token order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Success,
            Self::Danger,
            Self::Warning,
            Self::Info,
        ]
    }

    /// The fixed seed color of a non-primary role.
    #[must_use]
    pub const fn seed(self) -> Option<Hsl> {
        let (h, s, l) = match self {
            Self::Primary => return None,
            Self::Secondary => (0.0, 0.0, 50.0),
            Self::Success => (142.0, 76.0, 36.0),
            Self::Danger => (0.0, 100.0, 45.0),
            Self::Warning => (45.0, 100.0, 50.0),
            Self::Info => (200.0, 100.0, 45.0),
        };
        Some(Hsl { h, s, l })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Shade ───────────────────────────────────────────────────────────────────

/// The five semantic variations exported per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    Base,
    Subtle,
    Soft,
    Bold,
    Vivid,
}

impl Shade {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Subtle => "subtle",
            Self::Soft => "soft",
            Self::Bold => "bold",
            Self::Vivid => "vivid",
        }
    }

    /// Suffix appended to `--color-{role}`; empty for the base shade.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Subtle => "-subtle",
            Self::Soft => "-soft",
            Self::Bold => "-bold",
            Self::Vivid => "-vivid",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Base, Self::Subtle, Self::Soft, Self::Bold, Self::Vivid]
    }
}

// ─── WavePalette ─────────────────────────────────────────────────────────────

/// The fixed-shape record derived from one input color.
///
/// Colors serialize as `hsl(h, s%, l%)` strings with whole-number
/// components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavePalette {
    pub fundamental: Hsl,
    pub octave: Hsl,
    pub fifth: Hsl,
    pub beat: Hsl,
    pub overtone: Hsl,
    /// Rounded input lightness, `0..=100`.
    pub amplitude: u8,
    /// Rounded input hue, `0..360`.
    pub frequency: u16,
    pub subtle: Hsl,
    pub soft: Hsl,
    pub bold: Hsl,
    pub vivid: Hsl,
    pub role: String,
    /// The color exactly as the caller supplied it.
    pub input: String,
}

impl WavePalette {
    /// Derive the palette from an already-normalized color.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hsl(base: Hsl, role: &str, input: &str) -> Self {
        let Hsl { h, s, l } = base;

        let octave_shift = (100.0 - l).min(25.0);
        let overtone_shift = (l - 10.0).min(30.0);

        Self {
            fundamental: base,
            octave: base.with_lightness(l + octave_shift),
            fifth: base.shift_hue(60.0),
            beat: base.with_saturation((s - 25.0).max(20.0)),
            overtone: base.with_lightness(l - overtone_shift),
            // Safe: `l` is within [0, 100] and the rounded hue within [0, 360).
            amplitude: l.round() as u8,
            frequency: normalize_hue(h.round()) as u16,
            subtle: Hsl::new(h, (s - 10.0).max(0.0), (l + 35.0).min(92.0)),
            soft: Hsl::new(h, (s - 15.0).max(0.0), ((l + (l + octave_shift)) / 2.0).round()),
            bold: base.with_lightness(((l + (l - overtone_shift)) / 2.0).round()),
            vivid: Hsl::new(h, (s + 10.0).min(100.0), (l - 40.0).max(15.0)),
            role: role.to_owned(),
            input: input.to_owned(),
        }
    }

    /// The color exported for `shade`; [`Shade::Base`] is the fundamental.
    #[must_use]
    pub const fn shade(&self, shade: Shade) -> Hsl {
        match shade {
            Shade::Base => self.fundamental,
            Shade::Subtle => self.subtle,
            Shade::Soft => self.soft,
            Shade::Bold => self.bold,
            Shade::Vivid => self.vivid,
        }
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Generate the wave-derived palette for `input` (hex or `hsl()`).
///
/// Unreadable input is logged and treated as neutral gray.
///
/// ```
/// use wb_theme::harmonic::generate;
///
/// let p = generate("hsl(226,100%,55%)", "primary");
/// assert_eq!(p.octave.to_string(), "hsl(226, 100%, 80%)");
/// ```
#[must_use]
pub fn generate(input: &str, role: &str) -> WavePalette {
    WavePalette::from_hsl(normalize(input), role, input)
}

/// Generate all six role palettes. `primary` seeds [`Role::Primary`]; the
/// other roles use their fixed seeds.
#[must_use]
pub fn generate_palettes(primary: &str) -> IndexMap<Role, WavePalette> {
    Role::all()
        .iter()
        .map(|&role| {
            let palette = match role.seed() {
                Some(seed) => WavePalette::from_hsl(seed, role.name(), &seed.to_string()),
                None => generate(primary, role.name()),
            };
            (role, palette)
        })
        .collect()
}

// ─── Wave Description ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Vivid,
    Muted,
}

/// Wave properties of a single color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDescription {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub brightness: Brightness,
    pub intensity: Intensity,
}

impl WaveDescription {
    /// `"{s}% saturation"`.
    #[must_use]
    pub fn chroma(&self) -> String {
        format!("{}% saturation", self.saturation)
    }

    /// `"hue angle {h}°"`.
    #[must_use]
    pub fn wavelength(&self) -> String {
        format!("hue angle {}°", self.hue)
    }

    /// `"lightness {l}%"`.
    #[must_use]
    pub fn amplitude(&self) -> String {
        format!("lightness {}%", self.lightness)
    }
}

/// Describe a color: light above 50% lightness, vivid above 50% saturation.
#[must_use]
pub fn describe(color: &str) -> WaveDescription {
    let Hsl { h, s, l } = normalize(color);
    WaveDescription {
        hue: h,
        saturation: s,
        lightness: l,
        brightness: if l > 50.0 { Brightness::Light } else { Brightness::Dark },
        intensity: if s > 50.0 { Intensity::Vivid } else { Intensity::Muted },
    }
}

// ─── Intervals ───────────────────────────────────────────────────────────────

/// The color half-way around the wheel.
#[must_use]
pub fn complement(color: &str) -> Hsl {
    normalize(color).complement()
}

/// Harmonic neighbours of a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analogous {
    /// 30° below the base.
    pub minor: Hsl,
    /// The base itself.
    pub perfect: Hsl,
    /// 60° above the base.
    pub major: Hsl,
}

#[must_use]
pub fn analogous(color: &str) -> Analogous {
    let base = normalize(color);
    Analogous {
        minor: base.shift_hue(-30.0),
        perfect: base,
        major: base.shift_hue(60.0),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
