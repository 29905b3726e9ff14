// SPDX-License-Identifier: MIT
//! Typed CSS custom property names.
//!
//! Every key consuming stylesheets depend on is a variant here, so a
//! misspelt token is a compile error rather than a silently missing
//! variable. [`TokenName::Custom`] is the escape hatch for user-defined
//! keys; parsing always prefers the typed variants, so a custom name can
//! never shadow a known one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use wb_theme::{Role, Shade};

use crate::config::ThemeMode;
use crate::error::{Result, TokenError};

// ─── TokenGroup ──────────────────────────────────────────────────────────────

bitflags! {
    /// Token families, for filtered exports.
    ///
    /// ```
    /// use wb_tokens::TokenGroup;
    ///
    /// let surfaces = TokenGroup::TEXT | TokenGroup::BACKGROUND;
    /// assert!(surfaces.contains(TokenGroup::TEXT));
    /// assert!(!surfaces.contains(TokenGroup::COLOR));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenGroup: u16 {
        /// `--color-{role}[-{shade}]`.
        const COLOR      = 1 << 0;
        const TEXT       = 1 << 1;
        const BACKGROUND = 1 << 2;
        const BORDER     = 1 << 3;
        const SHADOW     = 1 << 4;
        const SPACING    = 1 << 5;
        /// Font families, sizes and weights.
        const TYPOGRAPHY = 1 << 6;
        const TRANSITION = 1 << 7;
        const RADIUS     = 1 << 8;
        const Z_INDEX    = 1 << 9;
        const OPACITY    = 1 << 10;
        const CUSTOM     = 1 << 11;
    }
}

impl TokenGroup {
    /// Look up one group by its lowercase name or alias (`z-index`, `bg`, …).
    ///
    /// Unlike the generated `from_name`, this is case-insensitive and
    /// accepts the short aliases.
    #[must_use]
    pub fn from_group_name(name: &str) -> Option<Self> {
        Some(match name.trim().to_lowercase().as_str() {
            "color" | "colors" => Self::COLOR,
            "text" => Self::TEXT,
            "background" | "bg" => Self::BACKGROUND,
            "border" => Self::BORDER,
            "shadow" => Self::SHADOW,
            "spacing" => Self::SPACING,
            "typography" | "font" => Self::TYPOGRAPHY,
            "transition" => Self::TRANSITION,
            "radius" => Self::RADIUS,
            "z-index" | "z" => Self::Z_INDEX,
            "opacity" => Self::OPACITY,
            "custom" => Self::CUSTOM,
            _ => return None,
        })
    }

    /// Parse a comma-separated list of group names.
    ///
    /// # Errors
    ///
    /// Returns the first unrecognized name.
    pub fn parse_list(list: &str) -> std::result::Result<Self, String> {
        list.split(',')
            .filter(|part| !part.trim().is_empty())
            .try_fold(Self::empty(), |acc, part| {
                Self::from_group_name(part).map(|g| acc | g).ok_or_else(|| part.trim().to_owned())
            })
    }
}

// ─── FixedToken ──────────────────────────────────────────────────────────────

/// Every non-derived token: surface colors, shadows and the static
/// spacing/typography/motion block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixedToken {
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    TextPrimaryInverse,
    TextSecondaryInverse,
    BgPrimary,
    BgSecondary,
    BgTertiary,
    BgActive,
    BorderPrimary,
    BorderSecondary,
    BorderTertiary,
    ShadowColor,
    ShadowSm,
    ShadowMd,
    ShadowLg,
    SpacingXs,
    SpacingSm,
    SpacingMd,
    SpacingLg,
    SpacingXl,
    Spacing2xl,
    FontFamilyBase,
    FontFamilyMono,
    FontSizeXs,
    FontSizeSm,
    FontSizeBase,
    FontSizeLg,
    FontSizeXl,
    FontSize2xl,
    FontSize3xl,
    FontWeightLight,
    FontWeightNormal,
    FontWeightMedium,
    FontWeightSemibold,
    FontWeightBold,
    TransitionFast,
    TransitionNormal,
    TransitionSlow,
    RadiusSm,
    RadiusMd,
    RadiusLg,
    RadiusXl,
    RadiusFull,
    ZDropdown,
    ZModal,
    ZToast,
    ZTooltip,
    OpacityDisabled,
    OpacityHover,
    OpacityFocus,
}

impl FixedToken {
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::TextPrimary => "--text-primary",
            Self::TextSecondary => "--text-secondary",
            Self::TextTertiary => "--text-tertiary",
            Self::TextDisabled => "--text-disabled",
            Self::TextPrimaryInverse => "--text-primary-inverse",
            Self::TextSecondaryInverse => "--text-secondary-inverse",
            Self::BgPrimary => "--bg-primary",
            Self::BgSecondary => "--bg-secondary",
            Self::BgTertiary => "--bg-tertiary",
            Self::BgActive => "--bg-active",
            Self::BorderPrimary => "--border-primary",
            Self::BorderSecondary => "--border-secondary",
            Self::BorderTertiary => "--border-tertiary",
            Self::ShadowColor => "--shadow-color",
            Self::ShadowSm => "--shadow-sm",
            Self::ShadowMd => "--shadow-md",
            Self::ShadowLg => "--shadow-lg",
            Self::SpacingXs => "--spacing-xs",
            Self::SpacingSm => "--spacing-sm",
            Self::SpacingMd => "--spacing-md",
            Self::SpacingLg => "--spacing-lg",
            Self::SpacingXl => "--spacing-xl",
            Self::Spacing2xl => "--spacing-2xl",
            Self::FontFamilyBase => "--font-family-base",
            Self::FontFamilyMono => "--font-family-mono",
            Self::FontSizeXs => "--font-size-xs",
            Self::FontSizeSm => "--font-size-sm",
            Self::FontSizeBase => "--font-size-base",
            Self::FontSizeLg => "--font-size-lg",
            Self::FontSizeXl => "--font-size-xl",
            Self::FontSize2xl => "--font-size-2xl",
            Self::FontSize3xl => "--font-size-3xl",
            Self::FontWeightLight => "--font-weight-light",
            Self::FontWeightNormal => "--font-weight-normal",
            Self::FontWeightMedium => "--font-weight-medium",
            Self::FontWeightSemibold => "--font-weight-semibold",
            Self::FontWeightBold => "--font-weight-bold",
            Self::TransitionFast => "--transition-fast",
            Self::TransitionNormal => "--transition-normal",
            Self::TransitionSlow => "--transition-slow",
            Self::RadiusSm => "--radius-sm",
            Self::RadiusMd => "--radius-md",
            Self::RadiusLg => "--radius-lg",
            Self::RadiusXl => "--radius-xl",
            Self::RadiusFull => "--radius-full",
            Self::ZDropdown => "--z-dropdown",
            Self::ZModal => "--z-modal",
            Self::ZToast => "--z-toast",
            Self::ZTooltip => "--z-tooltip",
            Self::OpacityDisabled => "--opacity-disabled",
            Self::OpacityHover => "--opacity-hover",
            Self::OpacityFocus => "--opacity-focus",
        }
    }

    #[must_use]
    pub const fn group(self) -> TokenGroup {
        match self {
            Self::TextPrimary
            | Self::TextSecondary
            | Self::TextTertiary
            | Self::TextDisabled
            | Self::TextPrimaryInverse
            | Self::TextSecondaryInverse => TokenGroup::TEXT,
            Self::BgPrimary | Self::BgSecondary | Self::BgTertiary | Self::BgActive => TokenGroup::BACKGROUND,
            Self::BorderPrimary | Self::BorderSecondary | Self::BorderTertiary => TokenGroup::BORDER,
            Self::ShadowColor | Self::ShadowSm | Self::ShadowMd | Self::ShadowLg => TokenGroup::SHADOW,
            Self::SpacingXs
            | Self::SpacingSm
            | Self::SpacingMd
            | Self::SpacingLg
            | Self::SpacingXl
            | Self::Spacing2xl => TokenGroup::SPACING,
            Self::FontFamilyBase
            | Self::FontFamilyMono
            | Self::FontSizeXs
            | Self::FontSizeSm
            | Self::FontSizeBase
            | Self::FontSizeLg
            | Self::FontSizeXl
            | Self::FontSize2xl
            | Self::FontSize3xl
            | Self::FontWeightLight
            | Self::FontWeightNormal
            | Self::FontWeightMedium
            | Self::FontWeightSemibold
            | Self::FontWeightBold => TokenGroup::TYPOGRAPHY,
            Self::TransitionFast | Self::TransitionNormal | Self::TransitionSlow => TokenGroup::TRANSITION,
            Self::RadiusSm | Self::RadiusMd | Self::RadiusLg | Self::RadiusXl | Self::RadiusFull => {
                TokenGroup::RADIUS
            }
            Self::ZDropdown | Self::ZModal | Self::ZToast | Self::ZTooltip => TokenGroup::Z_INDEX,
            Self::OpacityDisabled | Self::OpacityHover | Self::OpacityFocus => TokenGroup::OPACITY,
        }
    }

    /// Gray lightness (%) of the neutral surface tokens in dark mode.
    const fn surface_lightness(self) -> Option<u8> {
        Some(match self {
            Self::TextPrimary => 100,
            Self::TextSecondary => 80,
            Self::TextTertiary => 60,
            Self::TextDisabled => 40,
            Self::TextPrimaryInverse => 0,
            Self::TextSecondaryInverse => 20,
            Self::BgPrimary => 10,
            Self::BgSecondary => 15,
            Self::BgTertiary | Self::BorderSecondary => 22,
            Self::BgActive | Self::BorderPrimary => 30,
            Self::BorderTertiary => 40,
            _ => return None,
        })
    }

    /// Whether this token belongs to the derived-color half of the map
    /// (surface colors and shadows) rather than the static block.
    #[must_use]
    pub const fn is_surface(self) -> bool {
        const SURFACE: TokenGroup = TokenGroup::TEXT
            .union(TokenGroup::BACKGROUND)
            .union(TokenGroup::BORDER)
            .union(TokenGroup::SHADOW);
        self.group().intersects(SURFACE)
    }

    /// Default value. Light mode mirrors the lightness of the neutral
    /// surface colors; every other token is mode-independent.
    #[must_use]
    pub fn value(self, mode: ThemeMode) -> String {
        if let Some(l) = self.surface_lightness() {
            let l = if mode.is_dark() { l } else { 100 - l };
            return format!("hsl(0, 0%, {l}%)");
        }
        self.static_value().to_owned()
    }

    const fn static_value(self) -> &'static str {
        match self {
            Self::ShadowColor => "rgba(0, 0, 0, 0.3)",
            Self::ShadowSm => "0 1px 2px rgba(0, 0, 0, 0.3)",
            Self::ShadowMd => "0 4px 6px rgba(0, 0, 0, 0.3)",
            Self::ShadowLg => "0 10px 15px rgba(0, 0, 0, 0.3)",
            Self::SpacingXs => "0.25rem",
            Self::SpacingSm => "0.5rem",
            Self::SpacingMd | Self::FontSizeLg => "1rem",
            Self::SpacingLg | Self::FontSize2xl => "1.5rem",
            Self::SpacingXl | Self::FontSize3xl => "2rem",
            Self::Spacing2xl => "3rem",
            Self::FontFamilyBase => "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'Helvetica Neue', sans-serif",
            Self::FontFamilyMono => "'Courier New', 'Monaco', monospace",
            Self::FontSizeXs => "0.625rem",
            Self::FontSizeSm => "0.75rem",
            Self::FontSizeBase => "0.875rem",
            Self::FontSizeXl => "1.25rem",
            Self::FontWeightLight => "300",
            Self::FontWeightNormal => "400",
            Self::FontWeightMedium => "500",
            Self::FontWeightSemibold => "600",
            Self::FontWeightBold => "700",
            Self::TransitionFast => "all 0.15s ease",
            Self::TransitionNormal => "all 0.3s ease",
            Self::TransitionSlow => "all 0.5s ease",
            Self::RadiusSm => "4px",
            Self::RadiusMd => "6px",
            Self::RadiusLg => "8px",
            Self::RadiusXl => "12px",
            Self::RadiusFull => "9999px",
            Self::ZDropdown => "100",
            Self::ZModal => "200",
            Self::ZToast => "300",
            Self::ZTooltip => "400",
            Self::OpacityDisabled => "0.5",
            Self::OpacityHover => "0.8",
            Self::OpacityFocus => "0.9",
            // Surface colors are computed in `value`.
            _ => "",
        }
    }

    /// All fixed tokens in export order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TextPrimary, Self::TextSecondary, Self::TextTertiary,
            Self::TextDisabled, Self::TextPrimaryInverse, Self::TextSecondaryInverse,
            Self::BgPrimary, Self::BgSecondary, Self::BgTertiary, Self::BgActive,
            Self::BorderPrimary, Self::BorderSecondary, Self::BorderTertiary,
            Self::ShadowColor, Self::ShadowSm, Self::ShadowMd, Self::ShadowLg,
            Self::SpacingXs, Self::SpacingSm, Self::SpacingMd,
            Self::SpacingLg, Self::SpacingXl, Self::Spacing2xl,
            Self::FontFamilyBase, Self::FontFamilyMono,
            Self::FontSizeXs, Self::FontSizeSm, Self::FontSizeBase, Self::FontSizeLg,
            Self::FontSizeXl, Self::FontSize2xl, Self::FontSize3xl,
            Self::FontWeightLight, Self::FontWeightNormal, Self::FontWeightMedium,
            Self::FontWeightSemibold, Self::FontWeightBold,
            Self::TransitionFast, Self::TransitionNormal, Self::TransitionSlow,
            Self::RadiusSm, Self::RadiusMd, Self::RadiusLg, Self::RadiusXl, Self::RadiusFull,
            Self::ZDropdown, Self::ZModal, Self::ZToast, Self::ZTooltip,
            Self::OpacityDisabled, Self::OpacityHover, Self::OpacityFocus,
        ]
    }
}

// ─── TokenName ───────────────────────────────────────────────────────────────

/// A validated user-defined token name (`--` followed by letters, digits,
/// `-` or `_`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomName(String);

impl CustomName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(name: &str) -> bool {
        name.strip_prefix("--").is_some_and(|ident| {
            !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
    }
}

/// A CSS custom property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenName {
    /// `--color-{role}` plus the shade suffix.
    Color(Role, Shade),
    Fixed(FixedToken),
    Custom(CustomName),
}

/// CSS name → typed name for every known token.
static KNOWN: LazyLock<HashMap<String, TokenName>> =
    LazyLock::new(|| TokenName::known().map(|name| (name.to_string(), name)).collect());

impl TokenName {
    /// Parse a CSS variable name. Known names always resolve to the typed
    /// variants.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidName`] when the name is neither known nor a
    /// valid custom property name.
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(known) = KNOWN.get(name) {
            return Ok(known.clone());
        }
        if CustomName::is_valid(name) {
            Ok(Self::Custom(CustomName(name.to_owned())))
        } else {
            Err(TokenError::InvalidName { name: name.to_owned() })
        }
    }

    /// Every typed token name, colors first (role by role), then the fixed
    /// block.
    pub fn known() -> impl Iterator<Item = Self> {
        let colors = Role::all()
            .iter()
            .flat_map(|&role| Shade::all().iter().map(move |&shade| Self::Color(role, shade)));
        colors.chain(FixedToken::all().iter().map(|&t| Self::Fixed(t)))
    }

    #[must_use]
    pub const fn group(&self) -> TokenGroup {
        match self {
            Self::Color(..) => TokenGroup::COLOR,
            Self::Fixed(t) => t.group(),
            Self::Custom(_) => TokenGroup::CUSTOM,
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(role, shade) => write!(f, "--color-{}{}", role.name(), shade.suffix()),
            Self::Fixed(t) => f.write_str(t.css_name()),
            Self::Custom(c) => f.write_str(c.as_str()),
        }
    }
}

impl FromStr for TokenName {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<FixedToken> for TokenName {
    fn from(t: FixedToken) -> Self {
        Self::Fixed(t)
    }
}

impl Serialize for TokenName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
