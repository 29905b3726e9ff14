// SPDX-License-Identifier: MIT
//! Builder configuration.
//!
//! A config file is a *partial* document: it is read as a
//! [`ConfigOverlay`] and merged over [`WbConfig::default`]. The merge is a
//! typed deep merge. Leaves present in the overlay win, nested sections
//! merge recursively, and lists are replaced wholesale.
//!
//! ```toml
//! [tokens]
//! primary_color = "#c41e3a"
//!
//! [theme]
//! default_mode = "light"
//! available_modes = ["light", "dark"]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wb_theme::AnalysisOptions;

use crate::error::{ConfigError, Result};

/// The seed used when no primary color is configured (indigo).
pub const DEFAULT_PRIMARY: &str = "#6366f1";

// ─── ThemeMode ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    /// Follow the platform; token generation treats it as dark.
    Auto,
}

impl ThemeMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Look up a mode by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── WbConfig ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WbConfig {
    pub tokens: TokensConfig,
    pub analysis: AnalysisConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensConfig {
    /// Seed of the primary role, `#rrggbb` or `hsl(...)`.
    pub primary_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub exclude_neutrals: bool,
    pub neutral_threshold: f64,
    pub hue_tolerance: f64,
    pub sl_tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
    pub available_modes: Vec<ThemeMode>,
    /// CSS time, e.g. `0.3s`.
    pub transition_duration: String,
    /// CSS easing keyword or function.
    pub transition_easing: String,
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY.to_owned(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let options = AnalysisOptions::default();
        Self {
            exclude_neutrals: options.exclude_neutrals,
            neutral_threshold: options.neutral_threshold,
            hue_tolerance: options.hue_tolerance,
            sl_tolerance: options.sl_tolerance,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Dark,
            available_modes: vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto],
            transition_duration: "0.3s".to_owned(),
            transition_easing: "ease".to_owned(),
        }
    }
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(c: &AnalysisConfig) -> Self {
        Self {
            exclude_neutrals: c.exclude_neutrals,
            neutral_threshold: c.neutral_threshold,
            hue_tolerance: c.hue_tolerance,
            sl_tolerance: c.sl_tolerance,
        }
    }
}

impl ThemeConfig {
    /// Accept `mode` only if it is listed in `available_modes`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoModes`] or [`ConfigError::UnavailableMode`].
    pub fn check_mode(&self, mode: ThemeMode) -> Result<()> {
        if self.available_modes.is_empty() {
            return Err(ConfigError::NoModes.into());
        }
        if self.available_modes.contains(&mode) {
            return Ok(());
        }
        let available = self
            .available_modes
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ConfigError::UnavailableMode { mode, available }.into())
    }

    /// Value of `--transition-normal`.
    #[must_use]
    pub fn transition(&self) -> String {
        format!("all {} {}", self.transition_duration, self.transition_easing)
    }
}

impl WbConfig {
    /// Read a TOML file and merge it over the defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::Parse`] when it is not valid for the schema.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a (possibly partial) TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or mistyped values, and
    /// the errors of [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let overlay: ConfigOverlay = toml::from_str(text).map_err(ConfigError::from)?;
        let mut config = Self::default();
        config.merge(overlay);
        config.validate()?;
        Ok(config)
    }

    /// Check that the theme's default mode is one it makes available.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoModes`] for an empty `available_modes`,
    /// [`ConfigError::UnavailableMode`] when `default_mode` is not listed.
    pub fn validate(&self) -> Result<()> {
        self.theme.check_mode(self.theme.default_mode)
    }

    /// Apply an overlay in place.
    pub fn merge(&mut self, overlay: ConfigOverlay) {
        if let Some(tokens) = overlay.tokens {
            set(&mut self.tokens.primary_color, tokens.primary_color);
        }
        if let Some(analysis) = overlay.analysis {
            let a = &mut self.analysis;
            set(&mut a.exclude_neutrals, analysis.exclude_neutrals);
            set(&mut a.neutral_threshold, analysis.neutral_threshold);
            set(&mut a.hue_tolerance, analysis.hue_tolerance);
            set(&mut a.sl_tolerance, analysis.sl_tolerance);
        }
        if let Some(theme) = overlay.theme {
            let t = &mut self.theme;
            set(&mut t.default_mode, theme.default_mode);
            set(&mut t.available_modes, theme.available_modes);
            set(&mut t.transition_duration, theme.transition_duration);
            set(&mut t.transition_easing, theme.transition_easing);
        }
    }

    /// Serialize the full effective configuration.
    ///
    /// # Errors
    ///
    /// Never fails for this schema; the `Result` mirrors `toml`'s API.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[inline]
fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

// ─── Overlay ─────────────────────────────────────────────────────────────────

/// Partial [`WbConfig`]: every leaf optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub tokens: Option<TokensOverlay>,
    pub analysis: Option<AnalysisOverlay>,
    pub theme: Option<ThemeOverlay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokensOverlay {
    pub primary_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOverlay {
    pub exclude_neutrals: Option<bool>,
    pub neutral_threshold: Option<f64>,
    pub hue_tolerance: Option<f64>,
    pub sl_tolerance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverlay {
    pub default_mode: Option<ThemeMode>,
    pub available_modes: Option<Vec<ThemeMode>>,
    pub transition_duration: Option<String>,
    pub transition_easing: Option<String>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults() {
        let c = WbConfig::default();
        assert_eq!(c.tokens.primary_color, "#6366f1");
        assert_eq!(c.theme.default_mode, ThemeMode::Dark);
        assert_eq!(c.theme.transition(), "all 0.3s ease");
        assert_eq!(AnalysisOptions::from(&c.analysis), AnalysisOptions::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(WbConfig::from_toml_str("").unwrap(), WbConfig::default());
    }

    #[test]
    fn overlay_overrides_leaves_only() {
        let c = WbConfig::from_toml_str(
            r#"
            [analysis]
            hue_tolerance = 20.0

            [theme]
            transition_easing = "ease-in-out"
            "#,
        )
        .unwrap();
        assert_eq!(c.analysis.hue_tolerance, 20.0);
        assert_eq!(c.analysis.sl_tolerance, 10.0);
        assert!(c.analysis.exclude_neutrals);
        assert_eq!(c.theme.transition(), "all 0.3s ease-in-out");
        assert_eq!(c.tokens, TokensConfig::default());
    }

    #[test]
    fn lists_are_replaced_not_appended() {
        let mut c = WbConfig::default();
        c.merge(ConfigOverlay {
            theme: Some(ThemeOverlay {
                available_modes: Some(vec![ThemeMode::Dark]),
                ..ThemeOverlay::default()
            }),
            ..ConfigOverlay::default()
        });
        assert_eq!(c.theme.available_modes, vec![ThemeMode::Dark]);
    }

    #[test]
    fn default_mode_must_be_available() {
        let err = WbConfig::from_toml_str(
            r#"
            [theme]
            default_mode = "light"
            available_modes = ["dark", "auto"]
            "#,
        )
        .unwrap_err();
        assert!(
            matches!(
                err,
                TokenError::Config(ConfigError::UnavailableMode {
                    mode: ThemeMode::Light,
                    ref available,
                }) if available == "dark, auto"
            ),
            "{err}"
        );
    }

    #[test]
    fn empty_mode_list_is_rejected() {
        let err = WbConfig::from_toml_str("[theme]\navailable_modes = []\n").unwrap_err();
        assert!(matches!(err, TokenError::Config(ConfigError::NoModes)), "{err}");
    }

    #[test]
    fn restricted_modes_accept_listed_default() {
        let c = WbConfig::from_toml_str(
            r#"
            [theme]
            default_mode = "light"
            available_modes = ["light"]
            "#,
        )
        .unwrap();
        assert_eq!(c.theme.default_mode, ThemeMode::Light);
        assert!(c.theme.check_mode(ThemeMode::Dark).is_err());
    }

    #[test]
    fn later_overlays_win() {
        let mut c = WbConfig::default();
        for color in ["#000001", "#000002"] {
            c.merge(ConfigOverlay {
                tokens: Some(TokensOverlay {
                    primary_color: Some(color.to_owned()),
                }),
                ..ConfigOverlay::default()
            });
        }
        assert_eq!(c.tokens.primary_color, "#000002");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = WbConfig::from_toml_str("[tokens]\nprimary = \"#fff\"\n").unwrap_err();
        assert!(matches!(err, TokenError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn mistyped_mode_is_rejected() {
        assert!(WbConfig::from_toml_str("[theme]\ndefault_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tokens]\nprimary_color = \"#c41e3a\"").unwrap();
        let c = WbConfig::load(file.path()).unwrap();
        assert_eq!(c.tokens.primary_color, "#c41e3a");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = WbConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn effective_config_roundtrips_through_toml() {
        let c = WbConfig::default();
        let text = c.to_toml_string().unwrap();
        assert_eq!(WbConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn auto_mode_generates_dark_tokens() {
        assert!(ThemeMode::Auto.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
