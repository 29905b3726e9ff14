// SPDX-License-Identifier: MIT
//! Generate the design-token set from one primary color and apply it.
//!
//! ```text
//!   primary ─▶ generate_palettes ─▶ 6 roles × 5 shades ─┐
//!                                   surface + shadows ──┼─▶ color_tokens ─┐
//!                                                       │                 ├─▶ tokens ─▶ StyleTarget
//!                       spacing / type / motion / … ────┴─▶ static_tokens ┘      │
//!                                                                                ▼
//!                                                                        TokenBus (events)
//! ```

use tokio::sync::broadcast;
use tracing::{debug, error, info};
use wb_theme::generate_palettes;

use crate::config::{DEFAULT_PRIMARY, ThemeMode, WbConfig};
use crate::error::Result;
use crate::event::{InjectorId, TokenBus, TokenEvent};
use crate::map::TokenMap;
use crate::name::{FixedToken, Shade, TokenGroup, TokenName};
use crate::target::{StyleTarget, ensure_stylable};

#[derive(Debug, Clone)]
pub struct TokenInjector {
    id: InjectorId,
    primary_color: String,
    mode: ThemeMode,
    /// Role shades plus the surface colors and shadows.
    color_tokens: TokenMap,
    /// Spacing, typography, transitions, radii, z-index, opacity.
    static_tokens: TokenMap,
    /// What gets applied: `color_tokens` then `static_tokens`, plus any
    /// later updates.
    tokens: TokenMap,
    bus: TokenBus,
}

impl Default for TokenInjector {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY)
    }
}

impl TokenInjector {
    /// Dark-mode token set seeded by `primary_color` (hex or `hsl()`).
    #[must_use]
    pub fn new(primary_color: &str) -> Self {
        Self::with_mode(primary_color, ThemeMode::Dark)
    }

    #[must_use]
    pub fn with_mode(primary_color: &str, mode: ThemeMode) -> Self {
        Self::build(primary_color, mode, None)
    }

    /// Seed, mode and transition timing from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &WbConfig) -> Self {
        Self::build(
            &config.tokens.primary_color,
            config.theme.default_mode,
            Some(config.theme.transition()),
        )
    }

    /// Publish on a shared bus instead of a private one.
    #[must_use]
    pub fn with_bus(mut self, bus: TokenBus) -> Self {
        self.bus = bus;
        self
    }

    fn build(primary_color: &str, mode: ThemeMode, transition: Option<String>) -> Self {
        let color_tokens = color_tokens(primary_color, mode);
        let mut static_tokens: TokenMap = FixedToken::all()
            .iter()
            .filter(|t| !t.is_surface())
            .map(|&t| (TokenName::Fixed(t), t.value(mode)))
            .collect();
        if let Some(transition) = transition {
            static_tokens.insert(FixedToken::TransitionNormal.into(), transition);
        }

        let mut tokens = color_tokens.clone();
        tokens.extend(static_tokens.iter().map(|(k, v)| (k.clone(), v.to_owned())));

        let id = InjectorId::next();
        debug!(%id, primary = primary_color, %mode, count = tokens.len(), "generated token set");
        Self {
            id,
            primary_color: primary_color.to_owned(),
            mode,
            color_tokens,
            static_tokens,
            tokens,
            bus: TokenBus::new(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    #[must_use]
    pub const fn id(&self) -> InjectorId {
        self.id
    }

    #[must_use]
    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub const fn color_tokens(&self) -> &TokenMap {
        &self.color_tokens
    }

    #[must_use]
    pub const fn static_tokens(&self) -> &TokenMap {
        &self.static_tokens
    }

    /// The merged map that [`inject`](Self::inject) applies.
    #[must_use]
    pub const fn get_tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// Value of the token called `name`, or `None` if there is none.
    #[must_use]
    pub fn get_token(&self, name: &str) -> Option<&str> {
        self.tokens.get_str(name)
    }

    #[must_use]
    pub fn get(&self, name: &TokenName) -> Option<&str> {
        self.tokens.get(name)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TokenEvent> {
        self.bus.subscribe()
    }

    #[must_use]
    pub const fn bus(&self) -> &TokenBus {
        &self.bus
    }

    // ─── Application ─────────────────────────────────────────────────────────

    /// Write every token onto `target` as an inline custom property, then
    /// publish [`TokenEvent::Injected`].
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidTarget`](crate::TokenError::InvalidTarget) if
    /// `target` is not an element. Nothing is written in that case.
    pub fn inject(&self, target: &mut dyn StyleTarget) -> Result<()> {
        ensure_stylable(target)?;
        for (name, value) in self.tokens.iter() {
            target.set_property(&name.to_string(), value);
        }
        info!(injector = %self.id, count = self.tokens.len(), "design tokens injected");
        self.bus.publish(TokenEvent::Injected {
            injector: self.id,
            tokens: self.tokens.clone(),
        });
        Ok(())
    }

    /// Set one token, apply it to `target` and publish
    /// [`TokenEvent::Updated`].
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidName`](crate::TokenError::InvalidName) for a
    /// name that is not a CSS custom property,
    /// [`TokenError::InvalidTarget`](crate::TokenError::InvalidTarget) for a
    /// non-element target. The token map is unchanged on error.
    pub fn update_token(&mut self, name: &str, value: &str, target: &mut dyn StyleTarget) -> Result<()> {
        let name = TokenName::parse(name)?;
        ensure_stylable(target)?;
        self.tokens.insert(name.clone(), value);
        target.set_property(&name.to_string(), value);
        debug!(injector = %self.id, %name, value, "token updated");
        self.bus.publish(TokenEvent::Updated {
            name,
            value: value.to_owned(),
        });
        Ok(())
    }

    // ─── Export ──────────────────────────────────────────────────────────────

    /// The whole token set as a `:root { ... }` block.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        self.tokens.to_css()
    }

    #[must_use]
    pub fn to_css_string_filtered(&self, groups: TokenGroup) -> String {
        self.tokens.to_css_filtered(groups)
    }

    /// Pretty-printed JSON snapshot of the token map.
    ///
    /// # Errors
    ///
    /// [`TokenError::Snapshot`](crate::TokenError::Snapshot) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tokens)?)
    }

    /// Restore a snapshot over the default token set. Snapshot values win;
    /// names it omits keep their defaults, and new names are appended.
    ///
    /// # Errors
    ///
    /// [`TokenError::Snapshot`](crate::TokenError::Snapshot) for anything
    /// but a flat object of valid names to strings.
    pub fn try_from_json(json: &str) -> Result<Self> {
        let tokens: TokenMap = serde_json::from_str(json)?;
        let mut injector = Self::default();
        debug!(injector = %injector.id, count = tokens.len(), "restoring token snapshot");
        injector.tokens.extend(tokens);
        Ok(injector)
    }

    /// Like [`try_from_json`](Self::try_from_json), but a corrupt snapshot
    /// is logged and yields the default token set.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self::try_from_json(json).unwrap_or_else(|err| {
            error!(%err, "corrupt token snapshot, falling back to defaults");
            Self::default()
        })
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

fn color_tokens(primary_color: &str, mode: ThemeMode) -> TokenMap {
    let mut map: TokenMap = generate_palettes(primary_color)
        .iter()
        .flat_map(|(&role, palette)| {
            Shade::all()
                .iter()
                .map(move |&shade| (TokenName::Color(role, shade), palette.shade(shade).to_string()))
        })
        .collect();
    map.extend(
        FixedToken::all()
            .iter()
            .filter(|t| t.is_surface())
            .map(|&t| (TokenName::Fixed(t), t.value(mode))),
    );
    map
}

// ─── Tests ───────────────────────────────────────────────────────────────────
