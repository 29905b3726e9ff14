// SPDX-License-Identifier: MIT
//! # wb-tokens: design tokens as CSS custom properties
//!
//! Turns one primary color into the full token set every component
//! stylesheet reads, and applies it to a document.
//!
//! # Architecture
//!
//! ```text
//! WbConfig (TOML) ──▶ TokenInjector ──inject──▶ dyn StyleTarget
//!                        │    │                   (ElementStyle, DOM binding)
//!                        │    └──publish──▶ TokenBus ──▶ subscribers
//!                        ▼
//!                     TokenMap ──▶ :root { ... } / JSON snapshot
//!
//! name.rs:    TokenName = Color(Role, Shade) | Fixed(FixedToken) | Custom
//! global.rs:  explicit init/get/reset of the application default
//! preset.rs:  WordPress preset transformations onto a StyleTarget
//! ```
//!
//! ```
//! use wb_tokens::{ElementStyle, StyleTarget, TokenInjector};
//!
//! let injector = TokenInjector::new("#6366f1");
//! let mut root = ElementStyle::new();
//! injector.inject(&mut root).unwrap();
//! assert_eq!(root.property("--color-success").as_deref(), Some("hsl(142, 76%, 36%)"));
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod global;
pub mod injector;
pub mod map;
pub mod name;
pub mod preset;
pub mod target;

pub use config::{ConfigOverlay, DEFAULT_PRIMARY, ThemeMode, WbConfig};
pub use error::{ConfigError, Result, TokenError};
pub use event::{InjectorId, TokenBus, TokenEvent};
pub use injector::TokenInjector;
pub use map::TokenMap;
pub use name::{CustomName, FixedToken, Role, Shade, TokenGroup, TokenName};
pub use preset::apply_transformation;
pub use target::{ElementStyle, NodeKind, StyleTarget};
