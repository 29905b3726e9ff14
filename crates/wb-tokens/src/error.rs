// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ThemeMode;
use crate::target::NodeKind;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Injection was pointed at something that has no inline style.
    #[error("cannot apply tokens to a {kind} node: target must be an element")]
    InvalidTarget { kind: NodeKind },

    #[error("invalid token name {name:?}: custom tokens must look like --name")]
    InvalidName { name: String },

    #[error("token snapshot is not a flat JSON object of strings: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("default token injector has not been initialized")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme.available_modes must list at least one mode")]
    NoModes,

    /// `default_mode` is not one of `available_modes`.
    #[error("theme mode {mode} is not available (available: {available})")]
    UnavailableMode { mode: ThemeMode, available: String },
}
