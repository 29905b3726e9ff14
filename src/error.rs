// SPDX-License-Identifier: MIT

use thiserror::Error;
use wb_color::ColorError;
use wb_theme::AnalysisError;
use wb_tokens::TokenError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tokens(#[from] TokenError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("invalid color {input:?}: {source}")]
    Color {
        input: String,
        #[source]
        source: ColorError,
    },

    #[error("unknown builtin palette {name:?} (available: {available})")]
    UnknownPalette { name: String, available: String },

    #[error("no colors given: pass --builtin NAME or NAME=HEX pairs")]
    NoColors,

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
