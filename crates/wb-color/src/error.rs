// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

/// Strict parsing failures. The lenient converters never surface these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {input:?} (expected #rrggbb)")]
    InvalidHex { input: String },

    #[error("invalid hsl color: {input:?} (expected hsl(h, s%, l%))")]
    InvalidHsl { input: String },
}

impl ColorError {
    pub(crate) fn hex(input: &str) -> Self {
        Self::InvalidHex {
            input: input.to_owned(),
        }
    }

    pub(crate) fn hsl(input: &str) -> Self {
        Self::InvalidHsl {
            input: input.to_owned(),
        }
    }
}
