// SPDX-License-Identifier: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Degenerate palettes that have no meaningful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Every color was excluded as neutral (or the palette was empty), so
    /// there is nothing to anchor a primary color on.
    #[error("palette has no chromatic colors to analyze ({total} colors, all neutral)")]
    NoChromaticColors { total: usize },
}
