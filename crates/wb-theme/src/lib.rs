// SPDX-License-Identifier: MIT
//! # wb-theme: harmonic palettes and palette analysis
//!
//! Everything here is pure computation over [`wb_color::Hsl`]. Nothing
//! touches a document; applying results is the job of `wb-tokens`.
//!
//! # Architecture
//!
//! ```text
//! one seed color
//!     │
//!     ▼
//! harmonic.rs:  wave-derived variations per role (fundamental … vivid)
//!
//! named palette (name → hex)
//!     │
//!     ▼
//! analysis.rs:  primary detection, relationships, patterns, formulas
//!     │
//!     ▼
//! regeneration onto a new primary, Markdown report
//!
//! builtin.rs:   WordPress / Material reference palettes
//! transform.rs: WordPress hue shift + environment detection
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod analysis;
pub mod builtin;
pub mod error;
pub mod harmonic;
pub mod transform;

pub use analysis::{
    AnalysisOptions, NamedPalette, PaletteAnalysis, PaletteAnalyzer, RelationshipKind,
    generate_report, generate_theme_from_formulas,
};
pub use builtin::{builtin_names, builtin_palette};
pub use error::{AnalysisError, Result};
pub use harmonic::{Role, Shade, WavePalette, generate, generate_palettes};
pub use transform::{DocumentSignals, PaletteTransformer, Transformation};
