// SPDX-License-Identifier: MIT
//! Palette analysis: reverse-engineer the color-theory structure of an
//! arbitrary named palette, then re-project it onto a new primary.
//!
//! ```text
//! name → hex
//!     │  hex_to_hsl (whole numbers)
//!     ▼
//! chromatic candidates (neutrals dropped unless asked for)
//!     │  score = 0.7·s + 0.3·(1 − |l − 50| / 50)
//!     ▼
//! primary ──► relationships (hue distance, s/l ratios, kind)
//!     │
//!     ▼
//! patterns (hue spacing, s/l levels, sequence heuristics) → formulas
//! ```
//!
//! The sequence heuristics (Fibonacci spacing, golden-ratio saturation,
//! geometric lightness) are diagnostic output only. Nothing downstream
//! makes decisions from them.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wb_color::{Hsl, Rgb, hex_to_hsl};

use crate::error::{AnalysisError, Result};

/// A palette as supplied by themes: color name → `#rrggbb`, in the order
/// the theme lists them.
pub type NamedPalette = IndexMap<String, String>;

const FIBONACCI: [f64; 12] = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 144.0];
const FIBONACCI_TOLERANCE: f64 = 10.0;
const GOLDEN_RATIO: f64 = 1.618;
const GOLDEN_TOLERANCE: f64 = 0.1;
const GEOMETRIC_TOLERANCE: f64 = 0.2;
/// Level lists longer than this are reported as "variable".
const MAX_NAMED_LEVELS: usize = 3;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Tunables for [`PaletteAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Leave low-saturation colors out of relationship analysis.
    pub exclude_neutrals: bool,
    /// Saturation (%) at or below which a color counts as neutral.
    pub neutral_threshold: f64,
    /// Degrees of slack when matching color-theory angles.
    pub hue_tolerance: f64,
    /// Percent of slack when grouping saturation and lightness levels.
    pub sl_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            exclude_neutrals: true,
            neutral_threshold: 15.0,
            hue_tolerance: 15.0,
            sl_tolerance: 10.0,
        }
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// A named palette color with its whole-number HSL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedColor {
    pub name: String,
    pub hex: String,
    pub hsl: Hsl,
}

impl AnalyzedColor {
    /// Primary-candidate score: favors high saturation and medium lightness.
    #[must_use]
    pub fn score(&self) -> f64 {
        let saturation = self.hsl.s / 100.0;
        let lightness = 1.0 - (self.hsl.l - 50.0).abs() / 50.0;
        saturation * 0.7 + lightness * 0.3
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEntry {
    pub hex: String,
    pub hsl: Hsl,
}

// ─── Relationships ───────────────────────────────────────────────────────────

/// Color-theory relationship between a color and the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    Monochromatic,
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Custom,
}

impl RelationshipKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "splitComplementary",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Complementary,
            Self::Triadic,
            Self::Analogous,
            Self::SplitComplementary,
            Self::Custom,
        ]
    }

    /// Classify a short-arc hue distance. Checks run in a fixed order and
    /// the first angle within `tolerance` wins.
    #[must_use]
    pub fn classify(hue_difference: f64, tolerance: f64) -> Self {
        let near = |angle: f64| (hue_difference - angle).abs() <= tolerance;
        if hue_difference <= tolerance {
            Self::Monochromatic
        } else if near(180.0) {
            Self::Complementary
        } else if near(120.0) || near(240.0) {
            Self::Triadic
        } else if near(30.0) || near(60.0) {
            Self::Analogous
        } else if near(150.0) || near(210.0) {
            Self::SplitComplementary
        } else {
            Self::Custom
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How one color derives from the primary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Short-arc hue distance in `[0, 180]`. Unsigned: the direction
    /// around the wheel is not recorded.
    pub hue_difference: f64,
    pub saturation_ratio: f64,
    pub lightness_ratio: f64,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

impl Relationship {
    #[must_use]
    pub fn between(primary: Hsl, color: Hsl, hue_tolerance: f64) -> Self {
        let hue_difference = wb_color::hue_distance(primary.h, color.h);
        Self {
            hue_difference,
            saturation_ratio: ratio(color.s, primary.s),
            lightness_ratio: ratio(color.l, primary.l),
            kind: RelationshipKind::classify(hue_difference, hue_tolerance),
        }
    }

    /// Re-apply this relationship to a new primary. Saturation and
    /// lightness never exceed 100.
    #[must_use]
    pub fn project(&self, primary: Hsl) -> Hsl {
        Hsl::new(
            primary.h + self.hue_difference,
            (primary.s * self.saturation_ratio).min(100.0),
            (primary.l * self.lightness_ratio).min(100.0),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRelationship {
    pub color: AnalyzedColor,
    pub relationship: Relationship,
}

// ─── Patterns ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HueProgression {
    pub is_progression: bool,
    pub average_spacing: f64,
    pub differences: Vec<f64>,
    pub formula: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPattern {
    pub distinct_levels: usize,
    pub levels: Vec<f64>,
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSignal {
    pub detected: bool,
    pub pattern: Option<String>,
}

impl SequenceSignal {
    fn new(detected: bool, pattern: impl FnOnce() -> String) -> Self {
        Self {
            detected,
            pattern: detected.then(pattern),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MathematicalSequences {
    pub fibonacci: SequenceSignal,
    pub golden_ratio: SequenceSignal,
    pub geometric: SequenceSignal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patterns {
    pub hue_progression: HueProgression,
    pub saturation_levels: LevelPattern,
    pub lightness_levels: LevelPattern,
    pub mathematical_sequences: MathematicalSequences,
}

impl Patterns {
    fn detect(colors: &[AnalyzedColor], options: &AnalysisOptions) -> Self {
        let hues = sorted(colors.iter().map(|c| c.hsl.h));
        let hue_steps = differences(&hues);

        Self {
            hue_progression: hue_progression(hue_steps.clone(), options.hue_tolerance),
            saturation_levels: levels(colors.iter().map(|c| c.hsl.s), options.sl_tolerance, 'S', "saturation"),
            lightness_levels: levels(colors.iter().map(|c| c.hsl.l), options.sl_tolerance, 'L', "lightness"),
            mathematical_sequences: MathematicalSequences {
                fibonacci: fibonacci(&hue_steps),
                golden_ratio: golden_ratio(colors),
                geometric: geometric(&sorted(colors.iter().map(|c| c.hsl.l))),
            },
        }
    }
}

fn hue_progression(differences: Vec<f64>, tolerance: f64) -> HueProgression {
    if differences.is_empty() {
        return HueProgression {
            is_progression: false,
            average_spacing: 0.0,
            differences,
            formula: None,
        };
    }

    let average = mean(&differences);
    let is_progression = differences.iter().all(|d| (d - average).abs() <= tolerance);
    HueProgression {
        is_progression,
        average_spacing: average,
        differences,
        formula: is_progression.then(|| format!("H = BaseHue + ({average:.1} * index)")),
    }
}

fn levels(values: impl Iterator<Item = f64>, tolerance: f64, symbol: char, label: &str) -> LevelPattern {
    let mut distinct = sorted(values);
    distinct.dedup();

    // Greedy: a value starts a new level unless an existing level is close.
    let mut groups: Vec<f64> = Vec::new();
    for value in distinct {
        if !groups.iter().any(|g| (value - g).abs() <= tolerance) {
            groups.push(value);
        }
    }

    let formula = if groups.len() <= MAX_NAMED_LEVELS {
        let list: Vec<String> = groups.iter().map(|g| format!("{g:.0}")).collect();
        format!("{symbol} ∈ {{{}}}", list.join(", "))
    } else {
        format!("Variable {label}")
    };

    LevelPattern {
        distinct_levels: groups.len(),
        levels: groups,
        formula,
    }
}

fn fibonacci(hue_steps: &[f64]) -> SequenceSignal {
    let detected = hue_steps.len() >= 2
        && hue_steps
            .iter()
            .zip(FIBONACCI)
            .any(|(d, f)| (d - f).abs() < FIBONACCI_TOLERANCE);
    SequenceSignal::new(detected, || "Fibonacci-based hue spacing".to_owned())
}

/// Consecutive saturation ratios in palette order.
fn golden_ratio(colors: &[AnalyzedColor]) -> SequenceSignal {
    let detected = colors
        .windows(2)
        .filter(|w| w[0].hsl.s > 0.0)
        .any(|w| (w[1].hsl.s / w[0].hsl.s - GOLDEN_RATIO).abs() < GOLDEN_TOLERANCE);
    SequenceSignal::new(detected, || "Golden ratio in saturation levels".to_owned())
}

/// Ratios between consecutive sorted lightness values.
fn geometric(lightness: &[f64]) -> SequenceSignal {
    if lightness.len() < 3 || lightness[..lightness.len() - 1].contains(&0.0) {
        return SequenceSignal::new(false, String::new);
    }
    let ratios: Vec<f64> = lightness.windows(2).map(|w| w[1] / w[0]).collect();
    let average = mean(&ratios);
    let detected = ratios.iter().all(|r| (r - average).abs() < GEOMETRIC_TOLERANCE);
    SequenceSignal::new(detected, || format!("Geometric progression with ratio {average:.2}"))
}

// ─── Formulas & Summary ──────────────────────────────────────────────────────

/// A human-readable derivation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formula {
    pub name: String,
    pub formula: String,
    pub description: String,
}

fn formulas(primary: &AnalyzedColor, relationships: &[ColorRelationship], patterns: &Patterns) -> Vec<Formula> {
    let Hsl { h, s, l } = primary.hsl;
    let mut out = vec![Formula {
        name: "Primary Color".to_owned(),
        formula: format!("HSL({h}°, {s}%, {l}%)"),
        description: "Base color for the theme".to_owned(),
    }];

    for rel in relationships.iter().filter(|r| r.relationship.kind != RelationshipKind::Custom) {
        let r = &rel.relationship;
        out.push(Formula {
            name: format!("{} ({})", rel.color.name, r.kind),
            formula: format!(
                "HSL(({h} + {})°, {s} * {:.2}, {l} * {:.2})",
                r.hue_difference, r.saturation_ratio, r.lightness_ratio
            ),
            description: format!("{} relationship to primary", r.kind),
        });
    }

    if let Some(formula) = &patterns.hue_progression.formula {
        out.push(Formula {
            name: "Hue Progression".to_owned(),
            formula: formula.clone(),
            description: "Systematic hue spacing pattern".to_owned(),
        });
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |r, v| Self {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_colors: usize,
    pub chromatic_colors: usize,
    pub dominant_hue_range: ValueRange,
    pub saturation_range: ValueRange,
    pub lightness_range: ValueRange,
}

// ─── PaletteAnalysis ─────────────────────────────────────────────────────────

/// Everything the analyzer learned about one palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteAnalysis {
    pub primary: AnalyzedColor,
    /// Every input color, neutrals included, in input order.
    pub colors: IndexMap<String, ColorEntry>,
    pub relationships: Vec<ColorRelationship>,
    pub patterns: Patterns,
    pub formulas: Vec<Formula>,
    pub summary: Summary,
}

// ─── PaletteAnalyzer ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct PaletteAnalyzer {
    options: AnalysisOptions,
}

impl PaletteAnalyzer {
    #[must_use]
    pub const fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a named palette.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoChromaticColors`] when no color survives the
    /// neutral filter.
    pub fn analyze_theme(&self, palette: &NamedPalette) -> Result<PaletteAnalysis> {
        let mut colors = IndexMap::with_capacity(palette.len());
        let mut chromatic = Vec::new();

        for (name, hex) in palette {
            let hsl = hex_to_hsl(hex);
            colors.insert(name.clone(), ColorEntry { hex: hex.clone(), hsl });
            if !self.options.exclude_neutrals || !hsl.is_neutral(self.options.neutral_threshold) {
                chromatic.push(AnalyzedColor {
                    name: name.clone(),
                    hex: hex.clone(),
                    hsl,
                });
            }
        }

        let primary = detect_primary_color(&chromatic)
            .map_err(|_| AnalysisError::NoChromaticColors { total: palette.len() })?
            .clone();
        debug!(primary = %primary.name, score = primary.score(), "detected primary color");

        let relationships: Vec<ColorRelationship> = chromatic
            .iter()
            .filter(|c| c.name != primary.name)
            .map(|c| ColorRelationship {
                color: c.clone(),
                relationship: Relationship::between(primary.hsl, c.hsl, self.options.hue_tolerance),
            })
            .collect();

        let patterns = Patterns::detect(&chromatic, &self.options);
        let formulas = formulas(&primary, &relationships, &patterns);
        let summary = Summary {
            total_colors: palette.len(),
            chromatic_colors: chromatic.len(),
            dominant_hue_range: ValueRange::of(chromatic.iter().map(|c| c.hsl.h)),
            saturation_range: ValueRange::of(chromatic.iter().map(|c| c.hsl.s)),
            lightness_range: ValueRange::of(chromatic.iter().map(|c| c.hsl.l)),
        };

        Ok(PaletteAnalysis {
            primary,
            colors,
            relationships,
            patterns,
            formulas,
            summary,
        })
    }
}

/// Pick the highest-scoring candidate. Equal scores go to the
/// lexicographically smallest name, so the result does not depend on
/// palette order.
///
/// # Errors
///
/// [`AnalysisError::NoChromaticColors`] for an empty candidate list.
pub fn detect_primary_color(candidates: &[AnalyzedColor]) -> Result<&AnalyzedColor> {
    candidates
        .iter()
        .max_by(|a, b| a.score().total_cmp(&b.score()).then_with(|| b.name.cmp(&a.name)))
        .ok_or(AnalysisError::NoChromaticColors { total: 0 })
}

/// Rebuild a palette around `new_primary_hex` using the relationships of a
/// previous analysis.
///
/// The result has exactly the keys of the analyzed palette, in the same
/// order. Colors that took no part in the analysis (neutrals) keep their
/// original value.
#[must_use]
pub fn generate_theme_from_formulas(new_primary_hex: &str, analysis: &PaletteAnalysis) -> NamedPalette {
    let new_primary = hex_to_hsl(new_primary_hex);
    let primary_hex = Rgb::from_hex(new_primary_hex).map_or_else(|_| new_primary.to_hex(), Rgb::to_hex);
    let by_name: HashMap<&str, &Relationship> = analysis
        .relationships
        .iter()
        .map(|r| (r.color.name.as_str(), &r.relationship))
        .collect();

    analysis
        .colors
        .iter()
        .map(|(name, entry)| {
            let hex = if *name == analysis.primary.name {
                primary_hex.clone()
            } else if let Some(rel) = by_name.get(name.as_str()) {
                rel.project(new_primary).to_hex()
            } else {
                entry.hex.clone()
            };
            (name.clone(), hex)
        })
        .collect()
}

/// Markdown report of an analysis.
#[must_use]
pub fn generate_report(analysis: &PaletteAnalysis) -> String {
    let mut report = String::from("# Color Theme Analysis Report\n\n");
    let primary = &analysis.primary;
    let Hsl { h, s, l } = primary.hsl;

    let _ = writeln!(report, "## Primary Color");
    let _ = writeln!(report, "**{}**: {} (HSL: {h}°, {s}%, {l}%)\n", primary.name, primary.hex);

    let _ = writeln!(report, "## Discovered Formulas");
    for formula in &analysis.formulas {
        let _ = writeln!(report, "### {}", formula.name);
        let _ = writeln!(report, "**Formula**: `{}`", formula.formula);
        let _ = writeln!(report, "**Description**: {}\n", formula.description);
    }

    let _ = writeln!(report, "## Color Theory Relationships");
    for rel in &analysis.relationships {
        let r = &rel.relationship;
        if r.kind != RelationshipKind::Custom {
            let _ = writeln!(report, "- **{}**: {} ({}° hue difference)", rel.color.name, r.kind, r.hue_difference);
        }
    }

    let _ = writeln!(report, "\n## Detected Patterns");
    let patterns = &analysis.patterns;
    if let Some(formula) = &patterns.hue_progression.formula {
        let _ = writeln!(report, "- **Hue Progression**: {formula}");
    }
    for (label, level) in [("Saturation", &patterns.saturation_levels), ("Lightness", &patterns.lightness_levels)] {
        if level.distinct_levels <= MAX_NAMED_LEVELS {
            let _ = writeln!(report, "- **{label} Levels**: {}", level.formula);
        }
    }

    report
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// `num / den`, treating a zero denominator as 1.
fn ratio(num: f64, den: f64) -> f64 {
    num / if den == 0.0 { 1.0 } else { den }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v
}

fn differences(sorted: &[f64]) -> Vec<f64> {
    sorted.windows(2).map(|w| w[1] - w[0]).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
