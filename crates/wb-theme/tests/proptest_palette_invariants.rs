// SPDX-License-Identifier: MIT
//! Property-based invariant tests for palette generation and analysis.
//!
//! 1. `generate` is deterministic down to the formatted strings
//! 2. Every derived color stays inside the HSL ranges
//! 3. The fundamental equals the normalized input
//! 4. Analysis never yields a relationship kind outside the enum
//! 5. Regeneration keeps exactly the analyzed keys
//! 6. Transforms never change black, white or the palette size

use proptest::prelude::*;
use wb_color::{Hsl, Rgb, normalize};
use wb_theme::{
    NamedPalette, PaletteAnalyzer, PaletteTransformer, RelationshipKind, WavePalette, generate,
    generate_theme_from_formulas,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn colors(p: &WavePalette) -> [Hsl; 9] {
    [
        p.fundamental,
        p.octave,
        p.fifth,
        p.beat,
        p.overtone,
        p.subtle,
        p.soft,
        p.bold,
        p.vivid,
    ]
}

fn in_range(c: Hsl) -> bool {
    (0.0..360.0).contains(&c.h) && (0.0..=100.0).contains(&c.s) && (0.0..=100.0).contains(&c.l)
}

// ── Strategies ───────────────────────────────────────────────────────

fn hex_strategy() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b).to_hex())
}

fn hsl_string_strategy() -> impl Strategy<Value = String> {
    (0u16..360, 0u8..=100, 0u8..=100).prop_map(|(h, s, l)| format!("hsl({h}, {s}%, {l}%)"))
}

fn color_input() -> impl Strategy<Value = String> {
    prop_oneof![hex_strategy(), hsl_string_strategy()]
}

fn role_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("primary".to_owned()),
        Just("secondary".to_owned()),
        Just("success".to_owned()),
        "[a-z]{1,12}",
    ]
}

fn palette_strategy() -> impl Strategy<Value = NamedPalette> {
    prop::collection::vec(("[a-z]{1,8}", hex_strategy()), 1..12)
        .prop_map(|pairs| pairs.into_iter().collect())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generate_is_deterministic(input in color_input(), role in role_strategy()) {
        let a = generate(&input, &role);
        let b = generate(&input, &role);
        prop_assert_eq!(&a, &b);
        for (x, y) in colors(&a).iter().zip(colors(&b).iter()) {
            prop_assert_eq!(x.to_string(), y.to_string());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Clamp invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn derived_colors_in_range(input in color_input()) {
        let p = generate(&input, "primary");
        for c in colors(&p) {
            prop_assert!(in_range(c), "{:?} out of range for {}", c, input);
        }
        prop_assert!(p.amplitude <= 100);
        prop_assert!(p.frequency < 360);
    }

    #[test]
    fn variation_floors_hold(input in color_input()) {
        let p = generate(&input, "primary");
        prop_assert!(p.overtone.l >= 10.0);
        prop_assert!(p.beat.s >= 20.0);
        prop_assert!(p.subtle.l <= 92.0);
        prop_assert!(p.vivid.l >= 15.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fundamental fidelity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fundamental_equals_normalized_input(input in color_input()) {
        prop_assert_eq!(generate(&input, "primary").fundamental, normalize(&input));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Analysis
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn relationship_kinds_are_known(palette in palette_strategy()) {
        if let Ok(analysis) = PaletteAnalyzer::default().analyze_theme(&palette) {
            for rel in &analysis.relationships {
                prop_assert!(RelationshipKind::all().contains(&rel.relationship.kind));
                prop_assert!((0.0..=180.0).contains(&rel.relationship.hue_difference));
            }
            prop_assert!(analysis.summary.chromatic_colors >= 1);
        }
    }

    #[test]
    fn regeneration_keeps_keys(palette in palette_strategy(), primary in hex_strategy()) {
        if let Ok(analysis) = PaletteAnalyzer::default().analyze_theme(&palette) {
            let regenerated = generate_theme_from_formulas(&primary, &analysis);
            let before: Vec<&String> = palette.keys().collect();
            let after: Vec<&String> = regenerated.keys().collect();
            prop_assert_eq!(before, after);
            for hex in regenerated.values() {
                prop_assert!(Rgb::from_hex(hex).is_ok(), "bad hex {}", hex);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Transformer
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn transform_keeps_fixed_colors(primary in hex_strategy()) {
        let t = PaletteTransformer::default().transform(&primary);
        prop_assert_eq!(t.colors.len(), 12);
        prop_assert_eq!(t.colors["black"].as_str(), "#000000");
        prop_assert_eq!(t.colors["white"].as_str(), "#ffffff");
        prop_assert!((-180.0..=180.0).contains(&t.hue_shift));
    }
}
