// SPDX-License-Identifier: MIT
//! Property-based invariant tests for color conversion.
//!
//! 1. Exact hex → HSL → hex reproduces every channel within 1
//! 2. The whole-number path (`hex_to_hsl`) stays within 5 per channel
//! 3. Converted hues always land in [0, 360)
//! 4. The lenient converters never panic on arbitrary strings
//! 5. `hsl_to_hex` always yields lowercase `#rrggbb`

use proptest::prelude::*;
use wb_color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, normalize};

// ── Helpers ──────────────────────────────────────────────────────────

fn channel_error(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

fn is_canonical_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
}

// ── Strategies ───────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Exact round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exact_roundtrip_within_one(rgb in rgb_strategy()) {
        let back = rgb.to_hsl().to_rgb();
        prop_assert!(
            channel_error(rgb, back) <= 1,
            "{} came back as {}", rgb, back
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Whole-number round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rounded_roundtrip_stays_close(rgb in rgb_strategy()) {
        let hex = rgb.to_hex();
        let back = Rgb::from_hex(&hex_to_hsl(&hex).to_hex()).unwrap();
        prop_assert!(
            channel_error(rgb, back) <= 5,
            "{} came back as {}", rgb, back
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Hue range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn converted_hue_in_range(rgb in rgb_strategy()) {
        let hsl = hex_to_hsl(&rgb.to_hex());
        prop_assert!((0.0..360.0).contains(&hsl.h), "hue {} out of range", hsl.h);
        prop_assert!((0.0..=100.0).contains(&hsl.s));
        prop_assert!((0.0..=100.0).contains(&hsl.l));
    }

    #[test]
    fn new_normalizes_any_finite_hue(h in -100_000.0f64..100_000.0) {
        let hsl = Hsl::new(h, 50.0, 50.0);
        prop_assert!((0.0..360.0).contains(&hsl.h), "hue {} from {}", hsl.h, h);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Lenient converters never panic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_to_hsl_never_panics(s in ".*") {
        let hsl = hex_to_hsl(&s);
        prop_assert!((0.0..360.0).contains(&hsl.h));
    }

    #[test]
    fn normalize_never_panics(s in "(hsl\\()?[0-9a-f#%, .()-]{0,24}") {
        let hsl = normalize(&s);
        prop_assert!((0.0..=100.0).contains(&hsl.l));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Hex output shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsl_to_hex_is_canonical(
        h in -720.0f64..720.0,
        s in -50.0f64..150.0,
        l in -50.0f64..150.0,
    ) {
        let hex = hsl_to_hex(h, s, l);
        prop_assert!(is_canonical_hex(&hex), "bad hex {}", hex);
    }
}
