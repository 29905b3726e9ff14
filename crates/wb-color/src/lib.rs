// SPDX-License-Identifier: MIT
//
// wb-color: color space conversion for the Website Builder token system.
//
// Two interchangeable representations flow through the token pipeline:
//
//   #rrggbb  ↔  Rgb (8-bit channels)  ↔  Hsl (degrees, percent, percent)
//
// Palette derivation happens in HSL because every harmonic variation is a
// plain offset on one of the three axes. Hex is the exchange format for
// palettes supplied by themes and color pickers.
//
// Parsing comes in two flavours. The strict entry points (`Rgb::from_hex`,
// `Hsl::parse`, `parse_color`) return `Result`. The lenient ones
// (`hex_to_hsl`, `normalize`) never fail: malformed input is logged and
// replaced by neutral gray so one bad seed cannot take down a whole palette.

pub mod convert;
pub mod error;
pub mod hsl;
pub mod rgb;

pub use convert::{hex_to_hsl, hsl_to_hex, normalize, parse_color};
pub use error::{ColorError, Result};
pub use hsl::{Hsl, hue_distance, normalize_hue};
pub use rgb::Rgb;
