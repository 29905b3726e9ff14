// SPDX-License-Identifier: MIT
//! Applying a WordPress preset transformation to a live document.

use tracing::{info, warn};
use wb_theme::{DocumentSignals, Transformation};

use crate::error::Result;
use crate::target::{StyleTarget, ensure_stylable};

/// Write the `--wp--preset--color--*` declarations of `transformation`
/// onto `target`.
///
/// The properties are written whether or not `signals` show a WordPress
/// page; the return value reports whether it did, and a warning is logged
/// when it did not.
///
/// # Errors
///
/// [`TokenError::InvalidTarget`](crate::TokenError::InvalidTarget) for a
/// non-element target.
pub fn apply_transformation(
    transformation: &Transformation,
    target: &mut dyn StyleTarget,
    signals: &DocumentSignals,
) -> Result<bool> {
    ensure_stylable(target)?;
    let detected = signals.is_wordpress();
    if !detected {
        warn!("WordPress preset palette not detected; applying transformed colors anyway");
    }
    for (property, value) in transformation.declarations() {
        target.set_property(&property, value);
    }
    info!(
        hue_shift = transformation.hue_shift,
        transformed = transformation.transformed_count,
        new_primary = %transformation.new_primary,
        "preset palette applied"
    );
    Ok(detected)
}
