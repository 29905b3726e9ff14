// SPDX-License-Identifier: MIT
//! The application-wide default injector.
//!
//! Set once at startup with [`init`], read anywhere with [`get`]. The shared
//! instance is immutable; code that needs a different palette builds its
//! own [`TokenInjector`] and passes it explicitly.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Result, TokenError};
use crate::injector::TokenInjector;

static DEFAULT: RwLock<Option<Arc<TokenInjector>>> = RwLock::new(None);

/// Install `injector` as the default, replacing any previous one.
pub fn init(injector: TokenInjector) -> Arc<TokenInjector> {
    let shared = Arc::new(injector);
    debug!(id = %shared.id(), "default token injector installed");
    *DEFAULT.write() = Some(Arc::clone(&shared));
    shared
}

/// The default injector.
///
/// # Errors
///
/// [`TokenError::NotInitialized`] before [`init`] or after [`reset`].
pub fn get() -> Result<Arc<TokenInjector>> {
    DEFAULT.read().clone().ok_or(TokenError::NotInitialized)
}

/// Drop the default. Outstanding handles from [`get`] stay valid.
pub fn reset() {
    *DEFAULT.write() = None;
}
