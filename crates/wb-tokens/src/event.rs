// SPDX-License-Identifier: MIT
//! Token change notifications.
//!
//! ```text
//!   TokenInjector ──publish──▶ TokenBus (broadcast) ──▶ Receiver (UI panel)
//!                                                   ──▶ Receiver (preview)
//! ```
//!
//! Events are sent only after the target's style map has been written, so a
//! listener that reads the target on receipt sees the new values. Delivery
//! is fire-and-forget: with no subscribers an event is dropped.
//! Subscribers poll with `try_recv`; no async runtime is involved.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;
use tracing::trace;

use crate::map::TokenMap;
use crate::name::TokenName;

/// Events buffered per subscriber before the slowest one starts lagging.
const CHANNEL_CAPACITY: usize = 64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InjectorId(u64);

impl InjectorId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InjectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injector#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEvent {
    /// A full token set was applied.
    Injected { injector: InjectorId, tokens: TokenMap },
    /// One token was changed and applied.
    Updated { name: TokenName, value: String },
}

/// Broadcast channel shared by any number of injectors and listeners.
///
/// Cloning yields another handle to the same channel.
#[derive(Debug, Clone)]
pub struct TokenBus {
    tx: broadcast::Sender<TokenEvent>,
}

impl Default for TokenBus {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TokenEvent> {
        self.tx.subscribe()
    }

    /// Send to every current subscriber; returns how many there were.
    pub fn publish(&self, event: TokenEvent) -> usize {
        match self.tx.send(event) {
            Ok(n) => n,
            Err(_) => {
                trace!("token event dropped: no subscribers");
                0
            }
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
