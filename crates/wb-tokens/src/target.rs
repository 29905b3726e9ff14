// SPDX-License-Identifier: MIT
//! Where tokens land.
//!
//! A [`StyleTarget`] is anything with an inline style map: a DOM element
//! behind a binding, a headless [`ElementStyle`] in tests or on the CLI.
//! Only element nodes carry inline styles; pointing an injector at a text
//! node, a comment or a document is a caller bug and is reported as
//! [`TokenError::InvalidTarget`].

use std::fmt;

use indexmap::IndexMap;
use tracing::error;

use crate::error::{Result, TokenError};

// ─── NodeKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    Document,
    DocumentFragment,
}

impl NodeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Text => "text",
            Self::Comment => "comment",
            Self::Document => "document",
            Self::DocumentFragment => "document fragment",
        }
    }

    #[must_use]
    pub const fn is_stylable(self) -> bool {
        matches!(self, Self::Element)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── StyleTarget ─────────────────────────────────────────────────────────────

/// A node whose inline style can hold CSS custom properties.
///
/// Implementations only need to store what they are given. Validation of
/// the node kind happens in the injector before any write, so a failed
/// injection never leaves a half-written style map behind.
pub trait StyleTarget {
    fn node_kind(&self) -> NodeKind;

    /// Set one inline property, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);

    /// Current inline value of `name`, if set.
    fn property(&self, name: &str) -> Option<String>;
}

/// Fail with [`TokenError::InvalidTarget`] unless `target` is an element.
pub(crate) fn ensure_stylable(target: &dyn StyleTarget) -> Result<()> {
    let kind = target.node_kind();
    if kind.is_stylable() {
        Ok(())
    } else {
        error!(%kind, "refusing to apply tokens to a non-element node");
        Err(TokenError::InvalidTarget { kind })
    }
}

// ─── ElementStyle ────────────────────────────────────────────────────────────

/// In-memory inline style of one node. Properties keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    kind: NodeKind,
    properties: IndexMap<String, String>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStyle {
    /// An empty element (the document root, typically).
    #[must_use]
    pub fn new() -> Self {
        Self::with_kind(NodeKind::Element)
    }

    #[must_use]
    pub fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            properties: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleTarget for ElementStyle {
    fn node_kind(&self) -> NodeKind {
        self.kind
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
