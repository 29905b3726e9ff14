// SPDX-License-Identifier: MIT
//! The ordered token map and its text exports.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::name::{TokenGroup, TokenName};

/// CSS variable name → CSS value, in insertion order.
///
/// Serializes as a flat JSON object keyed by the CSS variable names, which
/// is the snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap(IndexMap<TokenName, String>);

impl TokenMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &TokenName) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up by CSS name. Unparseable names are simply absent.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        TokenName::parse(name).ok().and_then(|n| self.get(&n))
    }

    /// Insert or replace; a replaced key keeps its position.
    pub fn insert(&mut self, name: TokenName, value: impl Into<String>) -> Option<String> {
        self.0.insert(name, value.into())
    }

    #[must_use]
    pub fn contains(&self, name: &TokenName) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenName, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &TokenName> {
        self.0.keys()
    }

    /// A `:root { ... }` block, one declaration per line.
    #[must_use]
    pub fn to_css(&self) -> String {
        render_root(self.iter())
    }

    /// Like [`to_css`](Self::to_css), keeping only tokens in `groups`.
    #[must_use]
    pub fn to_css_filtered(&self, groups: TokenGroup) -> String {
        render_root(self.iter().filter(|(name, _)| groups.intersects(name.group())))
    }
}

fn render_root<'a>(entries: impl Iterator<Item = (&'a TokenName, &'a str)>) -> String {
    let body: Vec<String> = entries.map(|(name, value)| format!("  {name}: {value};")).collect();
    format!(":root {{\n{}\n}}", body.join("\n"))
}

impl Extend<(TokenName, String)> for TokenMap {
    fn extend<I: IntoIterator<Item = (TokenName, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<(TokenName, String)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (TokenName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenMap {
    type Item = (TokenName, String);
    type IntoIter = indexmap::map::IntoIter<TokenName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a TokenName, &'a String);
    type IntoIter = indexmap::map::Iter<'a, TokenName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::{FixedToken, Role, Shade};
    use pretty_assertions::assert_eq;

    fn sample() -> TokenMap {
        [
            (TokenName::Color(Role::Primary, Shade::Base), "hsl(239, 84%, 67%)".to_owned()),
            (FixedToken::SpacingMd.into(), "1rem".to_owned()),
            (TokenName::parse("--brand").unwrap(), "red".to_owned()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn css_block_format() {
        assert_eq!(
            sample().to_css(),
            ":root {\n  --color-primary: hsl(239, 84%, 67%);\n  --spacing-md: 1rem;\n  --brand: red;\n}"
        );
    }

    #[test]
    fn filtered_css_keeps_only_selected_groups() {
        let css = sample().to_css_filtered(TokenGroup::SPACING | TokenGroup::CUSTOM);
        assert_eq!(css, ":root {\n  --spacing-md: 1rem;\n  --brand: red;\n}");
    }

    #[test]
    fn lookup_by_css_name() {
        let map = sample();
        assert_eq!(map.get_str("--spacing-md"), Some("1rem"));
        assert_eq!(map.get_str("--missing"), None);
        assert_eq!(map.get_str("not a name"), None);
    }

    #[test]
    fn replacing_keeps_position() {
        let mut map = sample();
        let old = map.insert(FixedToken::SpacingMd.into(), "2rem");
        assert_eq!(old.as_deref(), Some("1rem"));
        let second = map.keys().nth(1).cloned();
        assert_eq!(second, Some(TokenName::Fixed(FixedToken::SpacingMd)));
    }

    #[test]
    fn json_is_a_flat_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"--color-primary":"hsl(239, 84%, 67%)","--spacing-md":"1rem","--brand":"red"}"#
        );
        let back: TokenMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn json_rejects_non_string_values() {
        assert!(serde_json::from_str::<TokenMap>(r#"{"--a": 1}"#).is_err());
        assert!(serde_json::from_str::<TokenMap>(r#"["--a"]"#).is_err());
    }
}
