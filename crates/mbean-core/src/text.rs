//! Localized text lookup.
//!
//! Display names and descriptions can be declared as keys into a text
//! bundle instead of literals. The wrapper resolves each declared key at
//! most once, during construction, against the locale passed to it; a key
//! the resolver cannot find falls back to the declared literal. The
//! storage behind a bundle is opaque to the engine.

use std::fmt;

use rustc_hash::FxHashMap;

/// A locale tag (e.g. `"en"`, `"de-AT"`). Compared verbatim; the engine
/// attaches no meaning to the tag's structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    /// The neutral locale, used when no translations are wanted.
    pub fn neutral() -> Self {
        Locale(String::new())
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Localized text lookup collaborator.
///
/// One resolution either succeeds with the translated text or reports
/// not-found by returning `None`; the caller then keeps its literal
/// default. A resolver is never asked to re-resolve after the wrapper is
/// built.
pub trait TextResolver {
    /// Look up `key` in `bundle` for `locale`.
    fn resolve(&self, bundle: &str, key: &str, locale: &Locale) -> Option<String>;
}

/// A resolver with no translations; every lookup is not-found.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoText;

impl TextResolver for NoText {
    fn resolve(&self, _bundle: &str, _key: &str, _locale: &Locale) -> Option<String> {
        None
    }
}

/// In-memory text table, keyed by (bundle, locale, key).
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    entries: FxHashMap<(String, String, String), String>,
}

impl TextTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation.
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.entries
            .insert((bundle.into(), locale.into(), key.into()), text.into());
    }

    /// Get the number of stored translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextResolver for TextTable {
    fn resolve(&self, bundle: &str, key: &str, locale: &Locale) -> Option<String> {
        self.entries
            .get(&(bundle.to_string(), locale.as_str().to_string(), key.to_string()))
            .cloned()
    }
}
