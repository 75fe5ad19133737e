//! Construction-time text resolution.

use mbean_core::{Locale, TextResolver};

/// Resolves declared text keys against one bundle and one locale.
///
/// Bound once per wrapper construction; every declared key goes through
/// [`Localizer::resolve`] exactly once. With no bundle configured every
/// lookup keeps its literal default.
pub struct Localizer<'a> {
    resolver: &'a dyn TextResolver,
    bundle: &'a str,
    locale: &'a Locale,
}

impl<'a> Localizer<'a> {
    /// Bind a resolver to a bundle and locale.
    pub fn new(resolver: &'a dyn TextResolver, bundle: &'a str, locale: &'a Locale) -> Self {
        Self {
            resolver,
            bundle,
            locale,
        }
    }

    /// Resolve a declared key, keeping `default` when the bundle is not
    /// configured, the key is not declared, or the resolver reports
    /// not-found.
    pub fn resolve(&self, key: &str, default: &str) -> String {
        if self.bundle.is_empty() || key.is_empty() {
            return default.to_string();
        }
        self.resolver
            .resolve(self.bundle, key, self.locale)
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbean_core::{NoText, TextTable};

    #[test]
    fn no_bundle_keeps_default() {
        let locale = Locale::neutral();
        let resolver = NoText;
        let text = Localizer::new(&resolver, "", &locale);
        assert_eq!(text.resolve("someKey", "literal"), "literal");
    }

    #[test]
    fn missing_key_keeps_default() {
        let locale = Locale::new("en");
        let resolver = TextTable::new();
        let text = Localizer::new(&resolver, "app", &locale);
        assert_eq!(text.resolve("someKey", "literal"), "literal");
        assert_eq!(text.resolve("", "literal"), "literal");
    }

    #[test]
    fn declared_key_resolves() {
        let mut resolver = TextTable::new();
        resolver.insert("app", "en", "levelName", "Level");
        let locale = Locale::new("en");
        let text = Localizer::new(&resolver, "app", &locale);
        assert_eq!(text.resolve("levelName", "literal"), "Level");
    }
}
