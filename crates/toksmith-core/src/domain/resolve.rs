//! CSS custom-property name resolution.
//!
//! Two addressing schemes exist; exactly one is active per emission target:
//!
//! - *flat*: `--{kebab(group)}-{kebab(variant)}` — the classic single-package
//!   layout.
//! - *namespaced*: `--{prefix}--{kebab(group)}--{kebab(variant)}` — the
//!   prefix is a short scope label supplied by the caller (a package or
//!   component name), never derived from the token itself.
//!
//! Resolution is a pure function of `(scheme, group, variant)`. The combined
//! emitter, the per-group emitter, and the alias generator all derive names
//! through here, so they agree byte-for-byte without any cross-talk.

use std::fmt;

use crate::domain::case::camel_to_kebab;
use crate::domain::error::DomainError;
use crate::domain::table::{TokenGroup, TokenTable};

/// How a custom-property name is constructed from a `(group, variant)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamingScheme {
    /// `--group-variant`
    #[default]
    Flat,
    /// `--prefix--group--variant`
    Namespaced { prefix: String },
}

impl NamingScheme {
    /// Build the namespaced scheme, validating the prefix shape.
    pub fn namespaced(prefix: impl Into<String>) -> Result<Self, DomainError> {
        let prefix = prefix.into();
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            identifier: prefix.clone(),
            reason: reason.to_string(),
        };
        if prefix.is_empty() {
            return Err(invalid("namespace prefix is empty"));
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid("namespace prefix must be lowercase kebab-case"));
        }
        Ok(Self::Namespaced { prefix })
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Namespaced { .. } => "namespaced",
        }
    }

    /// The custom-property name for one variant of one group, including the
    /// leading `--`.
    pub fn property_name(&self, group: &TokenGroup, variant_key: &str) -> String {
        let variant = camel_to_kebab(variant_key);
        match self {
            Self::Flat => format!("--{}-{}", group.css_prefix(), variant),
            Self::Namespaced { prefix } => {
                format!("--{}--{}--{}", prefix, group.css_prefix(), variant)
            }
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved token: property name, `var()` reference, raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    /// Custom-property name, e.g. `--font-size-base`.
    pub key: String,
    /// The `var()`-wrapped reference, e.g. `var(--font-size-base)`.
    pub reference: String,
    /// The variant's raw value, verbatim from the table.
    pub value: String,
}

/// Resolves `(group, variant)` pairs against a backing table.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    table: &'a TokenTable,
    scheme: NamingScheme,
}

impl<'a> Resolver<'a> {
    /// The variant looked up when the caller does not name one.
    pub const DEFAULT_VARIANT: &'static str = "base";

    pub fn new(table: &'a TokenTable, scheme: NamingScheme) -> Self {
        Self { table, scheme }
    }

    /// Resolve one token.
    ///
    /// Unknown groups and variants are configuration errors, not transient
    /// failures: the error names what was asked for and what exists, and the
    /// run must abort rather than emit a placeholder.
    pub fn resolve(&self, group: &str, variant: &str) -> Result<ResolvedToken, DomainError> {
        let group = self.table.require_group(group)?;
        let variant = group.require_variant(variant)?;

        let key = self.scheme.property_name(group, variant.key());
        Ok(ResolvedToken {
            reference: format!("var({key})"),
            key,
            value: variant.raw_value().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TokenTable {
        let mut table = TokenTable::new();
        let mut font = TokenGroup::new("fontSize").unwrap();
        font.push_variant("base", "16px").unwrap();
        font.push_variant("large", "24px").unwrap();
        table.push_group(font).unwrap();

        let mut shadow = TokenGroup::new("boxShadow").unwrap();
        shadow.push_variant("downLarge", "0 2px 8px hsla(0, 0%, 0%, 0.1)").unwrap();
        table.push_group(shadow).unwrap();
        table
    }

    #[test]
    fn flat_scheme_resolves() {
        let table = table();
        let resolver = Resolver::new(&table, NamingScheme::Flat);
        let token = resolver.resolve("fontSize", "base").unwrap();
        assert_eq!(token.key, "--font-size-base");
        assert_eq!(token.reference, "var(--font-size-base)");
        assert_eq!(token.value, "16px");
    }

    #[test]
    fn flat_scheme_kebabs_multiword_variants() {
        let table = table();
        let resolver = Resolver::new(&table, NamingScheme::Flat);
        let token = resolver.resolve("boxShadow", "downLarge").unwrap();
        assert_eq!(token.key, "--box-shadow-down-large");
    }

    #[test]
    fn namespaced_scheme_uses_double_separators() {
        let table = table();
        let scheme = NamingScheme::namespaced("core").unwrap();
        let resolver = Resolver::new(&table, scheme);
        let token = resolver.resolve("fontSize", "large").unwrap();
        assert_eq!(token.key, "--core--font-size--large");
        assert_eq!(token.reference, "var(--core--font-size--large)");
    }

    #[test]
    fn namespaced_prefix_is_validated() {
        assert!(NamingScheme::namespaced("icon").is_ok());
        assert!(NamingScheme::namespaced("").is_err());
        assert!(NamingScheme::namespaced("My Package").is_err());
    }

    #[test]
    fn resolve_is_deterministic() {
        let table = table();
        let resolver = Resolver::new(&table, NamingScheme::Flat);
        let first = resolver.resolve("fontSize", "base").unwrap();
        let second = resolver.resolve("fontSize", "base").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_variant_names_group_and_variant() {
        let table = table();
        let resolver = Resolver::new(&table, NamingScheme::Flat);
        let err = resolver.resolve("fontSize", "huge").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("fontSize"));
        assert!(message.contains("huge"));
        assert!(message.contains("base, large"));
    }

    #[test]
    fn unknown_group_is_an_error() {
        let table = table();
        let resolver = Resolver::new(&table, NamingScheme::Flat);
        assert!(matches!(
            resolver.resolve("spacing", "base").unwrap_err(),
            DomainError::UnknownGroup { .. }
        ));
    }
}
