//! The token table: canonical in-memory form of every design token.
//!
//! ## Invariants (enforced at construction, never re-checked later)
//!
//! 1. Group names and variant keys are well-formed camelCase identifiers
//!    (ASCII, leading lowercase letter, no consecutive capitals). The
//!    consecutive-capital rule is what makes the camelCase → kebab-case →
//!    camelCase round trip lossless, so a CSS property name can always be
//!    traced back to its owning `(group, variant)` pair.
//! 2. Group names are unique across the table, and so are their kebab-case
//!    CSS prefixes.
//! 3. Variant keys are unique within their group.
//!
//! Together these guarantee that `(group.name, variant.key)` is globally
//! unique, and therefore that every derived CSS custom-property name is
//! collision-free under either naming scheme.
//!
//! A table is built once per run, held immutably through emission, and
//! discarded at process exit. It is always passed by reference; there is no
//! global token state anywhere in this crate.

use crate::domain::case::{camel_to_kebab, kebab_to_camel};
use crate::domain::error::DomainError;

/// A single value within a token group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    key: String,
    raw_value: String,
}

impl Variant {
    /// The camelCase variant key, e.g. `downLarge`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The literal value string, never parsed or validated as CSS.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }
}

/// A named category of design values, e.g. `fontSize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGroup {
    name: String,
    css_prefix: String,
    variants: Vec<Variant>,
}

impl TokenGroup {
    /// Create an empty group, deriving the CSS prefix from the name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_identifier(&name)?;
        let css_prefix = camel_to_kebab(&name);
        Ok(Self {
            name,
            css_prefix,
            variants: Vec::new(),
        })
    }

    /// Create an empty group with an explicitly declared CSS prefix.
    ///
    /// Used by the document source shape, where the prefix is part of the
    /// source data rather than derived. The prefix must still be well-formed
    /// kebab-case; collision checking happens when the group is pushed into
    /// a [`TokenTable`].
    pub fn with_css_prefix(
        name: impl Into<String>,
        css_prefix: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let css_prefix = css_prefix.into();
        validate_identifier(&name)?;
        validate_kebab(&css_prefix)?;
        Ok(Self {
            name,
            css_prefix,
            variants: Vec::new(),
        })
    }

    /// The camelCase group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kebab-case prefix used in CSS property names.
    pub fn css_prefix(&self) -> &str {
        &self.css_prefix
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Append a variant, rejecting duplicate keys.
    pub fn push_variant(
        &mut self,
        key: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let key = key.into();
        validate_identifier(&key)?;
        if self.variants.iter().any(|v| v.key == key) {
            return Err(DomainError::DuplicateVariant {
                group: self.name.clone(),
                variant: key,
            });
        }
        self.variants.push(Variant {
            key,
            raw_value: raw_value.into(),
        });
        Ok(())
    }

    /// Look up a variant by key.
    pub fn variant(&self, key: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.key == key)
    }

    /// Look up a variant, or fail with the list of keys that do exist.
    pub fn require_variant(&self, key: &str) -> Result<&Variant, DomainError> {
        self.variant(key).ok_or_else(|| DomainError::UnknownVariant {
            group: self.name.clone(),
            variant: key.to_string(),
            available: join_names(self.variants.iter().map(Variant::key)),
        })
    }
}

/// The full, ordered token table for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    groups: Vec<TokenGroup>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups in declaration order. This order is the emission order.
    pub fn groups(&self) -> &[TokenGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total variant count across all groups.
    pub fn variant_count(&self) -> usize {
        self.groups.iter().map(|g| g.variants().len()).sum()
    }

    /// Append a group, rejecting duplicate names and prefix collisions.
    pub fn push_group(&mut self, group: TokenGroup) -> Result<(), DomainError> {
        if self.group(group.name()).is_some() {
            return Err(DomainError::DuplicateGroup {
                group: group.name().to_string(),
            });
        }
        if let Some(existing) = self.groups.iter().find(|g| g.css_prefix == group.css_prefix) {
            return Err(DomainError::PrefixCollision {
                prefix: group.css_prefix.clone(),
                first: existing.name.clone(),
                second: group.name.clone(),
            });
        }
        self.groups.push(group);
        Ok(())
    }

    /// Look up a group by camelCase name.
    pub fn group(&self, name: &str) -> Option<&TokenGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Look up a group, or fail with the list of groups that do exist.
    pub fn require_group(&self, name: &str) -> Result<&TokenGroup, DomainError> {
        self.group(name).ok_or_else(|| DomainError::UnknownGroup {
            group: name.to_string(),
            available: join_names(self.groups.iter().map(TokenGroup::name)),
        })
    }

    /// Every flat-scheme variable name the table emits, without the leading
    /// `--`. Alias targets are validated against this set.
    pub fn flat_names(&self) -> impl Iterator<Item = String> + '_ {
        self.groups.iter().flat_map(|group| {
            group
                .variants
                .iter()
                .map(move |v| format!("{}-{}", group.css_prefix, camel_to_kebab(&v.key)))
        })
    }
}

/// A camelCase identifier: ASCII, leading lowercase letter, alphanumeric,
/// no consecutive capitals (the round-trip rule).
fn validate_identifier(identifier: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = identifier.chars();
    match chars.next() {
        None => return Err(invalid("identifier is empty")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(invalid("must start with a lowercase ASCII letter"));
        }
        Some(_) => {}
    }

    let mut prev_upper = false;
    for c in identifier.chars() {
        if !c.is_ascii_alphanumeric() {
            return Err(invalid("only ASCII letters and digits are allowed"));
        }
        let upper = c.is_ascii_uppercase();
        if upper && prev_upper {
            return Err(invalid(
                "consecutive capitals make the kebab-case round trip ambiguous",
            ));
        }
        prev_upper = upper;
    }

    // Belt and braces: the checks above imply this, but the invariant is
    // load-bearing enough to assert directly.
    debug_assert_eq!(kebab_to_camel(&camel_to_kebab(identifier)), identifier);

    Ok(())
}

/// A declared kebab-case CSS prefix: lowercase alphanumeric segments joined
/// by single hyphens.
fn validate_kebab(prefix: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidIdentifier {
        identifier: prefix.to_string(),
        reason: reason.to_string(),
    };

    if prefix.is_empty() {
        return Err(invalid("CSS prefix is empty"));
    }
    if prefix.starts_with('-') || prefix.ends_with('-') || prefix.contains("--") {
        return Err(invalid("CSS prefix has a leading, trailing, or doubled hyphen"));
    }
    if !prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid("CSS prefix must be lowercase kebab-case"));
    }
    Ok(())
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
