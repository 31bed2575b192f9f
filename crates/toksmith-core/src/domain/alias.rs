//! Deprecated-alias mapping.
//!
//! When a variable is renamed, its retired name stays functional by
//! forwarding to the new one: `--border-color-dark: var(--border-color-heavy);`.
//! The mapping source is a JSON document from current name to the list of
//! retired names it replaces, both sides already kebab-case with no leading
//! `--`:
//!
//! ```json
//! { "border-color-heavy": ["border-color-dark"] }
//! ```
//!
//! The map is read once, validated, iterated once per emission, and never
//! mutated after load. Two validations are fatal at load/build time:
//! a retired name listed under more than one current name (the alias would
//! be ambiguous), and a current name that the token table does not actually
//! emit (a stale mapping left behind by a rename). Neither is reconciled
//! silently; the source data is the integrator's to fix.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::table::TokenTable;

/// One mapping entry: a current variable and the retired names it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    current: String,
    retired: Vec<String>,
}

impl AliasEntry {
    /// Current canonical flat variable name, no leading `--`.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Retired names in source order.
    pub fn retired(&self) -> &[String] {
        &self.retired
    }
}

/// The full deprecated-alias map for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<AliasEntry>,
}

impl AliasMap {
    /// Parse and validate a JSON alias document.
    ///
    /// Entry order and retired-name order are preserved; they are the
    /// emission order. Fails on malformed JSON, on values that are not
    /// arrays of strings, and on any retired name that appears twice.
    pub fn from_json(source: &str) -> Result<Self, DomainError> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(source)
            .map_err(|e| DomainError::MalformedDocument {
                reason: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(document.len());
        let mut owners: HashMap<String, String> = HashMap::new();

        for (current, value) in document {
            let retired: Vec<String> =
                serde_json::from_value(value).map_err(|e| DomainError::MalformedDocument {
                    reason: format!("alias entry '{current}': {e}"),
                })?;

            for name in &retired {
                if let Some(first) = owners.insert(name.clone(), current.clone()) {
                    return Err(DomainError::AmbiguousAlias {
                        retired: name.clone(),
                        first,
                        second: current,
                    });
                }
            }

            entries.push(AliasEntry { current, retired });
        }

        debug!(entries = entries.len(), "loaded alias map");
        Ok(Self { entries })
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of retired names across all entries.
    pub fn retired_count(&self) -> usize {
        self.entries.iter().map(|e| e.retired.len()).sum()
    }

    /// Check every current name against the table's emitted flat names.
    ///
    /// A mapping whose target no longer exists would emit an alias pointing
    /// at an undeclared variable, so it fails the run instead.
    pub fn validate_against(&self, table: &TokenTable) -> Result<(), DomainError> {
        let emitted: HashSet<String> = table.flat_names().collect();
        for entry in &self.entries {
            if !emitted.contains(&entry.current) {
                return Err(DomainError::UnknownAliasTarget {
                    current: entry.current.clone(),
                });
            }
        }
        Ok(())
    }

    /// Expand to the ordered `(retired, reference)` declaration sequence.
    ///
    /// No name transformation happens here; both sides are taken as the
    /// literal kebab-case strings the source declared.
    pub fn expand(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .retired
                    .iter()
                    .map(|retired| (retired.clone(), format!("var(--{})", entry.current)))
            })
            .collect()
    }
}
