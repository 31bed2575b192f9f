//! Domain error types.
//!
//! Every variant carries enough context (group, variant, line number) to
//! locate the offending source entry. None of these are recoverable: a
//! domain error aborts the run before any output is written.

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ── Malformed source ─────────────────────────────────────────────────
    #[error("line {line}: malformed group marker: {content}")]
    MalformedMarker { line: usize, content: String },

    #[error("line {line}: expected `NAME = value`, found: {content}")]
    MalformedAssignment { line: usize, content: String },

    #[error("line {line}: assignment '{name}' appears before any group marker")]
    AssignmentOutsideGroup { line: usize, name: String },

    #[error("token document is malformed: {reason}")]
    MalformedDocument { reason: String },

    // ── Identifier and collision errors ──────────────────────────────────
    #[error("invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("duplicate token group '{group}'")]
    DuplicateGroup { group: String },

    #[error("token groups '{first}' and '{second}' both resolve to CSS prefix '{prefix}'")]
    PrefixCollision {
        prefix: String,
        first: String,
        second: String,
    },

    #[error("duplicate variant '{variant}' in token group '{group}'")]
    DuplicateVariant { group: String, variant: String },

    // ── Lookup errors ────────────────────────────────────────────────────
    #[error("token group '{group}' not found. Available groups: {available}")]
    UnknownGroup { group: String, available: String },

    #[error(
        "variant '{variant}' not found in token group '{group}'. Available variants: {available}"
    )]
    UnknownVariant {
        group: String,
        variant: String,
        available: String,
    },

    // ── Alias errors ─────────────────────────────────────────────────────
    #[error("retired variable '{retired}' is aliased by both '{first}' and '{second}'")]
    AmbiguousAlias {
        retired: String,
        first: String,
        second: String,
    },

    #[error("alias target '--{current}' does not exist in the token table")]
    UnknownAliasTarget { current: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedMarker { line, .. } => vec![
                format!("Check the marker on line {line}"),
                "Group markers look like: // Token: FONT_SIZE".into(),
            ],
            Self::MalformedAssignment { line, .. } => vec![
                format!("Check the assignment on line {line}"),
                "Assignments look like: FONT_SIZE_BASE = \"16px\"".into(),
            ],
            Self::AssignmentOutsideGroup { name, .. } => vec![
                format!("'{name}' has no owning group"),
                "Add a `// Token: GROUP_NAME` marker above the first assignment".into(),
            ],
            Self::MalformedDocument { .. } => vec![
                "Token documents map group keys to { \"name\": ..., \"items\": ... }".into(),
            ],
            Self::InvalidIdentifier { reason, .. } => vec![
                format!("Identifier rule violated: {reason}"),
                "Names must be ASCII camelCase with no consecutive capitals".into(),
            ],
            Self::DuplicateGroup { group } => vec![
                format!("The group '{group}' is declared more than once"),
                "Merge the declarations or rename one group".into(),
            ],
            Self::PrefixCollision { first, second, .. } => vec![
                format!("Rename '{first}' or '{second}' so their kebab-case forms differ"),
            ],
            Self::DuplicateVariant { group, variant } => vec![
                format!("'{variant}' appears twice in '{group}'"),
                "Variant keys must be unique within a group".into(),
            ],
            Self::UnknownGroup { available, .. } => {
                vec![format!("Known groups: {available}")]
            }
            Self::UnknownVariant { group, available, .. } => vec![
                format!("Known variants of '{group}': {available}"),
            ],
            Self::AmbiguousAlias { retired, .. } => vec![
                format!("Remove '{retired}' from one of the two mapping entries"),
                "A retired name must resolve to exactly one current variable".into(),
            ],
            Self::UnknownAliasTarget { current } => vec![
                format!("'{current}' is not an emitted flat variable name"),
                "Update the alias mapping to point at a variable the table actually emits".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownGroup { .. } | Self::UnknownVariant { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
