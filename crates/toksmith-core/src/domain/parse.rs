//! Token Table builders for the two canonical source shapes.
//!
//! **Definitions text** is a flat list of `NAME = value` pairs with
//! `// Token: GROUP` boundary markers:
//!
//! ```text
//! // Token: ANIMATION_DURATION
//! ANIMATION_DURATION_BASE = "300ms"
//! ANIMATION_DURATION_SLOW = "600ms"  // keep in sync with motion guidelines
//! ```
//!
//! **Token documents** are JSON mapping a camelCase group key to its
//! declared CSS name and variant map:
//!
//! ```json
//! { "fontSize": { "name": "font-size", "items": { "base": "16px" } } }
//! ```
//!
//! Both builders fail fast: the first grammar or collision error aborts the
//! whole parse. Nothing downstream ever sees a partially built table.

use serde::Deserialize;
use tracing::debug;

use crate::domain::case::{camel_to_screaming, screaming_to_camel};
use crate::domain::error::DomainError;
use crate::domain::table::{TokenGroup, TokenTable};

/// Prefix that opens a new token group in definitions text.
const GROUP_MARKER: &str = "Token:";

/// Parse definitions text into a [`TokenTable`].
///
/// Scan is strictly line-ordered: each marker opens a new active group, each
/// assignment belongs to the group most recently opened. An assignment before
/// the first marker is a fatal error, as is anything that is neither a
/// comment, a marker, nor a well-formed assignment.
pub fn parse_definitions(source: &str) -> Result<TokenTable, DomainError> {
    let mut table = TokenTable::new();
    let mut current: Option<TokenGroup> = None;

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix("//") {
            let comment = comment.trim_start();
            if let Some(marker) = comment.strip_prefix(GROUP_MARKER) {
                let marker = marker.trim();
                if !is_screaming_snake(marker) {
                    return Err(DomainError::MalformedMarker {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
                // Seal the previous group before opening the next one.
                if let Some(group) = current.take() {
                    table.push_group(group)?;
                }
                current = Some(TokenGroup::new(screaming_to_camel(marker))?);
            }
            // Any other comment is ignored.
            continue;
        }

        let Some((name, value)) = split_assignment(line) else {
            return Err(DomainError::MalformedAssignment {
                line: line_no,
                content: line.to_string(),
            });
        };

        let Some(group) = current.as_mut() else {
            return Err(DomainError::AssignmentOutsideGroup {
                line: line_no,
                name: name.to_string(),
            });
        };

        group.push_variant(variant_key(group.name(), name), value)?;
    }

    if let Some(group) = current.take() {
        table.push_group(group)?;
    }

    debug!(
        groups = table.len(),
        variants = table.variant_count(),
        "parsed definitions source"
    );
    Ok(table)
}

/// Split an assignment line into `(constant_name, cleaned_value)`.
///
/// The value is stripped of a trailing `//` comment and a trailing `;`.
/// Returns `None` when the line does not fit the `NAME = value` grammar.
fn split_assignment(line: &str) -> Option<(&str, String)> {
    let (lhs, rhs) = line.split_once('=')?;
    let name = lhs.trim();
    if !is_screaming_snake(name) {
        return None;
    }

    let mut value = rhs.trim();
    if let Some(idx) = value.find("//") {
        value = value[..idx].trim_end();
    }
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();
    if value.is_empty() {
        return None;
    }

    Some((name, value.to_string()))
}

/// Derive the variant key from a constant name.
///
/// The active group's SCREAMING form is removed as a prefix
/// (`ANIMATION_DURATION_BASE` → `BASE`) and the remainder camel-cased. A
/// constant that does not carry the prefix keeps its full name as the key.
fn variant_key(group_name: &str, constant_name: &str) -> String {
    let prefix = camel_to_screaming(group_name);
    let stem = constant_name
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(constant_name);
    screaming_to_camel(stem)
}

fn is_screaming_snake(s: &str) -> bool {
    !s.is_empty()
        && s.starts_with(|c: char| c.is_ascii_uppercase())
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

// ── JSON document shape ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GroupDocument {
    name: String,
    items: serde_json::Map<String, serde_json::Value>,
}

/// Parse a JSON token document into a [`TokenTable`].
///
/// Declaration order is preserved on both the group and item axes (the
/// `preserve_order` feature of `serde_json` carries it through the `Map`).
/// Item values may be strings or numbers; numbers are stringified.
pub fn parse_document(source: &str) -> Result<TokenTable, DomainError> {
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(source)
        .map_err(|e| DomainError::MalformedDocument {
            reason: e.to_string(),
        })?;

    let mut table = TokenTable::new();
    for (group_key, value) in document {
        let doc: GroupDocument =
            serde_json::from_value(value).map_err(|e| DomainError::MalformedDocument {
                reason: format!("group '{group_key}': {e}"),
            })?;

        let mut group = TokenGroup::with_css_prefix(group_key.clone(), doc.name)?;
        for (item_key, item_value) in doc.items {
            let raw_value = match item_value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(DomainError::MalformedDocument {
                        reason: format!(
                            "group '{group_key}' item '{item_key}': expected string or number, found {other}"
                        ),
                    });
                }
            };
            group.push_variant(item_key, raw_value)?;
        }
        table.push_group(group)?;
    }

    debug!(
        groups = table.len(),
        variants = table.variant_count(),
        "parsed token document"
    );
    Ok(table)
}
