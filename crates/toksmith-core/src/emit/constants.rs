//! Language-level constants emitter.
//!
//! Mirrors the token table as compilable Rust source: one module per group,
//! one `pub const` per variant, SCREAMING_SNAKE_CASE names reconstructed
//! from the camelCase pair. The emitted file is meant to be checked in (or
//! included) by the consuming project so token values are addressable from
//! code without parsing CSS.

use crate::domain::case::camel_to_screaming;
use crate::domain::table::TokenTable;
use crate::emit::normalize_value;

/// Render the whole table as a Rust constants module.
///
/// ```text
/// // AnimationDuration
/// pub mod animation_duration {
///     pub const BASE: &str = "300ms";
///     pub const SLOW: &str = "600ms";
/// }
/// ```
pub fn constants_module(table: &TokenTable) -> String {
    let mut lines = vec![
        String::from("// Generated design-token constants. Do not edit by hand."),
        String::new(),
    ];

    for group in table.groups() {
        let screaming = camel_to_screaming(group.name());
        lines.push(format!("// {}", pascal_label(group.name())));
        lines.push(format!("pub mod {} {{", screaming.to_ascii_lowercase()));
        for variant in group.variants() {
            lines.push(format!(
                "    pub const {}: &str = {:?};",
                camel_to_screaming(variant.key()),
                normalize_value(variant.raw_value()),
            ));
        }
        lines.push(String::from("}"));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Capitalised camelCase label for the group comment, e.g. `FontSize`.
fn pascal_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
