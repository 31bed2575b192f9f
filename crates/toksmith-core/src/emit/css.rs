//! Stylesheet emitters.
//!
//! Output is byte-deterministic: declarations are tab-indented, groups
//! appear in table order, variants in group order, and the combined sheet
//! separates groups with exactly one blank line (none after the last).

use crate::domain::alias::AliasMap;
use crate::domain::resolve::NamingScheme;
use crate::domain::table::{TokenGroup, TokenTable};
use crate::emit::normalize_value;

/// Combined stylesheet: one `:root` block covering the whole table.
///
/// ```text
/// :root {
///     --font-size-base: 16px;
///
///     --gap-size-base: 16px;
/// }
/// ```
pub fn combined_stylesheet(table: &TokenTable, scheme: &NamingScheme) -> String {
    let mut lines = vec![String::from(":root {")];

    for (index, group) in table.groups().iter().enumerate() {
        push_declarations(&mut lines, group, scheme);
        if index + 1 < table.len() {
            lines.push(String::new());
        }
    }

    lines.push(String::from("}"));
    lines.join("\n")
}

/// Per-group stylesheet: an independently writable fragment for one group.
pub fn group_stylesheet(group: &TokenGroup, scheme: &NamingScheme) -> String {
    let mut lines = vec![String::from(":root {")];
    push_declarations(&mut lines, group, scheme);
    lines.push(String::from("}"));
    lines.join("\n")
}

/// Alias stylesheet: retired names forwarding to their replacements.
///
/// The header states the removal version so downstream consumers know how
/// long the compatibility layer lives.
pub fn alias_stylesheet(aliases: &AliasMap, removal_version: &str) -> String {
    let mut lines = vec![
        String::from("/**"),
        String::from(" * Deprecated CSS Variables"),
        String::from(" *"),
        String::from(" * This file contains deprecated custom properties that alias to their"),
        String::from(" * current equivalents. Import it to keep older code working."),
        String::from(" *"),
        format!(" * These variables will be removed in v{removal_version}"),
        String::from(" */"),
        String::new(),
        String::from(":root {"),
    ];

    for (retired, reference) in aliases.expand() {
        lines.push(format!("\t--{retired}: {reference};"));
    }

    lines.push(String::from("}"));
    lines.push(String::new());
    lines.join("\n")
}

fn push_declarations(lines: &mut Vec<String>, group: &TokenGroup, scheme: &NamingScheme) {
    for variant in group.variants() {
        lines.push(format!(
            "\t{}: {};",
            scheme.property_name(group, variant.key()),
            normalize_value(variant.raw_value()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_group_table() -> TokenTable {
        let mut table = TokenTable::new();
        let mut font = crate::domain::table::TokenGroup::new("fontSize").unwrap();
        font.push_variant("base", "16px").unwrap();
        table.push_group(font).unwrap();
        let mut gap = crate::domain::table::TokenGroup::new("gapSize").unwrap();
        gap.push_variant("base", "16px").unwrap();
        table.push_group(gap).unwrap();
        table
    }

    #[test]
    fn combined_two_groups_exact_output() {
        let css = combined_stylesheet(&two_group_table(), &NamingScheme::Flat);
        assert_eq!(
            css,
            ":root {\n\t--font-size-base: 16px;\n\n\t--gap-size-base: 16px;\n}"
        );
    }

    #[test]
    fn combined_no_blank_line_after_last_group() {
        let css = combined_stylesheet(&two_group_table(), &NamingScheme::Flat);
        assert!(!css.contains("16px;\n\n}"));
        assert!(!css.ends_with('\n'));
    }

    #[test]
    fn combined_strips_quoted_values() {
        let mut table = TokenTable::new();
        let mut duration = TokenGroup::new("animationDuration").unwrap();
        duration.push_variant("base", "\"300ms\"").unwrap();
        table.push_group(duration).unwrap();

        let css = combined_stylesheet(&table, &NamingScheme::Flat);
        assert!(css.contains("\t--animation-duration-base: 300ms;"));
        assert!(!css.contains("\"300ms\""));
    }

    #[test]
    fn combined_namespaced_scheme() {
        let scheme = NamingScheme::namespaced("core").unwrap();
        let css = combined_stylesheet(&two_group_table(), &scheme);
        assert!(css.contains("\t--core--font-size--base: 16px;"));
        assert!(css.contains("\t--core--gap-size--base: 16px;"));
    }

    #[test]
    fn group_stylesheet_has_no_blank_lines() {
        let table = two_group_table();
        let css = group_stylesheet(table.group("fontSize").unwrap(), &NamingScheme::Flat);
        assert_eq!(css, ":root {\n\t--font-size-base: 16px;\n}");
    }

    #[test]
    fn alias_stylesheet_single_mapping() {
        let aliases =
            AliasMap::from_json(r#"{ "border-color-heavy": ["border-color-dark"] }"#).unwrap();
        let css = alias_stylesheet(&aliases, "5.0.0");

        assert!(css.contains("\t--border-color-dark: var(--border-color-heavy);"));
        // Exactly one declaration.
        assert_eq!(css.matches(": var(").count(), 1);
        assert!(css.contains("removed in v5.0.0"));
        assert!(css.starts_with("/**"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn alias_stylesheet_keeps_source_order_without_blank_lines() {
        let aliases = AliasMap::from_json(
            r#"{
                "gap-smaller": ["gap-size-1", "gap-size-2"],
                "gap-small": ["gap-size-3"]
            }"#,
        )
        .unwrap();
        let css = alias_stylesheet(&aliases, "5.0.0");
        let body: Vec<&str> = css
            .lines()
            .filter(|l| l.starts_with('\t'))
            .collect();
        assert_eq!(
            body,
            [
                "\t--gap-size-1: var(--gap-smaller);",
                "\t--gap-size-2: var(--gap-smaller);",
                "\t--gap-size-3: var(--gap-small);",
            ]
        );
    }
}
