//! Built-in starter sources.
//!
//! `toksmith init` seeds a project with these so a first `toksmith build`
//! succeeds out of the box. The token set is a small but realistic slice of
//! a design system — durations, colors, radii, type scale — chosen so every
//! value shape the pipeline handles (plain, quoted, `var()` reference,
//! multi-word variant) appears at least once.

/// Starter definitions source written by `toksmith init`.
pub const STARTER_DEFINITIONS: &str = r#"// Design token definitions.
//
// Groups open with a `// Token: GROUP_NAME` marker; every assignment below a
// marker belongs to that group. Edit this file, then run `toksmith build`.

// Token: ANIMATION_DURATION
ANIMATION_DURATION_BASE = "300ms"
ANIMATION_DURATION_SLOW = "600ms"

// Token: ANIMATION_EASING
ANIMATION_EASING_BASE = "ease-in-out"

// Token: BACKGROUND_COLOR
BACKGROUND_COLOR_BASE = "hsla(0, 100%, 100%, 1)"
BACKGROUND_COLOR_ALTERNATE = "hsla(210, 10%, 96%, 1)"

// Token: BORDER_COLOR
BORDER_COLOR_BASE = "hsla(240, 9%, 91%, 1)"
BORDER_COLOR_HEAVY = "hsla(210, 8%, 58%, 1)"
BORDER_COLOR_HEAVIER = "hsla(210, 10%, 25%, 1)"

// Token: BORDER_RADIUS
BORDER_RADIUS_SMALLER = "2px"
BORDER_RADIUS_SMALL = "4px"
BORDER_RADIUS_BASE = "8px"
BORDER_RADIUS_LARGE = "16px"
BORDER_RADIUS_LARGER = "32px"

// Token: BOX_SHADOW
BOX_SHADOW_DOWN_BASE = "0 1px 4px hsla(0, 0%, 0%, 0.075)"
BOX_SHADOW_DOWN_LARGE = "0 2px 8px hsla(0, 0%, 0%, 0.1)"
BOX_SHADOW_UP_BASE = "0 -1px 4px hsla(0, 0%, 0%, 0.075)"
BOX_SHADOW_UP_LARGE = "0 -2px 8px hsla(0, 0%, 0%, 0.1)"

// Token: FONT_FAMILY
FONT_FAMILY_BASE = "\"Inter\", sans-serif"
FONT_FAMILY_CODE = "\"Roboto Mono\", \"Courier New\", monospace"

// Token: FONT_SIZE
FONT_SIZE_SMALLER = "12px"
FONT_SIZE_SMALL = "14px"
FONT_SIZE_BASE = "16px"
FONT_SIZE_LARGE = "24px"
FONT_SIZE_LARGER = "32px"

// Token: GAP
GAP_SMALLER = "4px"
GAP_SMALL = "8px"
GAP_BASE = "16px"
GAP_LARGE = "32px"
GAP_LARGER = "48px"

// Token: LINE_HEIGHT
LINE_HEIGHT_CONDENSED = "1.25"
LINE_HEIGHT_BASE = "1.5"
LINE_HEIGHT_EXPANDED = "1.75"
"#;

/// Starter alias mapping written by `toksmith init --with-aliases`.
pub const STARTER_ALIASES: &str = r#"{
	"border-color-heavy": ["border-color-dark"],
	"border-color-heavier": ["border-color-darker"],
	"gap-smaller": ["gap-size-1", "gap-size-2"],
	"gap-small": ["gap-size-3"],
	"gap-base": ["gap-size-4"],
	"gap-large": ["gap-size-5"],
	"gap-larger": ["gap-size-6"]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use toksmith_core::domain::{AliasMap, parse_definitions};

    // The starter files must always make it through the pipeline unchanged;
    // `init` followed by `build` is the first thing a new user runs.
    #[test]
    fn starter_definitions_parse_cleanly() {
        let table = parse_definitions(STARTER_DEFINITIONS).unwrap();
        assert_eq!(table.len(), 10);
        assert!(table.group("boxShadow").unwrap().variant("downLarge").is_some());
    }

    #[test]
    fn starter_aliases_validate_against_starter_table() {
        let table = parse_definitions(STARTER_DEFINITIONS).unwrap();
        let aliases = AliasMap::from_json(STARTER_ALIASES).unwrap();
        aliases.validate_against(&table).unwrap();
        assert_eq!(aliases.retired_count(), 8);
    }
}
