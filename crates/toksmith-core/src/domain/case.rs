//! Identifier case conversions.
//!
//! Token sources declare groups in SCREAMING_SNAKE_CASE, generated code uses
//! camelCase, and CSS custom properties use kebab-case. These functions are
//! the single definition of how those forms relate. Every other module
//! derives names through here, which is what lets the emitters agree on
//! naming without coordinating with each other.
//!
//! All functions are pure and total over ASCII identifier input. Behaviour
//! on non-ASCII input or digit/letter boundaries inside a word is not part
//! of the contract.

/// Convert SCREAMING_SNAKE_CASE to camelCase.
///
/// Splits on `_`, drops empty segments (leading/trailing/doubled
/// underscores), lower-cases everything, and capitalises the first letter
/// of every segment except the first.
///
/// ```
/// use toksmith_core::domain::case::screaming_to_camel;
///
/// assert_eq!(screaming_to_camel("ANIMATION_DURATION"), "animationDuration");
/// assert_eq!(screaming_to_camel("BORDER_RADIUS_LARGE"), "borderRadiusLarge");
/// ```
pub fn screaming_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for segment in s.split('_').filter(|seg| !seg.is_empty()) {
        if out.is_empty() {
            out.push_str(&segment.to_ascii_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(&chars.as_str().to_ascii_lowercase());
            }
        }
    }
    out
}

/// Convert SCREAMING_SNAKE_CASE to kebab-case.
///
/// ```
/// use toksmith_core::domain::case::screaming_to_kebab;
///
/// assert_eq!(screaming_to_kebab("BORDER_RADIUS"), "border-radius");
/// ```
pub fn screaming_to_kebab(s: &str) -> String {
    s.to_ascii_lowercase().replace('_', "-")
}

/// Convert camelCase to kebab-case.
///
/// Inserts `-` before every uppercase letter, lower-cases the result, and
/// strips the leading `-` a leading capital would produce.
///
/// ```
/// use toksmith_core::domain::case::camel_to_kebab;
///
/// assert_eq!(camel_to_kebab("fontSize"), "font-size");
/// assert_eq!(camel_to_kebab("downLarge"), "down-large");
/// assert_eq!(camel_to_kebab("base"), "base");
/// ```
pub fn camel_to_kebab(s: &str) -> String {
    split_on_uppercase(s, '-')
}

/// Convert camelCase to SCREAMING_SNAKE_CASE.
///
/// ```
/// use toksmith_core::domain::case::camel_to_screaming;
///
/// assert_eq!(camel_to_screaming("fontSize"), "FONT_SIZE");
/// assert_eq!(camel_to_screaming("downBase"), "DOWN_BASE");
/// ```
pub fn camel_to_screaming(s: &str) -> String {
    split_on_uppercase(s, '_').to_ascii_uppercase()
}

/// Convert kebab-case back to camelCase.
///
/// Inverse of [`camel_to_kebab`] for well-formed identifiers; used to verify
/// that a group name survives the round trip unambiguously.
pub fn kebab_to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for segment in s.split('-').filter(|seg| !seg.is_empty()) {
        if out.is_empty() {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Walk a camelCase identifier, emitting `sep` before each uppercase letter
/// and lower-casing as we go. The leading separator a capital first letter
/// would produce is never emitted.
fn split_on_uppercase(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push(sep);
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_to_camel_basic() {
        assert_eq!(screaming_to_camel("FONT_SIZE"), "fontSize");
        assert_eq!(screaming_to_camel("BOX_SHADOW_DOWN_LARGE"), "boxShadowDownLarge");
        assert_eq!(screaming_to_camel("GAP"), "gap");
    }

    #[test]
    fn screaming_to_camel_drops_empty_segments() {
        assert_eq!(screaming_to_camel("_FONT_SIZE"), "fontSize");
        assert_eq!(screaming_to_camel("FONT__SIZE_"), "fontSize");
    }

    #[test]
    fn screaming_to_kebab_basic() {
        assert_eq!(screaming_to_kebab("ANIMATION_DURATION"), "animation-duration");
        assert_eq!(screaming_to_kebab("GAP"), "gap");
    }

    #[test]
    fn camel_to_kebab_basic() {
        assert_eq!(camel_to_kebab("animationDuration"), "animation-duration");
        assert_eq!(camel_to_kebab("base"), "base");
    }

    #[test]
    fn camel_to_kebab_leading_capital_has_no_leading_dash() {
        assert_eq!(camel_to_kebab("FontSize"), "font-size");
    }

    #[test]
    fn camel_to_screaming_basic() {
        assert_eq!(camel_to_screaming("borderRadius"), "BORDER_RADIUS");
        assert_eq!(camel_to_screaming("base"), "BASE");
    }

    #[test]
    fn kebab_to_camel_basic() {
        assert_eq!(kebab_to_camel("border-radius-large"), "borderRadiusLarge");
        assert_eq!(kebab_to_camel("base"), "base");
    }

    // The semantic word sequence must survive the full conversion cycle.
    #[test]
    fn round_trip_law() {
        for screaming in ["BORDER_RADIUS_LARGE", "FONT_SIZE", "GAP", "BOX_SHADOW_DOWN_BASE"] {
            let camel = screaming_to_camel(screaming);
            let kebab = camel_to_kebab(&camel);
            assert_eq!(kebab, screaming_to_kebab(screaming));
            assert_eq!(kebab_to_camel(&kebab), camel);
            assert_eq!(camel_to_screaming(&camel), screaming);
        }
    }
}
