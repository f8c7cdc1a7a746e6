//! Shared string utilities for code generation.

/// Convert a hyphen- or underscore-delimited name to PascalCase
/// (e.g., "radio-group" -> "RadioGroup", "nav_item" -> "NavItem").
///
/// Empty segments (consecutive separators) contribute nothing.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("button"), "Button");
        assert_eq!(to_pascal_case("radio-group"), "RadioGroup");
        assert_eq!(to_pascal_case("nav_item"), "NavItem");
        assert_eq!(to_pascal_case("foo-bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(to_pascal_case("foo--bar"), "FooBar");
        assert_eq!(to_pascal_case("-leading"), "Leading");
        assert_eq!(to_pascal_case("trailing-"), "Trailing");
    }

    #[test]
    fn test_idempotent_on_single_segment() {
        assert_eq!(to_pascal_case(&to_pascal_case("button")), "Button");
        assert_eq!(to_pascal_case("Button"), "Button");
    }
}
