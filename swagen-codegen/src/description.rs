//! Explicit type-override directives in schema description text.
//!
//! A description beginning with the token `ts-type` or `type` names the
//! exact type to emit instead of the inferred one, e.g.
//! `"ts-type Date"` on a string property.

/// True iff the description carries a type-override directive.
pub fn has_type_override(description: &str) -> bool {
    description.starts_with("ts-type") || description.starts_with("type")
}

/// Extract the override type name from a description.
///
/// Strips a leading `ts-type` token, then a leading `type` token, then
/// surrounding whitespace. Returns the description unchanged when it
/// carries no directive.
///
/// A description of exactly `"type"` collapses to the empty string. That
/// boundary case is intentional and matched by downstream consumers; do
/// not special-case it here.
pub fn extract_type(description: &str) -> String {
    if !has_type_override(description) {
        return description.to_string();
    }
    let rest = description.strip_prefix("ts-type").unwrap_or(description);
    let rest = rest.strip_prefix("type").unwrap_or(rest);
    rest.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_type_override() {
        assert!(has_type_override("ts-type Date"));
        assert!(has_type_override("type Moment"));
        assert!(has_type_override("type"));
        assert!(!has_type_override("plain text"));
        assert!(!has_type_override("prototype of a thing"));
        assert!(!has_type_override(""));
    }

    #[test]
    fn test_extract_type_ts_type_directive() {
        assert_eq!(extract_type("ts-type Date"), "Date");
        assert_eq!(extract_type("ts-type   Moment"), "Moment");
    }

    #[test]
    fn test_extract_type_type_directive() {
        assert_eq!(extract_type("type Foo"), "Foo");
    }

    #[test]
    fn test_extract_type_without_directive() {
        assert_eq!(extract_type("plain text"), "plain text");
        assert_eq!(extract_type(""), "");
    }

    #[test]
    fn test_extract_type_does_not_eat_inner_tokens() {
        // only the leading token is stripped
        assert_eq!(extract_type("ts-type Footype"), "Footype");
    }

    #[test]
    fn test_extract_type_bare_type_collapses_to_empty() {
        assert_eq!(extract_type("type"), "");
    }
}
