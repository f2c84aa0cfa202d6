//! Shared casing conversions for derived file and directory names.

/// Convert a string to kebab-case (e.g., "FooBar" -> "foo-bar").
///
/// Underscores and spaces are treated as word separators, camel-case
/// boundaries are split, and runs of separators collapse into a single
/// hyphen. The conversion is idempotent: kebab-casing an already
/// kebab-cased string returns it unchanged.
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == ' ' || c == '-' {
            if !result.is_empty() && !result.ends_with('-') {
                result.push('-');
            }
            continue;
        }
        if c.is_uppercase() && !result.is_empty() && !result.ends_with('-') {
            let after_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            // "HTTPServer" splits before "Server", not inside the acronym
            let acronym_end =
                chars[i - 1].is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if after_lower || acronym_end {
                result.push('-');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.trim_end_matches('-').to_string()
}

/// Convert a string to PascalCase (e.g., "hello-world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "hello-world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
