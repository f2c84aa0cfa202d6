//! Namespace to filesystem path resolution.
//!
//! A namespace is a dot-separated logical module path (`a.b.c`). Each
//! segment maps to exactly one kebab-cased directory segment, so the
//! mapping is deterministic regardless of the casing convention used in
//! the schema.

use swagen_core::to_kebab_case;

/// Convert a dotted namespace into a relative filesystem path.
///
/// Each segment is kebab-cased and segments are joined with `/`. The empty
/// namespace yields the empty path: the caller joins it with the output
/// root directly.
pub fn namespace_to_path(namespace: &str) -> String {
    if namespace.is_empty() {
        return String::new();
    }
    namespace
        .split('.')
        .map(to_kebab_case)
        .collect::<Vec<_>>()
        .join("/")
}

/// Compute the relative path from a namespace's directory back to the
/// generation root, for use in template-relative imports.
///
/// The empty namespace yields `./`. Otherwise the result is `../` repeated
/// once per namespace segment. The repetition count is the segment count,
/// not segment count minus one: the generated file lives inside the
/// deepest segment's directory, so one extra hop is needed.
pub fn path_to_root(namespace: &str) -> String {
    if namespace.is_empty() {
        return "./".to_string();
    }
    "../".repeat(namespace.split('.').count())
}
