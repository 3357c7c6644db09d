//! Shared casing and path helpers for code generation.

use convert_case::{Case, Casing};

/// Convert a string to PascalCase (e.g., "order_item" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// Convert a string to camelCase (e.g., "order_item" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

/// Convert a string to snake_case (e.g., "OrderItem" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

/// Normalize a path string to forward slashes.
///
/// Backslashes become `/`, repeated separators collapse, and a trailing
/// separator is dropped (a lone `/` is kept).
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let mut out = String::with_capacity(unified.len());
    for c in unified.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Join two path fragments with a single `/` and normalize the result.
pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        return normalize_path(name);
    }
    normalize_path(&format!("{}/{}", base, name))
}

/// Get the final segment of a `/`-separated path.
pub fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}
