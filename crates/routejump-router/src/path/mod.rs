//! Path utilities for separator normalization and script-file extensions
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::path::MAIN_SEPARATOR;

use once_cell::sync::Lazy;
use regex::Regex;

/// Script extensions recognized by both conventions: `.tsx`, `.ts`, `.jsx`, `.js`
static SCRIPT_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(tsx|ts|jsx|js)$").expect("script extension pattern is valid"));

/// Normalize a relative path to use `/` as the only separator
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
/// Only the platform separator is rewritten: on Windows `\` becomes `/`, on
/// Unix a backslash is an ordinary file-name character and stays. Returns
/// `Cow::Borrowed` when there is nothing to rewrite. Nothing else is touched:
/// empty segments, dots and leading/trailing slashes survive as-is.
/// Idempotent.
///
/// # Examples
///
/// ```
/// use routejump_router::path::normalize_separators;
/// use std::borrow::Cow;
///
/// let path = normalize_separators("blog/[slug]/page.tsx");
/// assert!(matches!(path, Cow::Borrowed("blog/[slug]/page.tsx")));
/// ```
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    replace_separator(path, MAIN_SEPARATOR)
}

fn replace_separator(path: &str, separator: char) -> Cow<'_, str> {
    if separator != '/' && path.contains(separator) {
        Cow::Owned(path.replace(separator, "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Splits a trailing script extension off a path
///
/// Returns the path without the extension, or `None` when the path does not
/// end in one of the recognized extensions. Only the last extension counts:
/// `types.d.ts` → `types.d`.
///
/// # Examples
///
/// ```
/// use routejump_router::path::strip_script_extension;
///
/// assert_eq!(strip_script_extension("blog/[slug].tsx"), Some("blog/[slug]"));
/// assert_eq!(strip_script_extension("styles.css"), None);
/// ```
pub fn strip_script_extension(path: &str) -> Option<&str> {
    SCRIPT_EXTENSION
        .find(path)
        .map(|m| &path[..m.start()])
}
