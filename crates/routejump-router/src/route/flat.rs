//! Flat-convention (`pages/`) classifier
//!
//! Every script file is a route named after its path. There is no grouping
//! or slot concept, so dynamic segments pass through untouched.

use crate::path::{normalize_separators, strip_script_extension};
use crate::route::pattern::{FLAT_HANDLER_PREFIX, FLAT_INDEX_FILE, FLAT_RESERVED_FILES};
use crate::{join_route_path, RouteEntry, RouteKind};

/// Classifies a path relative to the flat-convention root (pure function)
///
/// Returns `None` for non-script files and for the framework shell files
/// (`_app`, `_document`, `_error`) wherever they sit. Files under `api/` are
/// request handlers; `index` files stand for their directory.
///
/// # Examples
///
/// ```
/// use routejump_router::{classify_flat, RouteKind};
///
/// let entry = classify_flat("index.tsx").unwrap();
/// assert_eq!(entry.route_path(), "/");
/// assert_eq!(entry.kind(), RouteKind::Page);
///
/// let entry = classify_flat("api/users.ts").unwrap();
/// assert_eq!(entry.route_path(), "/api/users");
/// assert_eq!(entry.kind(), RouteKind::Route);
///
/// assert!(classify_flat("_document.tsx").is_none());
/// ```
pub fn classify_flat(path: &str) -> Option<RouteEntry> {
    let normalized = normalize_separators(path);
    let normalized: &str = &normalized;

    let stem = strip_script_extension(normalized)?;
    let segments: Vec<&str> = stem.split('/').collect();
    let (&base_name, parents) = segments.split_last()?;

    if FLAT_RESERVED_FILES.contains(&base_name) {
        return None;
    }

    let kind = if segments[0] == FLAT_HANDLER_PREFIX {
        RouteKind::Route
    } else {
        RouteKind::Page
    };

    let route_segments = if base_name == FLAT_INDEX_FILE {
        parents
    } else {
        &segments[..]
    };

    Some(RouteEntry::new(
        join_route_path(route_segments.iter().copied()),
        normalized,
        kind,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> Option<(String, RouteKind)> {
        classify_flat(path).map(|e| (e.route_path().to_string(), e.kind()))
    }

    #[test]
    fn test_index_collapses_to_directory() {
        assert_eq!(route("index.tsx"), Some(("/".into(), RouteKind::Page)));
        assert_eq!(route("blog/index.tsx"), Some(("/blog".into(), RouteKind::Page)));
        assert_eq!(route("api/index.ts"), Some(("/api".into(), RouteKind::Route)));
    }

    #[test]
    fn test_plain_pages() {
        assert_eq!(route("about.tsx"), Some(("/about".into(), RouteKind::Page)));
        assert_eq!(
            route("blog/[slug].jsx"),
            Some(("/blog/[slug]".into(), RouteKind::Page))
        );
        assert_eq!(route("[...slug].js"), Some(("/[...slug]".into(), RouteKind::Page)));
        assert_eq!(
            route("docs/[[...slug]].tsx"),
            Some(("/docs/[[...slug]]".into(), RouteKind::Page))
        );
    }

    #[test]
    fn test_api_prefix_only_at_first_segment() {
        assert_eq!(route("api/users.ts"), Some(("/api/users".into(), RouteKind::Route)));
        assert_eq!(
            route("api/v1/[id].ts"),
            Some(("/api/v1/[id]".into(), RouteKind::Route))
        );
        assert_eq!(
            route("docs/api/users.tsx"),
            Some(("/docs/api/users".into(), RouteKind::Page))
        );
        assert_eq!(route("apis.ts"), Some(("/apis".into(), RouteKind::Page)));
    }

    #[test]
    fn test_reserved_files_excluded_anywhere() {
        assert_eq!(route("_app.tsx"), None);
        assert_eq!(route("_document.tsx"), None);
        assert_eq!(route("_error.js"), None);
        assert_eq!(route("nested/_app.tsx"), None);
        assert_eq!(
            route("_middleware.ts"),
            Some(("/_middleware".into(), RouteKind::Page))
        );
    }

    #[test]
    fn test_non_script_files() {
        assert_eq!(route("styles.css"), None);
        assert_eq!(route("about.mdx"), None);
        assert_eq!(route("README"), None);
        assert_eq!(route(""), None);
    }

    #[test]
    fn test_file_path_keeps_extension() {
        let entry = classify_flat("blog/[slug].tsx").unwrap();
        assert_eq!(entry.file_path(), "blog/[slug].tsx");
        assert_eq!(entry.route_path(), "/blog/[slug]");
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_paths_normalized() {
        let entry = classify_flat("blog\\[slug].tsx").unwrap();
        assert_eq!(entry.file_path(), "blog/[slug].tsx");
        assert_eq!(entry.route_path(), "/blog/[slug]");
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_kept_in_unix_file_name() {
        let entry = classify_flat("a\\b.tsx").unwrap();
        assert_eq!(entry.file_path(), "a\\b.tsx");
        assert_eq!(entry.route_path(), "/a\\b");
    }
}
