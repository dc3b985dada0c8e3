//! Segment and file-name patterns for file-based routes
//!
//! Pure functional classification of path segments into typed kinds.
//! The rules are shape-based on purpose: a segment is only a route group if
//! the parenthesized content is alphanumerics, `_` or `-`, so intercepting
//! markers like `(.)photo` and any future marker syntax fall through to
//! [`SegmentKind::Retained`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::RouteKind;

/// `(name)` where name is one or more of `[a-zA-Z0-9_-]`
static ROUTE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([a-zA-Z0-9_-]+\)$").expect("route group pattern is valid"));

/// The four nested-convention file names, kind captured in the first group
static NESTED_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(page|layout|template|route)\.(tsx|ts|jsx|js)$")
        .expect("nested file pattern is valid")
});

/// Represents the role of a directory segment in the nested convention
///
/// # Examples
///
/// ```
/// use routejump_router::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("(marketing)"), SegmentKind::RouteGroup);
/// assert_eq!(classify_segment("@modal"), SegmentKind::ParallelSlot);
/// assert_eq!(classify_segment("_components"), SegmentKind::Private);
/// assert_eq!(classify_segment("(.)photo"), SegmentKind::Retained);
/// assert_eq!(classify_segment("[...slug]"), SegmentKind::Retained);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// `(name)`: organizes files, dropped from the URL
    RouteGroup,
    /// `@name`: named slot rendered by the parent layout, dropped from the URL
    ParallelSlot,
    /// `_name`: private folder, excludes everything beneath it
    Private,
    /// Static names, dynamic segments and intercepting markers
    Retained,
}

impl SegmentKind {
    /// Whether the segment appears in the URL
    pub fn is_retained(self) -> bool {
        matches!(self, SegmentKind::Retained)
    }
}

/// Classifies a directory segment (pure function)
///
/// # Rules (evaluated in order)
///
/// 1. **Private**: starts with `_`
/// 2. **Parallel slot**: starts with `@`
/// 3. **Route group**: exactly `(name)`, name from `[a-zA-Z0-9_-]+`
/// 4. **Retained**: anything else
pub fn classify_segment(segment: &str) -> SegmentKind {
    if segment.starts_with('_') {
        SegmentKind::Private
    } else if segment.starts_with('@') {
        SegmentKind::ParallelSlot
    } else if ROUTE_GROUP.is_match(segment) {
        SegmentKind::RouteGroup
    } else {
        SegmentKind::Retained
    }
}

/// Matches a file name against the nested-convention route files
///
/// Case-sensitive, whole-name match: `page.tsx` is a page, `Page.tsx`,
/// `page.test.tsx` and `page.tsx.bak` are not routes.
///
/// # Examples
///
/// ```
/// use routejump_router::route::pattern::match_nested_file;
/// use routejump_router::RouteKind;
///
/// assert_eq!(match_nested_file("layout.jsx"), Some(RouteKind::Layout));
/// assert_eq!(match_nested_file("loading.tsx"), None);
/// ```
pub fn match_nested_file(file_name: &str) -> Option<RouteKind> {
    let captures = NESTED_FILE.captures(file_name)?;
    match captures.get(1)?.as_str() {
        "page" => Some(RouteKind::Page),
        "layout" => Some(RouteKind::Layout),
        "template" => Some(RouteKind::Template),
        "route" => Some(RouteKind::Route),
        _ => None,
    }
}

/// Base names the flat convention reserves for the framework shell
pub const FLAT_RESERVED_FILES: [&str; 3] = ["_app", "_document", "_error"];

/// Base name that stands for its containing directory
pub const FLAT_INDEX_FILE: &str = "index";

/// First segment under which flat-convention files are request handlers
pub const FLAT_HANDLER_PREFIX: &str = "api";
