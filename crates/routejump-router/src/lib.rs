//! # Routejump Router
//!
//! Route inference for Next.js-style file-system routing. Two conventions are
//! supported side by side:
//! - **Nested** (`app/`): a route is a folder, the file name says what the
//!   file contributes (`page`, `layout`, `template`, `route`)
//! - **Flat** (`pages/`): every script file is a route, named after its path
//!
//! Both classifiers turn a path relative to its convention root into at most
//! one [`RouteEntry`]. Results are sorted with [`sort_entries`] and combined
//! with [`merge`], where the nested convention wins exact collisions.
//!
//! ## Segment Handling (nested convention)
//!
//! - Route groups `(name)` → stripped from the URL, files included
//! - Parallel slots `@name` → stripped from the URL, files included
//! - Private folders `_name` → whole subtree excluded
//! - Intercepting markers `(.)name`, `(..)name`, `(...)name` → kept verbatim
//! - Dynamic `[id]`, catch-all `[...slug]`, optional `[[...slug]]` → kept verbatim
//!
//! ## Example
//!
//! ```
//! use routejump_router::{discover_flat, discover_nested, merge, RouteKind};
//!
//! let nested = discover_nested(["page.tsx", "(shop)/cart/page.tsx", "_lib/page.tsx"]);
//! let flat = discover_flat(["index.tsx", "api/users.ts", "_app.tsx"]);
//!
//! let routes = merge(&nested, &flat);
//! let paths: Vec<&str> = routes.iter().map(|r| r.route_path()).collect();
//! assert_eq!(paths, vec!["/", "/api/users", "/cart"]);
//! assert_eq!(routes[0].file_path(), "page.tsx");
//! assert_eq!(routes[1].kind(), RouteKind::Route);
//! ```
//!
//! All operations are pure functions over strings: no I/O, no shared state,
//! safe to call from any number of threads.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod grouping;
mod merge;
pub mod path;
pub mod route;
mod sort;

pub use grouping::{find_convention_root, group_by_root, RootGroup};
pub use merge::{merge, RouteTable};
pub use path::normalize_separators;
pub use route::flat::classify_flat;
pub use route::nested::classify_nested;
pub use route::pattern::{classify_segment, SegmentKind};
pub use sort::{compare_entries, compare_route_paths, sort_entries};

// ============================================================================
// Core Types
// ============================================================================

/// What a route file contributes to its URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// UI for the route (`page.tsx`, or any flat-convention page)
    Page,
    /// Shared UI wrapping the route and its children
    Layout,
    /// Like a layout, but re-mounted on navigation
    Template,
    /// Request handler, not UI (`route.ts`, or `pages/api/*`)
    Route,
}

impl RouteKind {
    /// Tie-break priority when two entries share a route path (lower sorts first)
    pub fn priority(self) -> u8 {
        match self {
            RouteKind::Page => 0,
            RouteKind::Layout => 1,
            RouteKind::Template => 2,
            RouteKind::Route => 3,
        }
    }

    /// The file-name stem that marks this kind in the nested convention
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Page => "page",
            RouteKind::Layout => "layout",
            RouteKind::Template => "template",
            RouteKind::Route => "route",
        }
    }

    /// Human-readable label used when listing routes
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Route => "route handler",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inferred route
///
/// Produced only by [`classify_nested`] and [`classify_flat`]; immutable
/// afterwards. `file_path` stays relative to the convention root it was
/// collected under so it can be resolved back to a file later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    route_path: String,
    file_path: String,
    #[serde(rename = "type")]
    kind: RouteKind,
}

impl RouteEntry {
    /// Creates an entry from its parts
    ///
    /// # Examples
    ///
    /// ```
    /// use routejump_router::{RouteEntry, RouteKind};
    ///
    /// let entry = RouteEntry::new("/blog", "blog/page.tsx", RouteKind::Page);
    /// assert_eq!(entry.route_path(), "/blog");
    /// ```
    pub fn new(
        route_path: impl Into<String>,
        file_path: impl Into<String>,
        kind: RouteKind,
    ) -> Self {
        Self {
            route_path: route_path.into(),
            file_path: file_path.into(),
            kind,
        }
    }

    /// URL path, always starting with `/`
    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    /// Source file, `/`-separated, relative to its convention root
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Description shown next to the route path, e.g. `[page] blog/page.tsx`
    pub fn description(&self) -> String {
        format!("[{}] {}", self.kind.label(), self.file_path)
    }
}

/// Builds `/` + segments joined by `/`
pub(crate) fn join_route_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut route_path = String::from("/");
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            route_path.push('/');
        }
        route_path.push_str(segment);
    }
    route_path
}

// ============================================================================
// Discovery
// ============================================================================

/// Classifies every path with [`classify_nested`], drops non-routes, and sorts
///
/// Paths must be relative to the nested-convention root (the `app/` folder).
pub fn discover_nested<I>(paths: I) -> Vec<RouteEntry>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    discover(paths, classify_nested, "nested")
}

/// Classifies every path with [`classify_flat`], drops non-routes, and sorts
///
/// Paths must be relative to the flat-convention root (the `pages/` folder).
pub fn discover_flat<I>(paths: I) -> Vec<RouteEntry>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    discover(paths, classify_flat, "flat")
}

fn discover<I, F>(paths: I, classify: F, convention: &str) -> Vec<RouteEntry>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> Option<RouteEntry>,
{
    let mut seen = 0usize;
    let mut entries: Vec<RouteEntry> = paths
        .into_iter()
        .filter_map(|path| {
            seen += 1;
            let path = path.as_ref();
            let entry = classify(path);
            if entry.is_none() {
                tracing::trace!(path, convention, "not a route");
            }
            entry
        })
        .collect();

    sort_entries(&mut entries);
    tracing::debug!(convention, files = seen, routes = entries.len(), "discovered routes");
    entries
}
