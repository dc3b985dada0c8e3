//! Precedence-based union of the two conventions' entries

use std::collections::HashSet;

use crate::sort::sort_entries;
use crate::{RouteEntry, RouteKind};

/// Merges nested-convention entries (`primary`) with flat-convention
/// entries (`secondary`)
///
/// Every primary entry is kept. A secondary entry is kept only if no primary
/// entry has the same route path **and** the same kind; same path with a
/// different kind keeps both. The result is sorted.
///
/// # Examples
///
/// ```
/// use routejump_router::{merge, RouteEntry, RouteKind};
///
/// let primary = vec![RouteEntry::new("/", "page.tsx", RouteKind::Page)];
/// let secondary = vec![RouteEntry::new("/", "index.tsx", RouteKind::Page)];
///
/// let merged = merge(&primary, &secondary);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].file_path(), "page.tsx");
/// ```
pub fn merge(primary: &[RouteEntry], secondary: &[RouteEntry]) -> Vec<RouteEntry> {
    let primary_keys: HashSet<(&str, RouteKind)> = primary
        .iter()
        .map(|e| (e.route_path(), e.kind()))
        .collect();

    let mut merged: Vec<RouteEntry> = primary.to_vec();
    merged.extend(
        secondary
            .iter()
            .filter(|e| !primary_keys.contains(&(e.route_path(), e.kind())))
            .cloned(),
    );

    sort_entries(&mut merged);
    merged
}

/// Merged routes plus the set of file paths that came from the nested convention
///
/// The nested set is what lets a caller resolve a chosen entry back to the
/// right convention root.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    nested_files: HashSet<String>,
}

impl RouteTable {
    /// Merges both conventions and remembers which file paths are nested
    ///
    /// # Examples
    ///
    /// ```
    /// use routejump_router::{discover_flat, discover_nested, RouteTable};
    ///
    /// let nested = discover_nested(["blog/layout.tsx"]);
    /// let flat = discover_flat(["blog.tsx"]);
    /// let table = RouteTable::new(&nested, &flat);
    ///
    /// assert_eq!(table.len(), 2);
    /// assert!(table.is_nested("blog/layout.tsx"));
    /// assert!(!table.is_nested("blog.tsx"));
    /// ```
    pub fn new(nested: &[RouteEntry], flat: &[RouteEntry]) -> Self {
        Self {
            routes: merge(nested, flat),
            nested_files: nested.iter().map(|e| e.file_path().to_string()).collect(),
        }
    }

    /// Sorted, merged entries
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Whether `file_path` was produced by the nested-convention classifier
    pub fn is_nested(&self, file_path: &str) -> bool {
        self.nested_files.contains(file_path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter()
    }
}
