//! Nested-convention (`app/`) classifier
//!
//! A route is a folder; the file name decides what the file contributes.
//! Pure functional fold over directory segments, short-circuiting on the
//! first private folder.

use std::ops::ControlFlow;

use crate::path::normalize_separators;
use crate::route::pattern::{classify_segment, match_nested_file, SegmentKind};
use crate::{join_route_path, RouteEntry};

/// Directory segments that survive into the URL
#[derive(Default)]
struct RetainedSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> RetainedSegments<'a> {
    /// Folds one directory segment in, breaking out on a private folder
    fn with_segment(mut self, segment: &'a str) -> ControlFlow<(), Self> {
        let kind = classify_segment(segment);
        if kind == SegmentKind::Private {
            return ControlFlow::Break(());
        }
        if kind.is_retained() {
            self.segments.push(segment);
        }
        ControlFlow::Continue(self)
    }

    fn into_route_path(self) -> String {
        join_route_path(self.segments)
    }
}

/// Classifies a path relative to the nested-convention root (pure function)
///
/// Returns `None` when the file name is not one of `page`, `layout`,
/// `template`, `route` with a `.tsx`/`.ts`/`.jsx`/`.js` extension, or when
/// any directory segment is a private folder (`_name`).
///
/// # Examples
///
/// ```
/// use routejump_router::{classify_nested, RouteKind};
///
/// let entry = classify_nested("blog/[slug]/page.tsx").unwrap();
/// assert_eq!(entry.route_path(), "/blog/[slug]");
/// assert_eq!(entry.file_path(), "blog/[slug]/page.tsx");
/// assert_eq!(entry.kind(), RouteKind::Page);
///
/// // Route groups and parallel slots leave the URL
/// let entry = classify_nested("(shop)/@cart/checkout/layout.tsx").unwrap();
/// assert_eq!(entry.route_path(), "/checkout");
///
/// // Private folders hide their whole subtree
/// assert!(classify_nested("dashboard/_parts/page.tsx").is_none());
/// ```
pub fn classify_nested(path: &str) -> Option<RouteEntry> {
    let normalized = normalize_separators(path);
    let normalized: &str = &normalized;
    let (dirs, file_name) = match normalized.rsplit_once('/') {
        Some((dirs, file_name)) => (Some(dirs), file_name),
        None => (None, normalized),
    };

    let kind = match_nested_file(file_name)?;

    let retained = match dirs {
        Some(dirs) => dirs
            .split('/')
            .try_fold(RetainedSegments::default(), RetainedSegments::with_segment),
        None => ControlFlow::Continue(RetainedSegments::default()),
    };

    match retained {
        ControlFlow::Continue(retained) => Some(RouteEntry::new(
            retained.into_route_path(),
            normalized,
            kind,
        )),
        ControlFlow::Break(()) => None,
    }
}
