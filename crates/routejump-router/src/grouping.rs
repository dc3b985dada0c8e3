//! Grouping of discovered files by convention root
//!
//! Input preparation for the classifiers: a project may keep its routes in
//! `app/` or `src/app/` (likewise `pages/`), and a workspace may contain more
//! than one project. Files are grouped under the nearest root so each group's
//! paths can be classified relative to it.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Files found under one convention root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootGroup {
    /// The convention root directory, e.g. `/work/site/src/app`
    pub root: PathBuf,
    /// File paths relative to `root`, `/`-separated
    pub relative_paths: Vec<String>,
}

/// Finds the convention root (`dir_name`) a file lives under
///
/// A `src/<dir_name>` directory is preferred over a bare `<dir_name>` one.
/// Among candidates of the same kind the outermost wins. The root must be a
/// directory above the file, never the file itself.
///
/// # Examples
///
/// ```
/// use routejump_router::find_convention_root;
/// use std::path::{Path, PathBuf};
///
/// let root = find_convention_root(Path::new("/site/src/app/blog/page.tsx"), "app");
/// assert_eq!(root, Some(PathBuf::from("/site/src/app")));
///
/// let root = find_convention_root(Path::new("/site/pages/index.tsx"), "pages");
/// assert_eq!(root, Some(PathBuf::from("/site/pages")));
///
/// assert_eq!(find_convention_root(Path::new("/site/lib/app.ts"), "app"), None);
/// ```
pub fn find_convention_root(file: &Path, dir_name: &str) -> Option<PathBuf> {
    let components: Vec<Component<'_>> = file.components().collect();
    let is_named = |i: usize, name: &str| {
        matches!(components.get(i), Some(Component::Normal(c)) if *c == name)
    };
    // The root must have at least the file below it
    let dir_count = components.len().saturating_sub(1);

    let src_index = (1..dir_count).find(|&i| is_named(i - 1, "src") && is_named(i, dir_name));
    let index = src_index.or_else(|| (0..dir_count).find(|&i| is_named(i, dir_name)))?;

    Some(components[..=index].iter().collect())
}

/// Groups files by convention root, in first-seen root order
///
/// Files without a root are skipped. Paths within a group keep input order.
///
/// # Examples
///
/// ```
/// use routejump_router::group_by_root;
/// use std::path::PathBuf;
///
/// let groups = group_by_root(
///     ["/a/app/page.tsx", "/b/src/app/x/page.tsx", "/a/app/y/page.tsx"],
///     "app",
/// );
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].root, PathBuf::from("/a/app"));
/// assert_eq!(groups[0].relative_paths, vec!["page.tsx", "y/page.tsx"]);
/// assert_eq!(groups[1].relative_paths, vec!["x/page.tsx"]);
/// ```
pub fn group_by_root<I>(files: I, dir_name: &str) -> Vec<RootGroup>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut groups: Vec<RootGroup> = Vec::new();
    let mut index_by_root: HashMap<PathBuf, usize> = HashMap::new();

    for file in files {
        let file = file.as_ref();
        let Some(root) = find_convention_root(file, dir_name) else {
            tracing::trace!(file = %file.display(), dir_name, "no convention root");
            continue;
        };
        let Some(relative) = relative_path(file, &root) else {
            tracing::debug!(file = %file.display(), "skipping non UTF-8 path");
            continue;
        };

        let index = *index_by_root.entry(root.clone()).or_insert_with(|| {
            groups.push(RootGroup {
                root,
                relative_paths: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].relative_paths.push(relative);
    }

    groups
}

/// `/`-joined path of `file` below `root`
///
/// `None` when any component is not valid UTF-8: a lossy name would not
/// resolve back to the file.
fn relative_path(file: &Path, root: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<&str>>>()?;
    Some(segments.join("/"))
}
