//! Integration tests comparing routejump-router with Next.js file conventions
//!
//! Each case documents the file layout of a Next.js project and the URL the
//! framework serves it at. Paths are relative to `app/` or `pages/`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use routejump_router::*;

fn entry(route_path: &str, file_path: &str, kind: RouteKind) -> RouteEntry {
    RouteEntry::new(route_path, file_path, kind)
}

// ============================================================================
// App Router (nested convention)
// ============================================================================

#[rstest]
#[case("page.tsx", "/", RouteKind::Page)]
#[case("blog/page.tsx", "/blog", RouteKind::Page)]
#[case("blog/[slug]/page.tsx", "/blog/[slug]", RouteKind::Page)]
#[case("shop/[...slug]/page.tsx", "/shop/[...slug]", RouteKind::Page)]
#[case("docs/[[...slug]]/page.jsx", "/docs/[[...slug]]", RouteKind::Page)]
#[case("(web)/layout.tsx", "/", RouteKind::Layout)]
#[case("(web)/blog/layout.tsx", "/blog", RouteKind::Layout)]
#[case("(app)/(dashboard)/template.tsx", "/", RouteKind::Template)]
#[case("dashboard/(admin)/[id]/page.tsx", "/dashboard/[id]", RouteKind::Page)]
#[case("dashboard/@analytics/page.tsx", "/dashboard", RouteKind::Page)]
#[case("@modal/(.)photo/[id]/page.tsx", "/(.)photo/[id]", RouteKind::Page)]
#[case("feed/(..)photo/[id]/page.tsx", "/feed/(..)photo/[id]", RouteKind::Page)]
#[case("(...)login/page.tsx", "/(...)login", RouteKind::Page)]
#[case("api/users/route.ts", "/api/users", RouteKind::Route)]
#[case("(api)/health/route.js", "/health", RouteKind::Route)]
fn test_app_router_routes(#[case] path: &str, #[case] route_path: &str, #[case] kind: RouteKind) {
    assert_eq!(classify_nested(path), Some(entry(route_path, path, kind)));
}

#[rstest]
#[case("blog/loading.tsx")]
#[case("blog/error.tsx")]
#[case("not-found.tsx")]
#[case("components/Button.tsx")]
#[case("page.mdx")]
#[case("page.test.tsx")]
#[case("Page.tsx")]
#[case("_components/page.tsx")]
#[case("dashboard/_lib/layout.tsx")]
#[case("(group)/_private/deep/nested/route.ts")]
#[case("@slot/_hidden/page.tsx")]
fn test_app_router_non_routes(#[case] path: &str) {
    assert_eq!(classify_nested(path), None);
}

#[test]
fn test_app_router_only_drops_groups_and_slots() {
    // Every segment is retained except exact (name) groups and @slots
    let entry = classify_nested("a/(g)/@s/(.)b/(g h)/(g)x/[c]/page.tsx").unwrap();
    assert_eq!(entry.route_path(), "/a/(.)b/(g h)/(g)x/[c]");
}

// ============================================================================
// Pages Router (flat convention)
// ============================================================================

#[rstest]
#[case("index.tsx", "/", RouteKind::Page)]
#[case("about.tsx", "/about", RouteKind::Page)]
#[case("blog/index.tsx", "/blog", RouteKind::Page)]
#[case("blog/[slug].tsx", "/blog/[slug]", RouteKind::Page)]
#[case("[...slug].tsx", "/[...slug]", RouteKind::Page)]
#[case("[[...slug]].tsx", "/[[...slug]]", RouteKind::Page)]
#[case("api/users.ts", "/api/users", RouteKind::Route)]
#[case("api/index.js", "/api", RouteKind::Route)]
#[case("(group)/about.tsx", "/(group)/about", RouteKind::Page)]
fn test_pages_router_routes(#[case] path: &str, #[case] route_path: &str, #[case] kind: RouteKind) {
    assert_eq!(classify_flat(path), Some(entry(route_path, path, kind)));
}

#[rstest]
#[case("_app.tsx")]
#[case("_document.jsx")]
#[case("_error.js")]
#[case("admin/_app.tsx")]
#[case("styles/globals.css")]
#[case("post.md")]
fn test_pages_router_non_routes(#[case] path: &str) {
    assert_eq!(classify_flat(path), None);
}

// ============================================================================
// Discovery and merge
// ============================================================================

#[test]
fn test_discover_and_merge_mixed_project() {
    let nested = discover_nested([
        "layout.tsx",
        "page.tsx",
        "(marketing)/about/page.tsx",
        "dashboard/layout.tsx",
        "dashboard/page.tsx",
        "dashboard/_widgets/page.tsx",
        "api/health/route.ts",
        "globals.css",
    ]);
    let flat = discover_flat([
        "_app.tsx",
        "_document.tsx",
        "index.tsx",
        "legacy.tsx",
        "dashboard.tsx",
        "api/health.ts",
        "api/users.ts",
    ]);

    let merged = merge(&nested, &flat);
    let got: Vec<(&str, RouteKind, &str)> = merged
        .iter()
        .map(|e| (e.route_path(), e.kind(), e.file_path()))
        .collect();

    assert_eq!(
        got,
        vec![
            ("/", RouteKind::Page, "page.tsx"),
            ("/", RouteKind::Layout, "layout.tsx"),
            ("/about", RouteKind::Page, "(marketing)/about/page.tsx"),
            ("/api/health", RouteKind::Route, "api/health/route.ts"),
            ("/api/users", RouteKind::Route, "api/users.ts"),
            ("/dashboard", RouteKind::Page, "dashboard/page.tsx"),
            ("/dashboard", RouteKind::Layout, "dashboard/layout.tsx"),
            ("/legacy", RouteKind::Page, "legacy.tsx"),
        ]
    );
}

#[test]
fn test_merge_keeps_flat_page_under_nested_layout() {
    let merged = merge(
        &[entry("/d", "d/layout.tsx", RouteKind::Layout)],
        &[entry("/d", "d.tsx", RouteKind::Page)],
    );
    assert_eq!(
        merged,
        vec![
            entry("/d", "d.tsx", RouteKind::Page),
            entry("/d", "d/layout.tsx", RouteKind::Layout),
        ]
    );
}

#[test]
fn test_merged_output_is_ordered() {
    let nested = discover_nested([
        "Zeta/page.tsx",
        "alpha/route.ts",
        "alpha/page.tsx",
        "[id]/template.tsx",
        "2024/page.tsx",
    ]);
    let flat = discover_flat(["beta.tsx", "Alpha.tsx", "api/x.ts", "index.js"]);
    let merged = merge(&nested, &flat);

    for pair in merged.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let path_order = compare_route_paths(a.route_path(), b.route_path());
        assert!(
            path_order.is_lt()
                || (path_order.is_eq() && a.kind().priority() <= b.kind().priority()),
            "{a:?} before {b:?}"
        );
    }

    let mut resorted = merged.clone();
    sort_entries(&mut resorted);
    assert_eq!(resorted, merged);
}

#[test]
fn test_route_table_resolves_origin() {
    let groups = group_by_root(
        [
            "/work/site/src/app/blog/page.tsx",
            "/work/site/src/app/layout.tsx",
        ],
        "app",
    );
    let nested = discover_nested(&groups[0].relative_paths);
    let flat = discover_flat(["blog.tsx"]);
    let table = RouteTable::new(&nested, &flat);

    assert_eq!(table.len(), 3);
    assert!(table.is_nested("blog/page.tsx"));
    assert!(table.is_nested("layout.tsx"));
    assert!(!table.is_nested("blog.tsx"));
}
