//! Resolution behavior of the declared route tables.

use bookadvisor::routing::pattern::Segment;
use bookadvisor::routing::{Page, Params, Resolution, Revision, Route, RouteTarget, Router};

mod common;

use common::{page_and_id, router};

/// Substitute a concrete value for every dynamic segment of a pattern.
fn concrete_path(route: &Route) -> String {
    let params: Params = route
        .pattern()
        .param_names()
        .map(|name| (name.to_string(), format!("{name}-value")))
        .collect();
    route.pattern().reverse(&params).unwrap()
}

#[test]
fn test_every_declared_route_resolves_from_its_pattern() {
    for revision in Revision::ALL {
        let router = router(revision);
        for route in router.routes() {
            let path = concrete_path(route);
            let resolution = router.resolve(&path);
            let matched = resolution
                .as_match()
                .unwrap_or_else(|| panic!("{revision}: {path} did not resolve"));

            match route.target() {
                RouteTarget::Page(page) => {
                    assert_eq!(matched.page, *page, "{revision}: {path}");
                    assert_eq!(matched.name, route.name());
                    for name in route.pattern().param_names() {
                        assert_eq!(matched.params[name], format!("{name}-value"));
                    }
                }
                RouteTarget::Redirect(target) => {
                    assert_eq!(router.resolve(target).page(), Some(matched.page));
                }
            }
        }
    }
}

#[test]
fn test_project_id() {
    let router = router(Revision::Current);
    assert_eq!(
        page_and_id(&router.resolve("/project/42")),
        Some((Page::Project, Some("42".to_string())))
    );
}

#[test]
fn test_project_map_requires_id() {
    let router = router(Revision::Current);
    assert_eq!(
        page_and_id(&router.resolve("/projectmap/7")),
        Some((Page::ProjectMap, Some("7".to_string())))
    );
    assert_eq!(
        router.resolve("/projectmap"),
        Resolution::NotFound {
            path: "/projectmap".to_string()
        }
    );
}

#[test]
fn test_project_book() {
    let router = router(Revision::Current);
    assert_eq!(
        page_and_id(&router.resolve("/projectbook/3")),
        Some((Page::ProjectBook, Some("3".to_string())))
    );
}

#[test]
fn test_root_renders_project_without_default_id() {
    let router = router(Revision::Current);
    let resolution = router.resolve("/");
    let matched = resolution.as_match().unwrap();
    assert_eq!(matched.page, Page::Project);
    assert!(matched.params.is_empty());
    assert!(matched.redirected_from.is_none());
}

#[test]
fn test_nonexistent_in_every_revision() {
    for revision in Revision::ALL {
        let resolution = router(revision).resolve("/nonexistent");
        assert!(!resolution.is_match(), "{revision}");
        assert_eq!(resolution.path(), "/nonexistent");
    }
}

#[test]
fn test_missing_id_falls_through() {
    for revision in [Revision::DefaultRedirect, Revision::Current] {
        let router = router(revision);
        assert!(!router.resolve("/project").is_match(), "{revision}");
        assert!(!router.resolve("/projectbook").is_match(), "{revision}");
        assert!(!router.resolve("/project/").is_match(), "{revision}");
    }
}

#[test]
fn test_extra_segments_do_not_match() {
    let router = router(Revision::Current);
    assert!(!router.resolve("/project/1/book").is_match());
    assert!(!router.resolve("/projectmap/1/2").is_match());
}

#[test]
fn test_trailing_slash_and_query() {
    let router = router(Revision::Current);
    let resolution = router.resolve("/project/4/?tab=notes#top");
    let matched = resolution.as_match().unwrap();
    assert_eq!(matched.params["id"], "4");
    assert_eq!(matched.query["tab"], "notes");
    assert_eq!(matched.fragment.as_deref(), Some("top"));
}

#[test]
fn test_initial_revision_root_only() {
    let router = router(Revision::Initial);
    assert_eq!(router.resolve("/").page(), Some(Page::ProjectMap));
    assert!(!router.resolve("/project/1").is_match());
}

#[test]
fn test_default_redirect_map_takes_no_id() {
    let router = router(Revision::DefaultRedirect);
    assert_eq!(router.resolve("/projectmap").page(), Some(Page::ProjectMap));
    assert!(!router.resolve("/projectmap/7").is_match());
}

#[test]
fn test_redirect_idempotence() {
    let router = router(Revision::DefaultRedirect);
    let via_redirect = router.resolve("/");
    let direct = router.resolve("/project/0");

    let a = via_redirect.as_match().unwrap();
    let b = direct.as_match().unwrap();
    assert_eq!(a.page, b.page);
    assert_eq!(a.params, b.params);
    assert_eq!(a.name, b.name);
    assert_eq!(a.path, b.path);
    assert_eq!(a.redirected_from.as_deref(), Some("/"));
    assert!(b.redirected_from.is_none());
}

#[test]
fn test_empty_path_follows_root() {
    let redirecting = router(Revision::DefaultRedirect);
    assert_eq!(
        page_and_id(&redirecting.resolve("")),
        Some((Page::Project, Some("0".to_string())))
    );

    let current = router(Revision::Current);
    assert_eq!(page_and_id(&current.resolve("")), Some((Page::Project, None)));
}

#[test]
fn test_overlapping_pair_declaration_order() {
    let specific_first = Router::new(vec![
        Route::page("featured-book", "/projectbook/featured", Page::ProjectBook).unwrap(),
        Route::page("project-of-book", "/projectbook/:id", Page::Project).unwrap(),
    ])
    .unwrap();
    assert_eq!(
        specific_first.resolve("/projectbook/featured").as_match().unwrap().name,
        "featured-book"
    );

    let generic_first = Router::new(vec![
        Route::page("project-of-book", "/projectbook/:id", Page::Project).unwrap(),
        Route::page("featured-book", "/projectbook/featured", Page::ProjectBook).unwrap(),
    ])
    .unwrap();
    let resolution = generic_first.resolve("/projectbook/featured");
    let matched = resolution.as_match().unwrap();
    assert_eq!(matched.name, "project-of-book");
    assert_eq!(matched.params["id"], "featured");
}

#[test]
fn test_segment_layout_of_current_table() {
    let router = router(Revision::Current);
    let map = router.route("projectmap").unwrap();
    assert_eq!(
        map.pattern().segments(),
        &[
            Segment::Literal("projectmap".to_string()),
            Segment::Param("id".to_string())
        ]
    );
}
