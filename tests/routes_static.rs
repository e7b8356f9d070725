use segment_router_rs::{ErrorKind, Tree, TreeError};

#[test]
fn tree_when_static_route_registered_then_matches_exact_path() {
    let mut tree = Tree::new();
    tree.insert("/hello/world", "hello")
        .expect("static route should register");

    let found = tree
        .match_first("/hello/world")
        .expect("static route should match");
    assert_eq!(*found.handler, "hello");
    assert!(found.bindings.is_empty());
    assert_eq!(found.depth(), 2);
}

#[test]
fn tree_when_path_has_extra_slashes_then_still_matches() {
    let mut tree = Tree::new();
    tree.insert("/a/b", 1).expect("route should register");

    assert!(tree.match_first("//a///b/").is_some());
    assert!(tree.match_first("a/b").is_some());
}

#[test]
fn tree_when_prefix_only_then_no_match() {
    let mut tree = Tree::new();
    tree.insert("/a/b", 1).expect("route should register");

    assert!(tree.match_first("/a").is_none());
    assert!(tree.match_first("/a/b/c").is_none());
    assert!(tree.match_all("/a").is_empty());
}

#[test]
fn tree_when_path_is_empty_then_no_results_in_any_mode() {
    let mut tree = Tree::new();
    tree.insert("/*rest", "catch").expect("catch-all should register");

    assert!(tree.match_first("").is_none());
    assert!(tree.match_all("/").is_empty());
    let (first, all) = tree.match_both("///");
    assert!(first.is_none());
    assert!(all.is_empty());
}

#[test]
fn tree_when_matching_is_case_sensitive_then_other_case_misses() {
    let mut tree = Tree::new();
    tree.insert("/Users", 1).expect("route should register");

    assert!(tree.match_first("/users").is_none());
    assert!(tree.match_first("/Users").is_some());
}

#[test]
fn tree_when_pattern_empty_then_returns_invalid_argument() {
    let mut tree = Tree::new();
    let err = tree.insert("//", 1).expect_err("empty pattern must fail");

    assert!(matches!(err, TreeError::EmptyPattern { ref pattern } if pattern == "//"));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn tree_when_equivalent_patterns_registered_with_same_handler_then_idempotent() {
    let mut tree = Tree::new();
    tree.insert("/a//b/", "h").expect("first insert should succeed");
    tree.insert("/a/b", "h")
        .expect("same handler at the normalized pattern is not a duplicate");

    assert_eq!(tree.len(), 1);
}

#[test]
fn tree_when_equivalent_patterns_registered_with_different_handlers_then_duplicate() {
    let mut tree = Tree::new();
    tree.insert("/a//b/", "first").expect("first insert should succeed");

    let err = tree
        .insert("/a/b", "second")
        .expect_err("different handler must be rejected");
    match err {
        TreeError::DuplicateRoute { ref pattern } => assert_eq!(pattern, "/a/b"),
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::DuplicateRoute);

    let found = tree.match_first("/a/b").expect("original route should remain");
    assert_eq!(*found.handler, "first");
}

#[test]
fn tree_when_static_and_param_compete_then_static_wins() {
    let mut tree = Tree::new();
    tree.insert("/user/:id", "param").expect("param route should register");
    tree.insert("/user/list", "static")
        .expect("static route should register");

    let found = tree.match_first("/user/list").expect("route should match");
    assert_eq!(*found.handler, "static");
    assert!(found.bindings.is_empty());

    let found = tree.match_first("/user/42").expect("route should match");
    assert_eq!(*found.handler, "param");
    assert_eq!(found.bindings.get("id"), Some("42"));
}

#[test]
fn tree_when_many_static_routes_then_each_resolves() {
    let mut tree = Tree::new();
    for i in 0..200 {
        tree.insert(&format!("/bulk/{i}/leaf"), i)
            .expect("bulk route should register");
    }

    assert_eq!(tree.len(), 200);
    for i in (0..200).step_by(17) {
        let found = tree
            .match_first(&format!("/bulk/{i}/leaf"))
            .expect("bulk route should match");
        assert_eq!(*found.handler, i);
    }
}
