use super::*;

#[test]
fn route_names_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn guard_targets_exist_in_table() {
    assert_eq!(path_for(LOGIN_ROUTE), Some("/auth/login"));
    assert_eq!(path_for(DASHBOARD_ROUTE), Some("/dashboard"));
    assert_eq!(path_for(INDEX_ROUTE), Some("/"));
    assert_eq!(path_for(RESET_PASSWORD_ROUTE), Some("/auth/reset-password"));
}

#[test]
fn resolve_known_route_copies_metadata() {
    let to = resolve("/users", "");
    assert!(to.is_named("users"));
    assert!(!to.meta.requires_no_auth);
    let allowed = to.meta.permissions_allowed.expect("users is gated");
    assert!(allowed.contains("users.view"));
}

#[test]
fn resolve_public_route() {
    let to = resolve("/auth/login", "");
    assert!(to.meta.requires_no_auth);
    assert!(to.meta.permissions_allowed.is_none());
}

#[test]
fn resolve_builds_full_path_from_search() {
    assert_eq!(resolve("/documents", "?page=2").full_path, "/documents?page=2");
    assert_eq!(resolve("/documents", "page=2").full_path, "/documents?page=2");
    assert_eq!(resolve("/documents", "").full_path, "/documents");
}

#[test]
fn resolve_ignores_trailing_slash() {
    assert!(resolve("/dashboard/", "").is_named(DASHBOARD_ROUTE));
    assert!(resolve("", "").is_named(INDEX_ROUTE));
}

#[test]
fn resolve_detail_page_inherits_section_permissions() {
    let to = resolve("/roles/7/edit", "");
    assert_eq!(to.name, None);
    assert_eq!(to.path, "/roles/7/edit");
    assert!(to.meta.permissions_allowed.expect("inherited").contains("roles.view"));
}

#[test]
fn resolve_unknown_path_requires_auth_only() {
    let to = resolve("/nowhere", "");
    assert_eq!(to.name, None);
    assert!(!to.meta.requires_no_auth);
    assert!(to.meta.permissions_allowed.is_none());
}

#[test]
fn section_prefix_needs_segment_boundary() {
    // `/usersettings` is not below `/users`.
    assert!(resolve("/usersettings", "").meta.permissions_allowed.is_none());
}

#[test]
fn known_paths_cover_table_and_detail_pages() {
    assert!(is_known_path("/dashboard"));
    assert!(is_known_path("/users/42"));
    assert!(is_known_path("/"));
    assert!(!is_known_path("/nowhere"));
    assert!(!is_known_path("/usersx"));
}
