use super::*;
use crate::router::routes::resolve;

fn anonymous() -> Session {
    Session { token: String::new(), roles: Vec::new(), permissions: Vec::new(), user: None, loading: false }
}

fn signed_in(permissions: &[&str]) -> Session {
    Session {
        token: "abc".to_owned(),
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        ..anonymous()
    }
}

// =============================================================
// Rule 1: authentication required
// =============================================================

#[test]
fn unauthenticated_protected_route_redirects_with_return_path() {
    let to = RouteDescriptor::new("/documents");
    let decision = evaluate(&to, &anonymous());
    assert_eq!(decision.navigation, Navigation::Login { redirect: Some("/documents".to_owned()) });
    assert!(!decision.clear_session);

    let target = decision.navigation.target().expect("redirect");
    assert_eq!(target.name, "auth-login");
    assert_eq!(target.query, vec![("redirect".to_owned(), "/documents".to_owned())]);
}

#[test]
fn unauthenticated_redirect_carries_full_path_with_query() {
    let to = resolve("/users", "?page=3");
    let decision = evaluate(&to, &anonymous());
    assert_eq!(decision.navigation, Navigation::Login { redirect: Some("/users?page=3".to_owned()) });
}

#[test]
fn unauthenticated_root_clears_session_without_redirect_query() {
    let to = resolve("/", "");
    let decision = evaluate(&to, &anonymous());
    assert_eq!(decision.navigation, Navigation::Login { redirect: None });
    assert!(decision.clear_session);
}

#[test]
fn unauthenticated_auth_login_path_clears_session_without_redirect_query() {
    let to = RouteDescriptor::new("/auth-login");
    let decision = evaluate(&to, &anonymous());
    assert_eq!(decision.navigation, Navigation::Login { redirect: None });
    assert!(decision.clear_session);
    assert_eq!(decision.navigation.target().expect("redirect").query, Vec::new());
}

#[test]
fn unauthenticated_public_page_is_allowed() {
    let decision = evaluate(&resolve("/auth/login", ""), &anonymous());
    assert_eq!(decision, GuardDecision { navigation: Navigation::Allow, clear_session: false });
}

// =============================================================
// Rule 2: public-only pages
// =============================================================

#[test]
fn authenticated_login_page_goes_to_dashboard() {
    let decision = evaluate(&resolve("/auth/login", ""), &signed_in(&[]));
    assert_eq!(decision.navigation, Navigation::Dashboard);
    assert!(!decision.clear_session);
}

#[test]
fn authenticated_forgot_password_goes_to_dashboard() {
    let decision = evaluate(&resolve("/auth/forgot-password", ""), &signed_in(&[]));
    assert_eq!(decision.navigation, Navigation::Dashboard);
}

#[test]
fn authenticated_reset_password_clears_session_and_proceeds() {
    let decision = evaluate(&resolve("/auth/reset-password", "?token=t"), &signed_in(&["users.view"]));
    assert_eq!(decision.navigation, Navigation::Allow);
    assert!(decision.clear_session);
}

// =============================================================
// Rule 3: permissions
// =============================================================

#[test]
fn disjoint_permissions_go_to_dashboard() {
    let to = RouteDescriptor::new("/users/1/edit").permissions(["users.edit"]);
    let decision = evaluate(&to, &signed_in(&["users.view"]));
    assert_eq!(decision.navigation, Navigation::Dashboard);
    assert_eq!(decision.navigation.target().expect("redirect").name, "dashboard");
    assert!(!decision.clear_session);
}

#[test]
fn any_overlapping_permission_proceeds() {
    let to = RouteDescriptor::new("/users").permissions(["users.edit", "users.view"]);
    let decision = evaluate(&to, &signed_in(&["documents.view", "users.view"]));
    assert_eq!(decision.navigation, Navigation::Allow);
}

#[test]
fn empty_allowed_set_always_denies() {
    let to = RouteDescriptor::new("/locked").permissions(Vec::<String>::new());
    let decision = evaluate(&to, &signed_in(&["users.view"]));
    assert_eq!(decision.navigation, Navigation::Dashboard);
}

#[test]
fn route_without_permission_metadata_proceeds() {
    let decision = evaluate(&resolve("/profile", ""), &signed_in(&[]));
    assert_eq!(decision.navigation, Navigation::Allow);
}

// =============================================================
// Rule 4: index
// =============================================================

#[test]
fn authenticated_index_goes_to_dashboard() {
    let decision = evaluate(&resolve("/", ""), &signed_in(&[]));
    assert_eq!(decision.navigation, Navigation::Dashboard);
    assert!(!decision.clear_session);
}

#[test]
fn authenticated_dashboard_proceeds() {
    let decision = evaluate(&resolve("/dashboard", ""), &signed_in(&[]));
    assert_eq!(decision.navigation, Navigation::Allow);
    assert_eq!(decision.navigation.target(), None);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn evaluation_is_idempotent() {
    let routes = [
        resolve("/", ""),
        resolve("/documents", "?q=x"),
        resolve("/auth/reset-password", ""),
        resolve("/users", ""),
        RouteDescriptor::new("/auth-login"),
    ];
    let sessions = [anonymous(), signed_in(&[]), signed_in(&["users.view"])];
    for to in &routes {
        for session in &sessions {
            assert_eq!(evaluate(to, session), evaluate(to, session));
        }
    }
}

#[test]
fn evaluation_does_not_touch_session() {
    let session = signed_in(&["users.view"]);
    let before = session.clone();
    let _ = evaluate(&resolve("/auth/reset-password", ""), &session);
    assert_eq!(session, before);
}
