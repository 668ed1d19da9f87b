use super::*;
use crate::router::routes::resolve;
use crate::state::storage::MemoryStorage;
use serde_json::json;

fn grant() -> LoginGrant {
    LoginGrant {
        token: "abc".to_owned(),
        roles: vec!["admin".to_owned()],
        permissions: vec!["users.view".to_owned(), "documents.view".to_owned()],
        user: Some(json!({ "id": 7, "name": "Dana" })),
    }
}

fn logged_in() -> SessionContext<MemoryStorage> {
    let mut ctx = SessionContext::restore(MemoryStorage::new());
    ctx.login(grant());
    ctx
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_anonymous_and_loading() {
    let session = Session::default();
    assert!(!session.is_logged_in());
    assert!(session.roles.is_empty());
    assert!(session.permissions.is_empty());
    assert!(session.loading);
}

#[test]
fn session_permission_and_role_lookups() {
    let ctx = logged_in();
    let session = ctx.session();
    assert!(session.has_permission("users.view"));
    assert!(!session.has_permission("users.edit"));
    assert!(session.has_role("admin"));
    assert!(!session.has_role("viewer"));
    assert_eq!(session.user_name(), Some("Dana"));
}

#[test]
fn session_has_any_permission_is_set_intersection() {
    let ctx = logged_in();
    let edit: BTreeSet<String> = ["users.edit".to_owned()].into();
    let either: BTreeSet<String> = ["users.edit".to_owned(), "documents.view".to_owned()].into();
    assert!(!ctx.session().has_any_permission(&edit));
    assert!(ctx.session().has_any_permission(&either));
    assert!(!ctx.session().has_any_permission(&BTreeSet::new()));
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_from_empty_storage_is_anonymous() {
    let ctx = SessionContext::restore(MemoryStorage::new());
    assert!(!ctx.is_logged_in());
    assert_eq!(ctx.session().user, None);
}

#[test]
fn restore_reads_persisted_fields() {
    let storage = MemoryStorage::with_entries([
        ("token", "abc"),
        ("roles", r#"["admin"]"#),
        ("permissions", r#"["users.view"]"#),
        ("user", r#"{"name":"Dana"}"#),
    ]);
    let ctx = SessionContext::restore(storage);
    assert!(ctx.is_logged_in());
    assert_eq!(ctx.session().roles, vec!["admin"]);
    assert_eq!(ctx.session().permissions, vec!["users.view"]);
    assert_eq!(ctx.session().user_name(), Some("Dana"));
}

#[test]
fn restore_degrades_malformed_lists_to_empty() {
    let storage = MemoryStorage::with_entries([
        ("token", "abc"),
        ("roles", "admin"),
        ("permissions", "{not json"),
        ("user", "{broken"),
    ]);
    let ctx = SessionContext::restore(storage);
    assert!(ctx.is_logged_in());
    assert!(ctx.session().roles.is_empty());
    assert!(ctx.session().permissions.is_empty());
    assert_eq!(ctx.session().user, None);
}

#[test]
fn restore_treats_wrong_json_shape_as_empty() {
    let storage = MemoryStorage::with_entries([("permissions", "[1, 2]"), ("user", "null")]);
    let ctx = SessionContext::restore(storage);
    assert!(ctx.session().permissions.is_empty());
    assert_eq!(ctx.session().user, None);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_every_field() {
    let ctx = logged_in();
    let storage = ctx.storage();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(storage.get(ROLES_KEY).as_deref(), Some(r#"["admin"]"#));
    assert_eq!(storage.get(PERMISSIONS_KEY).as_deref(), Some(r#"["users.view","documents.view"]"#));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn login_round_trips_through_restore() {
    let ctx = logged_in();
    let persisted: Vec<(&str, String)> =
        SESSION_KEYS.iter().filter_map(|k| ctx.storage().get(k).map(|v| (*k, v))).collect();
    let storage = MemoryStorage::with_entries(persisted.iter().map(|(k, v)| (*k, v.as_str())));
    let restored = SessionContext::restore(storage);
    assert_eq!(restored.session().token, ctx.session().token);
    assert_eq!(restored.session().permissions, ctx.session().permissions);
    assert_eq!(restored.session().user, ctx.session().user);
}

#[test]
fn login_without_user_drops_stale_user() {
    let mut ctx = logged_in();
    ctx.login(LoginGrant { token: "def".to_owned(), ..LoginGrant::default() });
    assert_eq!(ctx.session().user, None);
    assert_eq!(ctx.storage().get(USER_KEY), None);
    assert!(ctx.session().permissions.is_empty());
}

#[test]
fn logout_clears_memory_and_storage() {
    let mut ctx = logged_in();
    ctx.storage().set(REPORTS_KEY, "[]");
    ctx.logout();
    assert!(!ctx.is_logged_in());
    assert!(ctx.session().roles.is_empty());
    assert!(ctx.session().permissions.is_empty());
    assert_eq!(ctx.session().user, None);
    assert!(ctx.storage().is_empty());
}

#[test]
fn logout_keeps_unrelated_keys() {
    let mut ctx = SessionContext::restore(MemoryStorage::with_entries([("dark-mode", "true")]));
    ctx.login(grant());
    ctx.logout();
    assert_eq!(ctx.storage().get("dark-mode").as_deref(), Some("true"));
}

#[test]
fn set_loading_is_memory_only() {
    let mut ctx = logged_in();
    ctx.set_loading(false);
    assert!(!ctx.session().loading);
    assert_eq!(ctx.storage().len(), 4);
}

#[test]
fn restore_always_starts_loading() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "abc"), ("loading", "false")]);
    let ctx = SessionContext::restore(storage);
    assert!(ctx.is_logged_in());
    assert!(ctx.session().loading);
}

#[test]
fn login_grant_accepts_access_token_alias() {
    let grant: LoginGrant = serde_json::from_value(json!({ "access_token": "t" })).expect("decode");
    assert_eq!(grant.token, "t");
    assert!(grant.roles.is_empty());
    assert_eq!(grant.user, None);
}

// =============================================================
// Guard application
// =============================================================

#[test]
fn guard_on_reset_password_logs_out_and_allows() {
    let mut ctx = logged_in();
    let navigation = ctx.guard(&resolve("/auth/reset-password", ""));
    assert_eq!(navigation, Navigation::Allow);
    assert!(!ctx.is_logged_in());
    assert!(ctx.storage().is_empty());
}

#[test]
fn guard_on_root_with_stale_session_clears_it() {
    let storage = MemoryStorage::with_entries([("roles", r#"["admin"]"#), ("user", r#"{"name":"x"}"#)]);
    let mut ctx = SessionContext::restore(storage);
    let navigation = ctx.guard(&resolve("/", ""));
    assert_eq!(navigation, Navigation::Login { redirect: None });
    assert!(ctx.storage().is_empty());
}

#[test]
fn guard_without_side_effect_keeps_session() {
    let mut ctx = logged_in();
    let navigation = ctx.guard(&resolve("/roles", ""));
    assert_eq!(navigation, Navigation::Dashboard);
    assert!(ctx.is_logged_in());
}
