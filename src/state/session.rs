//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard on every transition and by the API layer to
//! attach the bearer token. Written by login, logout and forced logout on an
//! expired token. All persisted fields round-trip through [`SessionStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Persisted values are decoded defensively: unparsable role/permission
//! lists become empty and an unparsable user becomes `None`. Restoring a
//! session never fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

use super::storage::SessionStorage;
use crate::router::guard::{self, Navigation};
use crate::router::routes::RouteDescriptor;

pub const TOKEN_KEY: &str = "token";
pub const ROLES_KEY: &str = "roles";
pub const PERMISSIONS_KEY: &str = "permissions";
pub const USER_KEY: &str = "user";
pub const REPORTS_KEY: &str = "reports";

/// Every key owned by the session. Logout clears all of them.
pub const SESSION_KEYS: [&str; 5] = [TOKEN_KEY, ROLES_KEY, PERMISSIONS_KEY, USER_KEY, REPORTS_KEY];

/// Credentials and authorization data for the current user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
    pub user: Option<Value>,
    /// UI loading flag; not persisted.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { token: String::new(), roles: Vec::new(), permissions: Vec::new(), user: None, loading: true }
    }
}

impl Session {
    /// True iff a non-empty token is held.
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// True iff the session's permissions intersect `allowed`.
    pub fn has_any_permission(&self, allowed: &BTreeSet<String>) -> bool {
        self.permissions.iter().any(|p| allowed.contains(p))
    }

    /// Display name from the cached user profile, if present.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref()?.get("name")?.as_str()
    }
}

/// Payload returned by a successful login.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginGrant {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

/// Owner of the live [`Session`] and its persistence backend.
///
/// Constructed once at bootstrap with [`SessionContext::restore`]; every
/// mutation writes through to storage before returning, so a completed
/// `logout` is always visible to the next guard evaluation.
#[derive(Debug)]
pub struct SessionContext<S> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionContext<S> {
    /// Rebuild the session from whatever `storage` currently holds.
    pub fn restore(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY).unwrap_or_default();
        let roles = decode_list(ROLES_KEY, storage.get(ROLES_KEY));
        let permissions = decode_list(PERMISSIONS_KEY, storage.get(PERMISSIONS_KEY));
        let user = decode_user(storage.get(USER_KEY));
        let session = Session { token, roles, permissions, user, loading: true };
        Self { session, storage }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Install a freshly granted session and persist every field.
    pub fn login(&mut self, grant: LoginGrant) {
        self.set_token(grant.token);
        self.set_roles(grant.roles);
        self.set_permissions(grant.permissions);
        match grant.user {
            Some(user) => self.set_user(user),
            None => {
                self.session.user = None;
                self.storage.clear(USER_KEY);
            }
        }
        log::info!("session established");
    }

    pub fn set_token(&mut self, token: String) {
        self.storage.set(TOKEN_KEY, &token);
        self.session.token = token;
    }

    pub fn set_roles(&mut self, roles: Vec<String>) {
        self.storage.set(ROLES_KEY, &encode_list(&roles));
        self.session.roles = roles;
    }

    pub fn set_permissions(&mut self, permissions: Vec<String>) {
        self.storage.set(PERMISSIONS_KEY, &encode_list(&permissions));
        self.session.permissions = permissions;
    }

    pub fn set_user(&mut self, user: Value) {
        self.storage.set(USER_KEY, &user.to_string());
        self.session.user = Some(user);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.session.loading = loading;
    }

    /// Clear the in-memory session and every persisted session key.
    pub fn logout(&mut self) {
        for key in SESSION_KEYS {
            self.storage.clear(key);
        }
        let loading = self.session.loading;
        self.session = Session { loading, ..Session::default() };
        log::info!("session cleared");
    }

    /// Evaluate the route guard for `to` and apply its session side effect.
    pub fn guard(&mut self, to: &RouteDescriptor) -> Navigation {
        let decision = guard::evaluate(to, &self.session);
        if decision.clear_session {
            self.logout();
        }
        decision.navigation
    }
}

fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_owned())
}

/// Decode a persisted JSON string list; anything unparsable is empty.
fn decode_list(key: &str, raw: Option<String>) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("discarding malformed persisted {key}: {e}");
            Vec::new()
        }
    }
}

fn decode_user(raw: Option<String>) -> Option<Value> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => None,
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding malformed persisted user: {e}");
            None
        }
    }
}
