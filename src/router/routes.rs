//! Page table and route descriptors.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeSet;

pub const INDEX_ROUTE: &str = "index";
pub const LOGIN_ROUTE: &str = "auth-login";
pub const RESET_PASSWORD_ROUTE: &str = "auth-reset-password";
pub const FORGOT_PASSWORD_ROUTE: &str = "auth-forgot-password";
pub const DASHBOARD_ROUTE: &str = "dashboard";

/// Access requirements declared by a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Public-only page (login, password reset); authenticated users are bounced.
    pub requires_no_auth: bool,
    /// When present, the session must hold at least one of these.
    pub permissions_allowed: Option<BTreeSet<String>>,
}

/// The target of a navigation attempt as seen by the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: Option<String>,
    pub path: String,
    /// Path plus query string, used for post-login return navigation.
    pub full_path: String,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// An anonymous route at `path` that requires authentication.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self { name: None, full_path: path.clone(), path, meta: RouteMeta::default() }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn public_only(mut self) -> Self {
        self.meta.requires_no_auth = true;
        self
    }

    #[must_use]
    pub fn permissions<I, P>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.meta.permissions_allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// Set `full_path` from a location search string (with or without `?`).
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim_start_matches('?');
        self.full_path =
            if search.is_empty() { self.path.clone() } else { format!("{}?{search}", self.path) };
        self
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Static entry in the page table.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub requires_no_auth: bool,
    pub permissions: &'static [&'static str],
}

const fn page(name: &'static str, path: &'static str, title: &'static str) -> RouteEntry {
    RouteEntry { name, path, title, requires_no_auth: false, permissions: &[] }
}

const fn public(name: &'static str, path: &'static str, title: &'static str) -> RouteEntry {
    RouteEntry { name, path, title, requires_no_auth: true, permissions: &[] }
}

const fn gated(
    name: &'static str,
    path: &'static str,
    title: &'static str,
    permissions: &'static [&'static str],
) -> RouteEntry {
    RouteEntry { name, path, title, requires_no_auth: false, permissions }
}

pub const ROUTES: &[RouteEntry] = &[
    page(INDEX_ROUTE, "/", "Welcome"),
    public(LOGIN_ROUTE, "/auth/login", "Sign in"),
    public(FORGOT_PASSWORD_ROUTE, "/auth/forgot-password", "Forgot password"),
    public(RESET_PASSWORD_ROUTE, "/auth/reset-password", "Reset password"),
    page(DASHBOARD_ROUTE, "/dashboard", "Dashboard"),
    page("profile", "/profile", "Profile"),
    gated("tenants", "/tenants", "Tenants", &["tenants.view"]),
    gated("tenant-settings", "/tenant-settings", "Tenant settings", &["tenant_settings.view"]),
    gated("users", "/users", "Users", &["users.view"]),
    gated("roles", "/roles", "Roles", &["roles.view"]),
    gated("documents", "/documents", "Documents", &["documents.view"]),
    gated("udfs", "/udfs", "Custom fields", &["udfs.view"]),
    gated("report-builders", "/report-builders", "Report builder", &["report_builders.view"]),
    gated("reports", "/reports", "Reports", &["custom_reports.view"]),
];

impl RouteEntry {
    pub fn descriptor(&self) -> RouteDescriptor {
        let mut descriptor = RouteDescriptor::new(self.path).named(self.name);
        descriptor.meta.requires_no_auth = self.requires_no_auth;
        if !self.permissions.is_empty() {
            descriptor = descriptor.permissions(self.permissions.iter().copied());
        }
        descriptor
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

pub fn find_by_path(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

pub fn find_by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Path for a named route.
pub fn path_for(name: &str) -> Option<&'static str> {
    find_by_name(name).map(|r| r.path)
}

/// Longest gated section whose path prefixes `path` (`/users/42` -> `users`).
fn find_section(path: &str) -> Option<&'static RouteEntry> {
    ROUTES
        .iter()
        .filter(|r| r.path != "/" && !r.permissions.is_empty())
        .filter(|r| path.strip_prefix(r.path).is_some_and(|rest| rest.starts_with('/')))
        .max_by_key(|r| r.path.len())
}

/// True for a page in the table or a detail page below a gated section.
pub fn is_known_path(path: &str) -> bool {
    let normalized = normalize_path(path);
    find_by_path(normalized).is_some() || find_section(normalized).is_some()
}

/// Resolve a browser location into a descriptor.
///
/// Detail pages below a gated section inherit its permissions but stay
/// anonymous. Any other unknown path requires authentication only.
pub fn resolve(path: &str, search: &str) -> RouteDescriptor {
    let normalized = normalize_path(path);
    let descriptor = if let Some(entry) = find_by_path(normalized) {
        entry.descriptor()
    } else if let Some(section) = find_section(normalized) {
        RouteDescriptor::new(normalized).permissions(section.permissions.iter().copied())
    } else {
        RouteDescriptor::new(normalized)
    };
    descriptor.with_search(search)
}
