//! Navigation guard evaluated before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is a pure function of the target route and the current
//! session. It never mutates anything itself: when a transition must also
//! end the session, the decision says so and the caller
//! (`SessionContext::guard`) performs the logout before navigating. Calling
//! [`evaluate`] twice with the same inputs yields the same decision.
//!
//! Rules, first match wins:
//! 1. auth required, no session: go to login (with `redirect` unless the
//!    target is a public entry point, in which case the session is cleared).
//! 2. public-only page, session present: password reset clears the session
//!    and proceeds; anything else goes to the dashboard.
//! 3. declared permissions disjoint from the session's: dashboard.
//! 4. authenticated visit to the index page: dashboard.
//! 5. otherwise proceed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{DASHBOARD_ROUTE, INDEX_ROUTE, LOGIN_ROUTE, RouteDescriptor};
use super::target::NavigationTarget;
use crate::state::session::Session;

/// Paths that never get a `redirect` query when bouncing to login.
pub const LOGIN_EXCLUDED_PATHS: [&str; 2] = ["/", "/auth-login"];
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";
pub const REDIRECT_QUERY: &str = "redirect";

/// Outcome of a single transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Login { redirect: Option<String> },
    Dashboard,
}

impl Navigation {
    /// Redirect target, or `None` when navigation proceeds unchanged.
    pub fn target(&self) -> Option<NavigationTarget> {
        match self {
            Self::Allow => None,
            Self::Login { redirect: None } => Some(NavigationTarget::new(LOGIN_ROUTE)),
            Self::Login { redirect: Some(path) } => {
                Some(NavigationTarget::new(LOGIN_ROUTE).with_query(REDIRECT_QUERY, path.clone()))
            }
            Self::Dashboard => Some(NavigationTarget::new(DASHBOARD_ROUTE)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub navigation: Navigation,
    /// Full logout must complete before navigating.
    pub clear_session: bool,
}

impl GuardDecision {
    fn go(navigation: Navigation) -> Self {
        Self { navigation, clear_session: false }
    }

    fn logout_then(navigation: Navigation) -> Self {
        Self { navigation, clear_session: true }
    }
}

/// Decide the transition to `to` for `session`.
pub fn evaluate(to: &RouteDescriptor, session: &Session) -> GuardDecision {
    let authenticated = session.is_logged_in();
    let requires_auth = !to.meta.requires_no_auth;

    let decision = if requires_auth && !authenticated {
        if LOGIN_EXCLUDED_PATHS.contains(&to.path.as_str()) {
            GuardDecision::logout_then(Navigation::Login { redirect: None })
        } else {
            GuardDecision::go(Navigation::Login { redirect: Some(to.full_path.clone()) })
        }
    } else if to.meta.requires_no_auth && authenticated {
        if to.path == RESET_PASSWORD_PATH {
            GuardDecision::logout_then(Navigation::Allow)
        } else {
            GuardDecision::go(Navigation::Dashboard)
        }
    } else if to.meta.permissions_allowed.as_ref().is_some_and(|allowed| !session.has_any_permission(allowed)) {
        GuardDecision::go(Navigation::Dashboard)
    } else if authenticated && to.is_named(INDEX_ROUTE) {
        GuardDecision::go(Navigation::Dashboard)
    } else {
        GuardDecision::go(Navigation::Allow)
    };

    if decision.navigation != Navigation::Allow {
        log::debug!("guard redirect {} -> {:?}", to.full_path, decision.navigation);
    }
    decision
}
