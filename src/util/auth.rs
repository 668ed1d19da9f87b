//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos has no `beforeEach` hook. The guard decision is instead derived
//! synchronously from the router location, and routed pages are only
//! rendered while that decision allows the transition. Redirects and the
//! guard's logout run in an effect afterwards. Install once, inside
//! `<Router>`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::router::guard::{self, GuardDecision, Navigation};
use crate::router::routes::{self, DASHBOARD_ROUTE};
use crate::state::session::{Session, SessionContext};
use crate::state::storage::SessionStorage;

/// Guard decision for a browser location.
pub fn decide(path: &str, search: &str, session: &Session) -> GuardDecision {
    guard::evaluate(&routes::resolve(path, search), session)
}

/// True when routed content may render: the transition is allowed and no
/// logout is still pending.
pub fn renders_target(decision: &GuardDecision) -> bool {
    decision.navigation == Navigation::Allow && !decision.clear_session
}

/// URL to replace the current location with, if the decision redirects.
pub fn redirect_url(decision: &GuardDecision) -> Option<String> {
    decision.navigation.target().map(|target| target.to_url())
}

/// Post-login destination from an untrusted `redirect` query value.
///
/// Only same-origin paths that resolve to a page in the route table are
/// accepted; anything else falls back to the dashboard.
pub fn safe_redirect(raw: Option<&str>) -> String {
    let fallback = || routes::path_for(DASHBOARD_ROUTE).unwrap_or("/").to_owned();
    let Some(raw) = raw.map(str::trim) else {
        return fallback();
    };
    if !raw.starts_with('/') || raw.starts_with("//") || raw.contains('\\') || raw.chars().any(char::is_control) {
        return fallback();
    }
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    if routes::is_known_path(path) { raw.to_owned() } else { fallback() }
}

/// Derive the guard decision from the router location and follow it.
///
/// Returns whether routed content may render. The session is read
/// untracked, so session changes alone do not re-run the guard; only the
/// guard's own logout forces a re-evaluation.
pub fn install_route_guard<S, F>(session: RwSignal<SessionContext<S>>, navigate: F) -> Signal<bool>
where
    S: SessionStorage + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let logouts = RwSignal::new(0_u32);

    let decision = Memo::new(move |_| {
        logouts.track();
        let path = location.pathname.get();
        let search = location.search.get();
        session.with_untracked(|ctx| decide(&path, &search, ctx.session()))
    });

    Effect::new(move || {
        let decision = decision.get();
        if decision.clear_session {
            session.update(SessionContext::logout);
            logouts.update(|n| *n = n.wrapping_add(1));
        }
        if let Some(url) = redirect_url(&decision) {
            navigate(&url, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Signal::derive(move || decision.with(renders_target))
}

/// Current location as `path?search`, for forced-logout return links.
pub fn current_full_path() -> String {
    let location = use_location();
    let path = location.pathname.get_untracked();
    let search = location.search.get_untracked();
    routes::RouteDescriptor::new(path).with_search(&search).full_path
}
