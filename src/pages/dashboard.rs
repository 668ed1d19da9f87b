//! Dashboard page: greeting, profile refresh and logout.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::router::routes::{LOGIN_ROUTE, ROUTES};

/// Dashboard page. Refreshes the cached profile on mount and lists the
/// sections the session's permissions unlock.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        let navigate = navigate.clone();
        let current_path = crate::util::auth::current_full_path();
        session.update(|ctx| ctx.set_loading(true));
        let snapshot = session.with_untracked(|ctx| ctx.session().clone());
        leptos::task::spawn_local(async move {
            match crate::net::auth::fetch_profile(&client, &snapshot).await {
                Ok(user) if !user.is_null() => session.update(|ctx| ctx.set_user(user)),
                Ok(_) => {}
                Err(failure) => {
                    let resolution =
                        session.try_update(|ctx| crate::net::error::resolve_failure(&failure, ctx, &current_path));
                    if let Some(url) = resolution.and_then(|r| r.redirect) {
                        navigate(&url, leptos_router::NavigateOptions::default());
                    }
                }
            }
            session.update(|ctx| ctx.set_loading(false));
        });
    }

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            let snapshot = session.with_untracked(|ctx| ctx.session().clone());
            leptos::task::spawn_local(async move {
                if let Err(failure) = crate::net::auth::logout(&client, &snapshot).await {
                    log::warn!("server logout failed: {failure}");
                }
                session.update(|ctx| ctx.logout());
                let login = crate::router::target::NavigationTarget::new(LOGIN_ROUTE).to_url();
                navigate(&login, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, LOGIN_ROUTE);
        }
    };

    let greeting = move || {
        session.with(|ctx| match ctx.session().user_name() {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome back".to_owned(),
        })
    };

    let sections = move || {
        session.with(|ctx| {
            ROUTES
                .iter()
                .filter(|r| !r.permissions.is_empty())
                .filter(|r| r.permissions.iter().any(|p| ctx.session().has_permission(p)))
                .map(|r| view! { <li><a href=r.path>{r.title}</a></li> })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>
            <Show when=move || session.with(|ctx| ctx.session().loading)>
                <p>"Loading profile..."</p>
            </Show>
            <ul class="dashboard-page__sections">{sections}</ul>
        </div>
    }
}
