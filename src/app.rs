//! Root application component with routing, session bootstrap and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage,
    login::LoginPage,
    password::{ForgotPasswordPage, ResetPasswordPage},
    section::SectionPage,
};
use crate::state::session::SessionContext;
use crate::state::storage::LocalStorage;
use crate::util::auth::install_route_guard;

/// Session context shared through Leptos context.
pub type AppSession = RwSignal<SessionContext<LocalStorage>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session once, provides it and the API client to
/// every page, and mounts routed pages behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("{e}; falling back to default API config");
        ApiConfig::default()
    });
    let session: AppSession = RwSignal::new(SessionContext::restore(LocalStorage));
    provide_context(session);
    provide_context(ApiClient::for_browser(config));

    view! {
        <Title text="Admin Console"/>

        <Router>
            <main>
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <SectionPage route="index"/> }/>
                        <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("forgot-password")) view=ForgotPasswordPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("reset-password")) view=ResetPasswordPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("profile") view=|| view! { <SectionPage route="profile"/> }/>
                        <Route path=StaticSegment("tenants") view=|| view! { <SectionPage route="tenants"/> }/>
                        <Route path=StaticSegment("tenant-settings") view=|| view! { <SectionPage route="tenant-settings"/> }/>
                        <Route path=StaticSegment("users") view=|| view! { <SectionPage route="users"/> }/>
                        <Route path=StaticSegment("roles") view=|| view! { <SectionPage route="roles"/> }/>
                        <Route path=StaticSegment("documents") view=|| view! { <SectionPage route="documents"/> }/>
                        <Route path=StaticSegment("udfs") view=|| view! { <SectionPage route="udfs"/> }/>
                        <Route path=StaticSegment("report-builders") view=|| view! { <SectionPage route="report-builders"/> }/>
                        <Route path=StaticSegment("reports") view=|| view! { <SectionPage route="reports"/> }/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}

/// Installs the navigation guard and renders `children` only while the
/// current location is allowed.
#[component]
fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let allowed = install_route_guard(session, use_navigate());
    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
