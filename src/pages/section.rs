//! Placeholder shell for admin sections (tenants, users, roles, ...).

use leptos::prelude::*;

use crate::router::routes::find_by_name;

/// Section page titled from the page table. Access is already enforced by
/// the route guard before this renders.
#[component]
pub fn SectionPage(route: &'static str) -> impl IntoView {
    let title = find_by_name(route).map_or(route, |entry| entry.title);
    view! {
        <div class="section-page">
            <header class="section-page__header">
                <h1>{title}</h1>
                <a href="/dashboard">"Back to dashboard"</a>
            </header>
        </div>
    }
}
