//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::AppSession;
use crate::net::error::ErrorCode;
use crate::util::auth::safe_redirect;

/// Login page. On success the session is installed and the user returns to
/// the `redirect` query path when it names a local page (or the dashboard).
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let expired = move || query.with(|q| q.get("expired").is_some_and(|v| v == "true"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let redirect = safe_redirect(query.with_untracked(|q| q.get("redirect")).as_deref());

        #[cfg(feature = "hydrate")]
        {
            let credentials = crate::net::auth::Credentials {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
            };
            let client = client.clone();
            let navigate = navigate.clone();
            submitting.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(&client, &credentials).await {
                    Ok(grant) => {
                        session.update(|ctx| ctx.login(grant));
                        navigate(&redirect, leptos_router::NavigateOptions::default());
                    }
                    Err(failure) => {
                        log::warn!("login failed: {failure}");
                        error.set(Some(failure.user_message()));
                    }
                }
                submitting.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (redirect, session);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <Show when=expired>
                <p class="login-page__notice">{ErrorCode::Unauthenticated.message()}</p>
            </Show>
            <form class="login-page__form" on:submit=on_submit>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form__error">{message}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Sign in"
                </button>
            </form>
            <a href="/auth/forgot-password">"Forgot password?"</a>
        </div>
    }
}
