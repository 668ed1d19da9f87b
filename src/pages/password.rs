//! Forgot-password and reset-password pages.
//!
//! The reset page is reachable with a stale session: the route guard clears
//! it on entry so the emailed link always works.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Request a password-reset email.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::api::ApiClient>();

    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let payload = crate::net::auth::ForgotPassword { email: email.get_untracked().trim().to_owned() };
            leptos::task::spawn_local(async move {
                match crate::net::auth::forgot_password(&client, &payload).await {
                    Ok(_) => status.set(Some("Check your inbox for a reset link.")),
                    Err(failure) => status.set(Some(failure.user_message())),
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Forgot password"</h1>
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
                {move || status.get().map(|message| view! { <p class="form__status">{message}</p> })}
                <button class="btn btn--primary" type="submit">"Send reset link"</button>
            </form>
            <a href="/auth/login">"Back to sign in"</a>
        </div>
    }
}

/// Choose a new password using the `token`/`email` from the reset link.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let client = expect_context::<crate::net::api::ApiClient>();

    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let status = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get_untracked() != confirmation.get_untracked() {
            status.set(Some("Passwords do not match."));
            return;
        }
        let (token, email) = query.with_untracked(|q| {
            (q.get("token").unwrap_or_default(), q.get("email").unwrap_or_default())
        });
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let payload = crate::net::auth::ResetPassword {
                token,
                email,
                password: password.get_untracked(),
                password_confirmation: confirmation.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::auth::reset_password(&client, &payload).await {
                    Ok(_) => status.set(Some("Password updated. You can sign in now.")),
                    Err(failure) => status.set(Some(failure.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, email);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Reset password"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label class="form__label">
                    "New password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Confirm password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                </label>
                {move || status.get().map(|message| view! { <p class="form__status">{message}</p> })}
                <button class="btn btn--primary" type="submit">"Update password"</button>
            </form>
            <a href="/auth/login">"Back to sign in"</a>
        </div>
    }
}
