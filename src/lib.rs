//! # admin-console
//!
//! Leptos + WASM client for the multi-tenant administration console
//! (tenants, users, roles, documents, UDF forms and dashboard reports).
//!
//! The interesting part of this crate is the session gate: `state::session`
//! holds the persisted credentials, `router::guard` decides every route
//! transition against them, and `net` maps REST failures back onto the
//! session (forced logout on expiry). Pages are thin shells over those.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
