//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` is the persistence capability, `session` the credentials and
//! permission set read by the route guard. The session is constructed once
//! at bootstrap and passed around explicitly (Leptos context in the app).

pub mod session;
pub mod storage;
