//! Client-side routing policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the page table with per-route access metadata, `guard` the
//! pure decision taken before each transition, and `target` renders the
//! guard's redirects into URLs the Leptos router can navigate to.

pub mod guard;
pub mod routes;
pub mod target;
