//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` prepares and sends authenticated requests, `error` classifies
//! failures and maps them onto the session, and `auth` wraps the
//! authentication endpoints whose results feed `SessionContext`.

pub mod api;
pub mod auth;
pub mod error;
