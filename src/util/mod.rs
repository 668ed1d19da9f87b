//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/browser glue and small formatting rules
//! from page logic to improve reuse and testability.

pub mod auth;
pub mod filter;
pub mod format;
pub mod udf;
