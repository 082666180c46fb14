//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `profile` are persisted and framework-agnostic; `auth` and
//! `notice` are the reactive views components read through Leptos context.

pub mod auth;
pub mod notice;
pub mod profile;
pub mod session;
