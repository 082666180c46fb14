//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates data access to the
//! `Api` services in context. Access control lives in `components::protected`.

pub mod complaints;
pub mod dashboard;
pub mod login;
