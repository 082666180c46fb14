//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (notices, route gates) while reading shared
//! state from Leptos context providers.

pub mod notice_bar;
pub mod protected;
