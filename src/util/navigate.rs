//! Hard redirects out of the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session expiry must leave the app entirely (not just swap the routed
//! view) so every in-memory signal is rebuilt from the cleared store.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

/// Login entry point used by every auth redirect.
pub const LOGIN_PATH: &str = "/login";

pub trait Navigator: Send + Sync {
    /// Replace the current document with `path`.
    fn redirect(&self, path: &str);
}

/// False when `target` is already the current page; reloading it would drop
/// the notice raised alongside the redirect.
#[must_use]
pub fn needs_reload(current_path: &str, target: &str) -> bool {
    current_path.trim_end_matches('/') != target.trim_end_matches('/')
}

/// `window.location` navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if location.pathname().is_ok_and(|current| !needs_reload(&current, path)) {
                    leptos::logging::log!("already on {path}; redirect skipped");
                    return;
                }
                if let Err(e) = location.set_href(path) {
                    leptos::logging::warn!("redirect to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("redirect requested off-browser: {path}");
        }
    }
}
