//! Route gate for pages that need a signed-in user with a given role.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::TokenStore;
use crate::util::guard::evaluate;

/// Render `children` only when the stored token carries one of `roles`.
///
/// Re-checked on every navigation and whenever the auth signal changes;
/// denied visits are sent to the login page.
#[component]
pub fn Protected(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<TokenStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || {
        location.pathname.track();
        auth.track();
        let decision = evaluate(store.token().as_deref(), &roles);
        match decision.redirect() {
            None => children().into_any(),
            Some(path) => {
                leptos::logging::log!("route denied: {decision:?}");
                view! { <Redirect path=path/> }.into_any()
            }
        }
    }
}
