//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_bar::NoticeBar;
use crate::components::protected::Protected;
use crate::config::ApiConfig;
use crate::net::Api;
use crate::net::http::HttpClient;
use crate::net::transport::Transport;
use crate::net::types::Role;
use crate::pages::{complaints::MyComplaintsPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeState, SignalNotifier};
use crate::state::session::TokenStore;
use crate::util::navigate::BrowserNavigator;
use crate::util::storage::StorageBackend;

/// Root application component.
///
/// Builds the session store and HTTP pipeline once, then provides them to
/// every page through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build config, using defaults: {e}");
        ApiConfig::default()
    });
    let store = TokenStore::load(storage_backend());
    let notices = RwSignal::new(NoticeState::default());
    let http = HttpClient::new(
        config,
        transport(),
        store.clone(),
        Arc::new(SignalNotifier(notices)),
        Arc::new(BrowserNavigator),
    );
    let auth = RwSignal::new(AuthState::from_store(&store));

    provide_context(Api::new(http));
    provide_context(store);
    provide_context(auth);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/laporin.css"/>
        <Title text="Laporin"/>
        <NoticeBar/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected roles=Role::STAFF.to_vec()><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("complaints")
                    view=|| view! { <Protected roles=vec![Role::User]><MyComplaintsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}

fn storage_backend() -> Arc<dyn StorageBackend> {
    #[cfg(feature = "csr")]
    {
        Arc::new(crate::util::storage::LocalStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(crate::util::storage::MemoryStorage::new())
    }
}

fn transport() -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(crate::net::transport::GlooTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(crate::net::transport::UnavailableTransport)
    }
}
