//! Admin dashboard: complaint counts and the most recent reports.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::types::DashboardSummary;
use crate::state::auth::AuthState;
use crate::util::navigate::LOGIN_PATH;

/// Dashboard page for staff. Access is checked by the surrounding route gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let summary = {
        let api = api.clone();
        LocalResource::new(move || {
            let api = api.clone();
            async move { api.dashboard.summary().await }
        })
    };

    let on_logout = move |_| {
        api.auth.logout();
        auth.set(AuthState::default());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__user">{move || auth.get().display_name()}</span>
                <button class="btn" on:click=on_logout>"Sign Out"</button>
            </header>
            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(summary) => summary_view(summary),
                            Err(e) => view! { <p class="dashboard-page__error">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn summary_view(summary: DashboardSummary) -> AnyView {
    let cards = [
        ("Total", summary.total_complaints),
        ("Pending", summary.pending),
        ("In Process", summary.process),
        ("Done", summary.done),
        ("Rejected", summary.rejected),
        ("Users", summary.total_users),
        ("News", summary.total_news),
    ];
    view! {
        <div class="dashboard-page__stats">
            {cards
                .into_iter()
                .map(|(label, count)| {
                    view! {
                        <div class="stat-card">
                            <span class="stat-card__label">{label}</span>
                            <span class="stat-card__value">{count}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <ul class="dashboard-page__recent">
            {summary
                .recent_complaints
                .into_iter()
                .map(|complaint| {
                    view! {
                        <li class="recent-complaint">
                            <span class="recent-complaint__title">{complaint.title}</span>
                            <span class="recent-complaint__status">{complaint.status.as_str()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
