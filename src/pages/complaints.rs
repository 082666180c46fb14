//! Citizen view of their own complaints.

use leptos::prelude::*;

use crate::net::Api;
use crate::net::types::{Complaint, ComplaintQuery, Page};

#[component]
pub fn MyComplaintsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let page = RwSignal::new(1_u32);

    let complaints = LocalResource::new(move || {
        let api = api.clone();
        let query = ComplaintQuery { page: Some(page.get()), ..ComplaintQuery::default() };
        async move { api.complaints.list_mine(&query).await }
    });

    view! {
        <div class="complaints-page">
            <h1>"My Complaints"</h1>
            <Suspense fallback=move || view! { <p>"Loading complaints..."</p> }>
                {move || {
                    complaints
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="complaints-page__error">{e.user_message()}</p> }.into_any(),
                            Ok(listing) => listing_view(listing, page),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn listing_view(listing: Page<Complaint>, page: RwSignal<u32>) -> AnyView {
    let has_next = listing.has_next();
    let current = listing.page;
    view! {
        <ul class="complaints-page__list">
            {listing
                .items
                .into_iter()
                .map(|complaint| {
                    view! {
                        <li class="complaint-row">
                            <span class="complaint-row__title">{complaint.title}</span>
                            <span class="complaint-row__status">{complaint.status.as_str()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <nav class="complaints-page__pager">
            <button disabled={current <= 1} on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))>
                "Previous"
            </button>
            <span>{format!("Page {current}")}</span>
            <button disabled={!has_next} on:click=move |_| page.update(|p| *p += 1)>
                "Next"
            </button>
        </nav>
    }
    .into_any()
}
