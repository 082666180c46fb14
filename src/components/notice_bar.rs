//! Stack of dismissable notices raised by failed requests.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[cfg(feature = "csr")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-bar" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = format!("notice {}", notice.level.css_modifier());
                    #[cfg(feature = "csr")]
                    set_timeout(move || notices.update(|state| state.dismiss(id)), NOTICE_TTL);
                    view! {
                        <div class=class role="alert">
                            <strong class="notice__title">{notice.title}</strong>
                            <span class="notice__message">{notice.message}</span>
                            <button class="notice__close" on:click=move |_| notices.update(|state| state.dismiss(id))>
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
