//! One collapsible FAQ entry.
//!
//! DESIGN
//! ======
//! Header and answer markup come pre-rendered from [`FaqItemView`]; the
//! component only wires the open flag to ARIA state and the panel's `hidden`
//! attribute, and forwards fragment changes from the toggle.

use leptos::prelude::*;

use crate::state::faq::{FaqItemView, FaqState};
use crate::util::location;

const CHEVRON_PATH: &str = "M12 15.5a1 1 0 0 1-.7-.3l-6-6a1 1 0 1 1 1.4-1.4L12 13.1l5.3-5.3a1 1 0 1 1 1.4 1.4l-6 6a1 1 0 0 1-.7.3z";

#[component]
pub fn FaqItem(item: FaqItemView) -> impl IntoView {
    let state = expect_context::<RwSignal<FaqState>>();
    let FaqItemView { key, button_id, panel_id, header_html, answer_html } = item;

    let is_open = {
        let key = key.clone();
        Memo::new(move |_| state.with(|s| s.is_open(&key)))
    };

    let on_toggle = move |_| {
        let mut change = None;
        state.update(|s| change = s.toggle_item(&key));
        if let Some(change) = change {
            location::apply(&change);
        }
    };

    view! {
        <article class="faq-item" class:open=move || is_open.get()>
            <button
                class="faq-toggle"
                type="button"
                id=button_id.clone()
                aria-controls=panel_id.clone()
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=on_toggle
            >
                <div class="faq-heading" inner_html=header_html></div>
                <svg class="faq-icon" viewBox="0 0 24 24" aria-hidden="true">
                    <path d=CHEVRON_PATH></path>
                </svg>
            </button>
            <div
                class="faq-panel"
                id=panel_id
                role="region"
                aria-labelledby=button_id
                hidden=move || !is_open.get()
            >
                <div class="faq-a" inner_html=answer_html></div>
            </div>
        </article>
    }
}
