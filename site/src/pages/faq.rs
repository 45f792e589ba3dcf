//! FAQ page: searchable, filterable accordion loaded from the FAQ endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched once after hydration. Fragment changes made outside
//! the page (links, back/forward) re-derive which item is open; the initial
//! fragment decides the first open item once entries arrive.

use leptos::prelude::*;

use crate::components::faq_filters::FaqFilters;
use crate::components::faq_item::FaqItem;
use crate::config::SiteConfig;
use crate::state::faq::{FaqItemView, FaqState, LoadStatus};
use crate::util::location;

#[component]
pub fn FaqPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(FaqState::new(&location::current_fragment()));
    provide_context(state);

    #[cfg(feature = "hydrate")]
    {
        let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
            let fragment = location::current_fragment();
            state.update(|s| s.apply_fragment(&fragment));
        });
        on_cleanup(move || hash_listener.remove());
        leptos::task::spawn_local(async move {
            match crate::net::faq_api::load_faqs(&config).await {
                Ok(entries) => state.update(|s| s.load(entries)),
                Err(e) => {
                    leptos::logging::error!("Error cargando FAQs: {e}");
                    state.update(FaqState::fail);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <section class="faq-page">
            <header class="faq-toolbar">
                <h1>"Preguntas frecuentes"</h1>
                <input
                    id="faq-search"
                    class="faq-search"
                    type="search"
                    placeholder="Buscar en las preguntas…"
                    aria-label="Buscar en las preguntas frecuentes"
                    prop:value=move || state.with(|s| s.filter.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.set_query(&query));
                    }
                />
                <button
                    id="btn-toggle-all"
                    class="btn-toggle-all"
                    type="button"
                    aria-expanded=move || if state.with(FaqState::all_open) { "true" } else { "false" }
                    on:click=move |_| state.update(FaqState::toggle_all)
                >
                    {move || state.with(FaqState::toggle_all_label)}
                </button>
            </header>
            <FaqFilters/>
            <p class="faq-loading" class:hidden=move || state.with(|s| s.status != LoadStatus::Loading)>
                "Cargando preguntas…"
            </p>
            <p
                id="faq-error"
                class="faq-error"
                role="alert"
                class:hidden=move || state.with(|s| s.status != LoadStatus::Failed)
            >
                "No pudimos cargar las preguntas frecuentes. Intenta recargar la página."
            </p>
            <p id="faq-empty" class="faq-empty" class:hidden=move || !state.with(FaqState::is_empty_result)>
                "No hay resultados para tu búsqueda."
            </p>
            <div id="faq-list" class="faq-list">
                <For
                    each=move || state.with(FaqState::item_views)
                    key=|item| item.key.clone()
                    children=move |item: FaqItemView| view! { <FaqItem item=item/> }
                />
            </div>
        </section>
    }
}
