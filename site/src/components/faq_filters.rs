//! Category chip bar for the FAQ page.

use leptos::prelude::*;

use crate::state::faq::{FaqState, FilterChip};

/// Renders one chip per loaded category; clicking toggles it in the filter.
#[component]
pub fn FaqFilters() -> impl IntoView {
    let state = expect_context::<RwSignal<FaqState>>();

    view! {
        <div class="faq-filters" id="faq-filters" role="group" aria-label="Filtrar por categoría">
            <For
                each=move || state.with(FaqState::chips)
                key=|chip| (chip.label.clone(), chip.pressed)
                children=move |chip: FilterChip| {
                    let FilterChip { label, pressed } = chip;
                    let category = label.clone();
                    let data_cat = label.clone();
                    view! {
                        <button
                            class="filter-chip"
                            type="button"
                            aria-pressed=if pressed { "true" } else { "false" }
                            data-cat=data_cat
                            on:click=move |_| state.update(|s| s.toggle_category(&category))
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
