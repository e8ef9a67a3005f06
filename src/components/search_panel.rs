//! Directory search form: cuisine, location, and business type.

use leptos::prelude::*;

use crate::components::select_field::SelectField;
use crate::state::catalog::{CUISINE_TYPES, UK_MAJOR_CITIES, VENDOR_TYPES};
use crate::state::ui::UiState;

/// Selects edit the draft filter; the grid only changes on Search.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let has_filter = move || !ui.get().filter.is_empty();

    view! {
        <section class="search-panel">
            <h2 class="search-panel__title">"Find Your Perfect Food Partner"</h2>
            <div class="search-panel__fields">
                <SelectField
                    id="search-cuisine"
                    options=CUISINE_TYPES
                    placeholder="Any cuisine"
                    value=Signal::derive(move || ui.get().draft_filter.cuisine)
                    on_change=Callback::new(move |v| ui.update(|u| u.draft_filter.cuisine = v))
                />
                <SelectField
                    id="search-location"
                    options=UK_MAJOR_CITIES
                    placeholder="Any location"
                    value=Signal::derive(move || ui.get().draft_filter.location)
                    on_change=Callback::new(move |v| ui.update(|u| u.draft_filter.location = v))
                />
                <SelectField
                    id="search-type"
                    options=VENDOR_TYPES
                    placeholder="Any business type"
                    value=Signal::derive(move || ui.get().draft_filter.vendor_type)
                    on_change=Callback::new(move |v| ui.update(|u| u.draft_filter.vendor_type = v))
                />
                <button class="btn btn--primary" on:click=move |_| ui.update(UiState::run_search)>
                    "Search"
                </button>
                <Show when=has_filter>
                    <button class="btn" on:click=move |_| ui.update(UiState::clear_search)>"Clear"</button>
                </Show>
            </div>
        </section>
    }
}
