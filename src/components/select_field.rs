//! Dropdown bound to a fixed option list.

use leptos::prelude::*;

/// A `<select>` over `options` with an empty placeholder entry.
///
/// Choosing the placeholder reports an empty string.
#[component]
pub fn SelectField(
    options: &'static [&'static str],
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="select-field"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {options
                .iter()
                .map(|opt| {
                    let opt: &'static str = opt;
                    view! {
                        <option value=opt selected=move || value.get().eq_ignore_ascii_case(opt)>
                            {opt}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
