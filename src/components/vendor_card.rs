//! Directory grid card for a single vendor.

use leptos::prelude::*;

use crate::state::catalog::VendorRecord;

#[component]
pub fn VendorCard(vendor: &'static VendorRecord, on_contact: Callback<u32>, on_view: Callback<u32>) -> impl IntoView {
    let id = vendor.id;

    view! {
        <article class="vendor-card">
            <div class="vendor-card__head">
                <VendorAvatar vendor/>
                <div class="vendor-card__identity">
                    <h3 class="vendor-card__name">{vendor.name.as_str()}</h3>
                    <p class="vendor-card__meta">
                        {format!("{} \u{b7} {}", vendor.cuisine, vendor.vendor_type)}
                    </p>
                </div>
                <span class="vendor-card__badge">{vendor.availability.as_str()}</span>
            </div>

            <div class="vendor-card__photos">
                {vendor
                    .food_photos
                    .iter()
                    .take(2)
                    .map(|photo| {
                        view! { <img class="vendor-card__photo" src=photo.url.as_str() alt=photo.caption.as_str()/> }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <p class="vendor-card__looking">
                <span class="vendor-card__label">"Looking for: "</span>
                {vendor.looking_for.as_str()}
            </p>
            <p class="vendor-card__location">{vendor.location.as_str()}</p>

            <div class="vendor-card__actions">
                <button class="btn btn--primary" on:click=move |_| on_contact.run(id)>"Contact"</button>
                <button class="btn" on:click=move |_| on_view.run(id)>"View Profile"</button>
            </div>
        </article>
    }
}

/// Vendor image, falling back to initials if it fails to load.
#[component]
pub fn VendorAvatar(vendor: &'static VendorRecord) -> impl IntoView {
    let broken = RwSignal::new(false);

    view! {
        <Show
            when=move || !broken.get()
            fallback=move || view! { <span class="vendor-avatar vendor-avatar--initials">{vendor.initials()}</span> }
        >
            <img
                class="vendor-avatar"
                src=vendor.image.as_str()
                alt=vendor.name.as_str()
                on:error=move |_| broken.set(true)
            />
        </Show>
    }
}
