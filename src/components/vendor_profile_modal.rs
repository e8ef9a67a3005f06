//! Modal with a vendor's full profile: rating, needs, about, and photos.

use leptos::prelude::*;

use crate::components::vendor_card::VendorAvatar;
use crate::state::catalog::{VendorRecord, rating_stars};

/// Profile dialog. Backdrop click, Escape, and Close all call `on_close`.
#[component]
pub fn VendorProfileModal(
    vendor: &'static VendorRecord,
    on_contact: Callback<u32>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let stars = rating_stars(vendor.rating);
    let id = vendor.id;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--vendor"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__vendor-head">
                    <VendorAvatar vendor/>
                    <div>
                        <h2>{vendor.name.as_str()}</h2>
                        <p class="dialog__vendor-meta">
                            {format!("{} \u{b7} {} \u{b7} {}", vendor.cuisine, vendor.vendor_type, vendor.location)}
                        </p>
                        <p class="dialog__vendor-rating">
                            <span class="stars">
                                {"\u{2605}".repeat(stars)}
                                <span class="stars--empty">{"\u{2606}".repeat(5 - stars)}</span>
                            </span>
                            {format!(" {:.1} ({} reviews)", vendor.rating, vendor.review_count)}
                        </p>
                    </div>
                </div>

                <section class="dialog__section">
                    <h3>"Looking For"</h3>
                    <p>{vendor.looking_for.as_str()}</p>
                </section>

                <section class="dialog__section">
                    <h3>"About"</h3>
                    <p>{vendor.description.as_str()}</p>
                </section>

                <section class="dialog__section">
                    <h3>"Food Photos"</h3>
                    <div class="dialog__photos">
                        {vendor
                            .food_photos
                            .iter()
                            .map(|photo| {
                                view! {
                                    <figure class="dialog__photo">
                                        <img src=photo.url.as_str() alt=photo.caption.as_str()/>
                                        <figcaption>
                                            <strong>{photo.caption.as_str()}</strong>
                                            <span>{photo.category.as_str()}</span>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                    <button class="btn btn--primary" on:click=move |_| on_contact.run(id)>
                        "Contact Vendor"
                    </button>
                </div>
            </div>
        </div>
    }
}
