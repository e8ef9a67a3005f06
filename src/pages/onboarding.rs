//! Onboarding page: pick landlord or vendor, then fill the profile form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown by the home gate to signed-in users with no stored profile. A
//! successful submit writes the profile and flips `ProfileState`, which
//! moves the gate on to the directory without a reload.

use leptos::prelude::*;

use crate::components::select_field::SelectField;
use crate::components::text_field::TextField;
use crate::net::types::AuthUser;
use crate::state::auth::AuthState;
use crate::state::catalog::{CUISINE_TYPES, UK_MAJOR_CITIES, VENDOR_TYPES};
use crate::state::onboarding::{OnboardingError, OnboardingForm};
use crate::state::profile::{ProfileState, UserProfile, UserType};
use crate::util::clock;
use crate::util::storage::LocalStorage;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let form = RwSignal::new(
        auth.get_untracked()
            .user
            .as_ref()
            .map(OnboardingForm::for_user)
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        submitting.set(true);
        match submit_form(&form.get_untracked(), &user) {
            Ok(saved) => {
                error.set(None);
                profile.set(ProfileState { completed: true, profile: Some(saved) });
            }
            Err(OnboardingError::Storage(e)) => {
                log::error!("saving profile failed: {e}");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        submitting.set(false);
    };

    view! {
        <Show
            when=move || form.get().selected_type.is_some()
            fallback=move || view! { <RoleChooser form/> }
        >
            <div class="onboarding-page">
                <h1 class="onboarding-page__title">
                    {move || match form.get().selected_type {
                        Some(UserType::Landlord) => "Landlord Profile Setup",
                        _ => "Food Vendor Profile Setup",
                    }}
                </h1>
                <p class="onboarding-page__subtitle">
                    "Tell us about yourself to help others find and connect with you"
                </p>

                <form class="onboarding-form" on:submit=on_submit>
                    <CommonFields form/>
                    <Show when=move || form.get().selected_type == Some(UserType::Vendor)>
                        <VendorFields form/>
                    </Show>
                    <Show when=move || form.get().selected_type == Some(UserType::Landlord)>
                        <LandlordFields form/>
                    </Show>

                    <Show when=move || error.get().is_some()>
                        <p class="onboarding-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="onboarding-form__actions">
                        <button type="button" class="btn" on:click=move |_| form.update(OnboardingForm::back)>
                            "Back"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating Profile..." } else { "Complete Profile" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

fn submit_form(form: &OnboardingForm, user: &AuthUser) -> Result<UserProfile, OnboardingError> {
    form.submit(user, &LocalStorage, clock::now_ms())
}

#[component]
fn RoleChooser(form: RwSignal<OnboardingForm>) -> impl IntoView {
    view! {
        <div class="onboarding-page onboarding-page--roles">
            <h1 class="onboarding-page__title">"Welcome to Oya's Food Pitch!"</h1>
            <p class="onboarding-page__subtitle">
                "Let's set up your profile. Are you a landlord or food vendor?"
            </p>
            <div class="role-cards">
                <button class="role-card" on:click=move |_| form.update(|f| f.select(UserType::Landlord))>
                    <h2>"I'm a Landlord"</h2>
                    <p>
                        "I have commercial space (pub, takeaway, restaurant) and want to find food vendors to partner with"
                    </p>
                    <ul>
                        <li>"Browse verified food vendors"</li>
                        <li>"View portfolios and reviews"</li>
                        <li>"Connect directly with vendors"</li>
                    </ul>
                </button>
                <button class="role-card" on:click=move |_| form.update(|f| f.select(UserType::Vendor))>
                    <h2>"I'm a Food Vendor"</h2>
                    <p>"I have a food business and want to find commercial spaces to operate from"</p>
                    <ul>
                        <li>"Create your food brand profile"</li>
                        <li>"Showcase your cuisine and portfolio"</li>
                        <li>"Connect with landlords"</li>
                    </ul>
                </button>
            </div>
        </div>
    }
}

#[component]
fn CommonFields(form: RwSignal<OnboardingForm>) -> impl IntoView {
    let is_landlord = move || form.get().selected_type == Some(UserType::Landlord);

    view! {
        <TextField
            label="Display Name *"
            placeholder="Your name"
            value=Signal::derive(move || form.get().display_name)
            on_input=Callback::new(move |v| form.update(|f| f.display_name = v))
        />
        <TextField
            label="Company Name"
            placeholder="Your company name"
            value=Signal::derive(move || form.get().company_name)
            on_input=Callback::new(move |v| form.update(|f| f.company_name = v))
        />
        <TextField
            label="Phone Number"
            placeholder="+44 20 1234 5678"
            value=Signal::derive(move || form.get().phone)
            on_input=Callback::new(move |v| form.update(|f| f.phone = v))
        />
        <label class="field">
            <span class="field__label">"Location *"</span>
            <SelectField
                options=UK_MAJOR_CITIES
                placeholder="Select your city"
                value=Signal::derive(move || form.get().location)
                on_change=Callback::new(move |v| form.update(|f| f.location = v))
            />
        </label>
        <label class="field">
            <span class="field__label">
                {move || if is_landlord() { "About Your Properties" } else { "About Your Food Business" }}
            </span>
            <textarea
                class="field__input"
                rows="4"
                placeholder=move || {
                    if is_landlord() {
                        "Tell vendors about your properties, what you're looking for in a food partner..."
                    } else {
                        "Describe your cuisine, experience, what makes your food special..."
                    }
                }
                prop:value=move || form.get().bio
                on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
fn VendorFields(form: RwSignal<OnboardingForm>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Cuisine Type *"</span>
            <SelectField
                options=CUISINE_TYPES
                placeholder="Select cuisine type"
                value=Signal::derive(move || form.get().cuisine_type)
                on_change=Callback::new(move |v| form.update(|f| f.cuisine_type = v))
            />
        </label>
        <label class="field">
            <span class="field__label">"Business Type *"</span>
            <SelectField
                options=VENDOR_TYPES
                placeholder="Select business type"
                value=Signal::derive(move || form.get().vendor_type)
                on_change=Callback::new(move |v| form.update(|f| f.vendor_type = v))
            />
        </label>
        <TextField
            label="Looking For *"
            placeholder="e.g., Pub Kitchen, Restaurant Space, Food Court"
            value=Signal::derive(move || form.get().looking_for)
            on_input=Callback::new(move |v| form.update(|f| f.looking_for = v))
        />
        <TextField
            label="Website"
            placeholder="Website URL"
            value=Signal::derive(move || form.get().website_url)
            on_input=Callback::new(move |v| form.update(|f| f.website_url = v))
        />
        <TextField
            label="Instagram"
            placeholder="Instagram URL"
            value=Signal::derive(move || form.get().instagram_url)
            on_input=Callback::new(move |v| form.update(|f| f.instagram_url = v))
        />
        <TextField
            label="Facebook"
            placeholder="Facebook URL"
            value=Signal::derive(move || form.get().facebook_url)
            on_input=Callback::new(move |v| form.update(|f| f.facebook_url = v))
        />
    }
}

#[component]
fn LandlordFields(form: RwSignal<OnboardingForm>) -> impl IntoView {
    view! {
        <TextField
            label="Property Types"
            placeholder="e.g., Pub, Restaurant, Takeaway, Food Court"
            value=Signal::derive(move || form.get().property_types)
            on_input=Callback::new(move |v| form.update(|f| f.property_types = v))
        />
        <TextField
            label="Additional Locations"
            placeholder="Other cities where you have properties"
            value=Signal::derive(move || form.get().landlord_locations)
            on_input=Callback::new(move |v| form.update(|f| f.landlord_locations = v))
        />
    }
}
