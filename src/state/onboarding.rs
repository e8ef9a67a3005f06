//! Onboarding form model: role selection, presence validation, single write.
//!
//! SYSTEM CONTEXT
//! ==============
//! A signed-in user without a stored profile lands here. The page binds its
//! inputs to an `OnboardingForm` held in a signal and calls `submit` once.
//! No server round-trip exists; the profile is written to local storage.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use crate::net::types::AuthUser;
use crate::state::profile::{self, LandlordDetails, RoleDetails, UserProfile, UserType, VendorDetails};
use crate::util::storage::{KeyValueStore, StorageError};

/// Reasons a submission is rejected.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("choose landlord or vendor first")]
    NoRoleSelected,

    /// A required field is empty; carries the field's label.
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("could not save profile: {0}")]
    Storage(#[from] StorageError),
}

/// Raw form inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub selected_type: Option<UserType>,

    pub display_name: String,
    pub company_name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,

    pub cuisine_type: String,
    pub vendor_type: String,
    pub looking_for: String,
    pub website_url: String,
    pub instagram_url: String,
    pub facebook_url: String,

    pub property_types: String,
    pub landlord_locations: String,
}

impl OnboardingForm {
    /// Blank form with the display name prefilled from the identity provider.
    #[must_use]
    pub fn for_user(user: &AuthUser) -> Self {
        Self { display_name: user.display_name.clone(), ..Self::default() }
    }

    pub fn select(&mut self, user_type: UserType) {
        self.selected_type = Some(user_type);
    }

    /// Return to role selection. Typed values are kept.
    pub fn back(&mut self) {
        self.selected_type = None;
    }

    /// Check required fields and build the profile that would be stored.
    ///
    /// # Errors
    ///
    /// Returns `NoRoleSelected` or the first `MissingField`, in form order.
    pub fn validate(&self, user: &AuthUser, now_ms: i64) -> Result<UserProfile, OnboardingError> {
        let user_type = self.selected_type.ok_or(OnboardingError::NoRoleSelected)?;

        let display_name = required(&self.display_name, "Display name")?;
        let location = required(&self.location, "Location")?;

        let role = match user_type {
            UserType::Vendor => RoleDetails::Vendor(VendorDetails {
                cuisine_type: required(&self.cuisine_type, "Cuisine type")?,
                vendor_type: required(&self.vendor_type, "Business type")?,
                looking_for: required(&self.looking_for, "Looking for")?,
                website_url: optional(&self.website_url),
                instagram_url: optional(&self.instagram_url),
                facebook_url: optional(&self.facebook_url),
            }),
            UserType::Landlord => RoleDetails::Landlord(LandlordDetails {
                property_types: optional(&self.property_types),
                landlord_locations: optional(&self.landlord_locations),
            }),
        };

        Ok(UserProfile {
            id: user.id.clone(),
            email: user.email.clone(),
            role,
            display_name,
            company_name: optional(&self.company_name),
            phone: optional(&self.phone),
            location,
            bio: optional(&self.bio),
            created_at: now_ms,
        })
    }

    /// Validate and write the profile. Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or `Storage` if the write fails.
    pub fn submit(&self, user: &AuthUser, store: &dyn KeyValueStore, now_ms: i64) -> Result<UserProfile, OnboardingError> {
        let profile = self.validate(user, now_ms)?;
        profile::save_profile(store, &profile)?;
        log::info!("profile saved for {} as {}", profile.id, profile.user_type().as_str());
        Ok(profile)
    }
}

fn required(value: &str, label: &'static str) -> Result<String, OnboardingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OnboardingError::MissingField(label));
    }
    Ok(trimmed.to_owned())
}

fn optional(value: &str) -> String {
    value.trim().to_owned()
}
