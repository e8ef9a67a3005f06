//! Locally stored user profile written by onboarding.
//!
//! The profile lives under a single fixed key. Its presence (with a
//! `userType`) is what tells the app that onboarding is complete.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, KeyValueStore, StorageError};

/// Storage key for the signed-in user's profile.
pub const PROFILE_KEY: &str = "userProfile";

/// Which side of the marketplace the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Landlord,
    Vendor,
}

impl UserType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Vendor => "vendor",
        }
    }
}

/// Fields only vendors fill in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDetails {
    pub cuisine_type: String,
    pub vendor_type: String,
    pub looking_for: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub facebook_url: String,
}

/// Fields only landlords fill in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlordDetails {
    #[serde(default)]
    pub property_types: String,
    #[serde(default)]
    pub landlord_locations: String,
}

/// Role-specific profile section, tagged by `userType` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "userType", rename_all = "lowercase")]
pub enum RoleDetails {
    Landlord(LandlordDetails),
    Vendor(VendorDetails),
}

impl RoleDetails {
    #[must_use]
    pub fn user_type(&self) -> UserType {
        match self {
            Self::Landlord(_) => UserType::Landlord,
            Self::Vendor(_) => UserType::Vendor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub role: RoleDetails,
    pub display_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub bio: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl UserProfile {
    #[must_use]
    pub fn user_type(&self) -> UserType {
        self.role.user_type()
    }
}

/// Read the stored profile.
///
/// # Errors
///
/// Returns an error if storage fails or the stored JSON is not a profile.
pub fn load_profile(store: &dyn KeyValueStore) -> Result<Option<UserProfile>, StorageError> {
    storage::load_json(store, PROFILE_KEY)
}

/// Persist `profile` under [`PROFILE_KEY`].
///
/// # Errors
///
/// Returns an error if encoding or the storage write fails.
pub fn save_profile(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), StorageError> {
    storage::save_json(store, PROFILE_KEY, profile)
}

/// Whether a profile carrying a `userType` is stored.
///
/// Only the tag is inspected, so a profile written by an older form with
/// extra or missing optional fields still counts as complete.
pub fn has_completed_profile(store: &dyn KeyValueStore) -> bool {
    let Ok(Some(raw)) = store.get(PROFILE_KEY) else {
        return false;
    };
    serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(|v| v.get("userType").and_then(|t| t.as_str()).map(|t| !t.is_empty()))
        .unwrap_or(false)
}

/// Profile context for the app: whether onboarding is done, and the decoded
/// profile when it could be read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub completed: bool,
    pub profile: Option<UserProfile>,
}

impl ProfileState {
    /// Read profile state from `store`, logging unreadable profiles.
    pub fn read(store: &dyn KeyValueStore) -> Self {
        let profile = load_profile(store).unwrap_or_else(|e| {
            log::warn!("stored profile unreadable: {e}");
            None
        });
        Self { completed: has_completed_profile(store), profile }
    }

    #[must_use]
    pub fn user_type(&self) -> Option<UserType> {
        self.profile.as_ref().map(UserProfile::user_type)
    }
}
