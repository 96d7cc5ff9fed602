//! User profile types.

use crate::profile_image::ProfileImage;
use ecofinds_market::ids::UserId;
use serde::{Deserialize, Serialize};

/// The logged-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Public handle, shown as seller name on new listings.
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Profile picture, if one was uploaded.
    pub profile_image: Option<ProfileImage>,
}

impl User {
    /// Name to greet the user with: full name, falling back to username.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }

    /// Check whether name, phone and address have been filled in.
    pub fn is_profile_complete(&self) -> bool {
        [&self.full_name, &self.phone, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub(crate) fn apply(&mut self, patch: ProfilePatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(image) = patch.profile_image {
            self.profile_image = Some(image);
        }
    }
}

/// Partial profile update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<ProfileImage>,
}

impl ProfilePatch {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn profile_image(mut self, image: ProfileImage) -> Self {
        self.profile_image = Some(image);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &ProfilePatch::default()
    }
}
