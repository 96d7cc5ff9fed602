//! The single user session.
//!
//! Credentials are not checked: login and signup always succeed and build a
//! mock profile.

use crate::error::SessionError;
use crate::profile_image::ProfileImage;
use crate::user::{ProfilePatch, User};
use ecofinds_market::ids::UserId;
use serde::{Deserialize, Serialize};
use tracing::info;

/// ID given to every mock user.
pub const MOCK_USER_ID: &str = "1";

const MOCK_FULL_NAME: &str = "John Doe";
const MOCK_PHONE: &str = "+1 (555) 123-4567";
const MOCK_ADDRESS: &str = "123 Main St, City, State 12345";

/// Holds the logged-in user, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Create a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in. The password is accepted as is.
    ///
    /// The username is the part of the email before `@`; the remaining
    /// profile fields get placeholder values.
    pub fn login(&mut self, email: &str, _password: &str) -> &User {
        let email = email.trim();
        let username = email.split('@').next().unwrap_or(email);
        info!(username, "user logged in");
        self.user.insert(User {
            id: UserId::new(MOCK_USER_ID),
            email: email.to_string(),
            username: username.to_string(),
            full_name: MOCK_FULL_NAME.to_string(),
            phone: MOCK_PHONE.to_string(),
            address: MOCK_ADDRESS.to_string(),
            profile_image: None,
        })
    }

    /// Sign up. The new profile has only email and username filled in.
    pub fn signup(&mut self, email: &str, _password: &str, username: &str) -> &User {
        info!(username, "user signed up");
        self.user.insert(User {
            id: UserId::new(MOCK_USER_ID),
            email: email.trim().to_string(),
            username: username.trim().to_string(),
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            profile_image: None,
        })
    }

    /// Drop the current user. Returns the user that was logged in.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(user) = &user {
            info!(username = %user.username, "user logged out");
        }
        user
    }

    /// The logged-in user.
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Check if someone is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, or `NotLoggedIn`.
    pub fn require(&self) -> Result<&User, SessionError> {
        self.user.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// Merge profile edits into the current user.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<&User, SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        user.apply(patch);
        info!(user_id = %user.id, "profile updated");
        Ok(user)
    }

    /// Replace the current user's profile picture.
    pub fn set_profile_image(&mut self, image: ProfileImage) -> Result<&User, SessionError> {
        self.update_profile(ProfilePatch::default().profile_image(image))
    }
}
