//! Session state for EcoFinds: the mocked login, the user's profile and
//! the profile picture upload.

mod error;
mod profile_image;
mod session;
mod user;

pub use error::{SessionError, UploadError};
pub use profile_image::{
    mime_for_path, ImageCandidate, ImageRead, ProfileImage, UploadStatus, MAX_PROFILE_IMAGE_BYTES,
};
pub use session::{Session, MOCK_USER_ID};
pub use user::{ProfilePatch, User};
