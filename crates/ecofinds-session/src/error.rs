//! Session and upload errors.

use thiserror::Error;

/// Session error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation needed a logged-in user.
    #[error("Please log in first")]
    NotLoggedIn,
}

/// Profile image upload failures. The text is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The file is not an image.
    #[error("Please select a valid image file")]
    NotAnImage(String),

    /// The file is larger than allowed.
    #[error("Image size must be less than {}", size_limit(.max_bytes))]
    TooLarge { size: u64, max_bytes: u64 },

    /// An upload is already being read.
    #[error("An image is already uploading")]
    Busy,

    /// The file could not be read.
    #[error("Failed to upload image")]
    Read(String),
}

/// Render a byte limit the way the upload form words it: whole megabytes
/// when exact, otherwise kilobytes rounded up.
fn size_limit(max_bytes: &u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    match *max_bytes {
        b if b >= MIB && b % MIB == 0 => format!("{}MB", b / MIB),
        b if b >= KIB => format!("{}KB", b.div_ceil(KIB)),
        b => format!("{} bytes", b),
    }
}

impl UploadError {
    /// Check if the file was rejected before any read started.
    pub fn is_validation(&self) -> bool {
        matches!(self, UploadError::NotAnImage(_) | UploadError::TooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_large(max_bytes: u64) -> String {
        UploadError::TooLarge {
            size: max_bytes + 1,
            max_bytes,
        }
        .to_string()
    }

    #[test]
    fn test_too_large_names_the_limit() {
        assert_eq!(too_large(5 * 1024 * 1024), "Image size must be less than 5MB");
        assert_eq!(too_large(512 * 1024), "Image size must be less than 512KB");
        assert_eq!(too_large(1500), "Image size must be less than 2KB");
        assert_eq!(too_large(300), "Image size must be less than 300 bytes");
    }
}
