//! Profile picture upload.
//!
//! A picked file is first checked synchronously (type and size). A file that
//! passes becomes an [`ImageRead`], a single-shot task that reads the bytes
//! and encodes them as a `data:` URL. The caller tracks the busy state with
//! [`UploadStatus`] until the task's outcome has been applied.

use crate::error::UploadError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Largest accepted profile picture: 5 MiB.
pub const MAX_PROFILE_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// An embedded image, stored as a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileImage(String);

impl ProfileImage {
    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    /// The full data URL.
    pub fn as_data_url(&self) -> &str {
        &self.0
    }

    /// MIME type recorded in the URL.
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    /// Size of the encoded URL in bytes.
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ProfileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file the user picked as their new profile picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Where the file lives.
    pub path: PathBuf,
    /// File name for display.
    pub file_name: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl ImageCandidate {
    /// Describe a file with a known type and size.
    pub fn new(path: impl Into<PathBuf>, mime_type: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Describe a file on disk, taking its type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| UploadError::Read(e.to_string()))?;
        if !metadata.is_file() {
            return Err(UploadError::Read(format!("{} is not a file", path.display())));
        }
        Ok(Self::new(path, mime_for_path(path), metadata.len()))
    }

    /// Check type and size. A passing file is ready to be read.
    pub fn validate(self, max_bytes: u64) -> Result<ImageRead, UploadError> {
        if !self.mime_type.starts_with("image/") {
            debug!(file = %self.file_name, mime = %self.mime_type, "rejected non-image upload");
            return Err(UploadError::NotAnImage(self.mime_type));
        }
        if self.size > max_bytes {
            debug!(file = %self.file_name, size = self.size, "rejected oversized upload");
            return Err(UploadError::TooLarge {
                size: self.size,
                max_bytes,
            });
        }
        Ok(ImageRead {
            candidate: self,
            max_bytes,
        })
    }
}

/// Guess a MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

/// A validated file waiting to be read. Consumed by [`ImageRead::run`].
#[derive(Debug)]
#[must_use = "an ImageRead does nothing until it is run"]
pub struct ImageRead {
    candidate: ImageCandidate,
    max_bytes: u64,
}

impl ImageRead {
    /// Name of the file being read.
    pub fn file_name(&self) -> &str {
        &self.candidate.file_name
    }

    /// Read the file and encode it.
    ///
    /// The size limit is checked again against the bytes actually read, since
    /// the file may have changed after it was validated.
    pub async fn run(self) -> Result<ProfileImage, UploadError> {
        let ImageCandidate {
            path, mime_type, ..
        } = self.candidate;
        match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.len() as u64 > self.max_bytes => {
                warn!(path = %path.display(), bytes = bytes.len(), "profile image grew past the limit");
                Err(UploadError::TooLarge {
                    size: bytes.len() as u64,
                    max_bytes: self.max_bytes,
                })
            }
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "profile image read");
                Ok(ProfileImage::from_bytes(&mime_type, &bytes))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "profile image read failed");
                Err(UploadError::Read(e.to_string()))
            }
        }
    }
}

/// Busy state of the profile picture upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Nothing in flight; the picker is enabled.
    #[default]
    Idle,
    /// A file is being read.
    Reading { file_name: String },
}

impl UploadStatus {
    /// Check if a read is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Reading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_data_url() {
        let image = ProfileImage::from_bytes("image/png", b"hi");
        assert_eq!(image.as_data_url(), "data:image/png;base64,aGk=");
        assert_eq!(image.mime_type(), "image/png");
    }

    #[test]
    fn test_validate_rejects_non_images() {
        let candidate = ImageCandidate::new("/tmp/notes.txt", "text/plain", 10);
        let err = candidate.validate(MAX_PROFILE_IMAGE_BYTES).unwrap_err();
        assert_eq!(err, UploadError::NotAnImage("text/plain".to_string()));
        assert_eq!(err.to_string(), "Please select a valid image file");
    }

    #[test]
    fn test_validate_rejects_large_files() {
        let candidate = ImageCandidate::new("/tmp/big.png", "image/png", MAX_PROFILE_IMAGE_BYTES + 1);
        let err = candidate.validate(MAX_PROFILE_IMAGE_BYTES).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Image size must be less than 5MB");
    }

    #[test]
    fn test_validate_accepts_exact_limit() {
        let candidate = ImageCandidate::new("/tmp/ok.jpg", "image/jpeg", MAX_PROFILE_IMAGE_BYTES);
        let read = candidate.validate(MAX_PROFILE_IMAGE_BYTES).unwrap();
        assert_eq!(read.file_name(), "ok.jpg");
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b/Photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("avatar.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_for_path(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn test_upload_status() {
        assert!(!UploadStatus::default().is_busy());
        let reading = UploadStatus::Reading {
            file_name: "me.png".to_string(),
        };
        assert!(reading.is_busy());
    }

    #[tokio::test]
    async fn test_read_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let candidate = ImageCandidate::from_path(file.path()).await.unwrap();
        assert_eq!(candidate.mime_type, "image/png");
        assert_eq!(candidate.size, 4);

        let image = candidate
            .validate(MAX_PROFILE_IMAGE_BYTES)
            .unwrap()
            .run()
            .await
            .unwrap();
        assert_eq!(image.as_data_url(), "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_read_rechecks_size_of_bytes_read() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0u8; 10]).unwrap();

        // Validated while the file was still one byte long.
        let read = ImageCandidate::new(file.path(), "image/png", 1)
            .validate(5)
            .unwrap();
        let err = read.run().await.unwrap_err();
        assert_eq!(
            err,
            UploadError::TooLarge {
                size: 10,
                max_bytes: 5
            }
        );
    }

    #[tokio::test]
    async fn test_read_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");

        let err = ImageCandidate::from_path(&missing).await.unwrap_err();
        assert!(matches!(err, UploadError::Read(_)));

        let read = ImageCandidate::new(&missing, "image/png", 10)
            .validate(MAX_PROFILE_IMAGE_BYTES)
            .unwrap();
        let err = read.run().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to upload image");
    }
}
