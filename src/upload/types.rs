use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A user-selected image waiting to be uploaded.
///
/// Appended to the pending list at selection time and never mutated;
/// only a full session reset removes entries. Selecting the same file
/// twice yields two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl PendingFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        Self { name, path, size }
    }
}

/// Body of the processed-image listing endpoint.
///
/// A response without an `images` field counts as an empty listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessedListing {
    #[serde(default)]
    pub images: Vec<String>,
}

/// Messages sent from the upload worker back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// The batch POST came back 2xx.
    Uploaded,
    /// The upload was refused; the message is shown to the user.
    Rejected(String),
    /// A fresh listing of processed image names, replacing the previous one.
    Listing(Vec<String>),
    /// Always the last event of a submit, whatever the outcome.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::{PendingFile, ProcessedListing};

    #[test]
    fn missing_images_field_is_an_empty_listing() {
        let listing: ProcessedListing = serde_json::from_str("{}").unwrap();
        assert!(listing.images.is_empty());
    }

    #[test]
    fn pending_file_keeps_the_display_name() {
        let file = PendingFile::from_path("photos/cat.jpg");
        assert_eq!(file.name, "cat.jpg");
        assert_eq!(file.size, 0);
    }
}
