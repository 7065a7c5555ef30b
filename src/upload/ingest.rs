use crate::upload::types::PendingFile;
use ignore::Walk;
use std::path::Path;

/// Extensions the selection surfaces accept.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Collects every supported image under `dir`, respecting ignore files,
/// in name order.
pub fn collect_images(dir: &Path) -> Vec<PendingFile> {
    let mut files = Vec::new();
    for entry in Walk::new(dir) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && is_supported_image(path) {
                    files.push(PendingFile::from_path(path));
                }
            }
            Err(e) => log::warn!("error walking {}: {e}", dir.display()),
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}
