//! Static content sources: the info text file and the image directory.

use crate::errors::ContentError;
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Read the static info text shown by the info action
pub fn read_info_text(path: &Path) -> Result<String, ContentError> {
    let text = fs::read_to_string(path)?;
    Ok(text)
}

/// List image files in a directory, filtered by extension
/// (case-insensitive .jpg/.jpeg/.png). Subdirectories are not descended.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        }
    }

    debug!(dir = %dir.display(), count = images.len(), "Listed image directory");
    Ok(images)
}

/// Uniformly pick one image from the directory. `None` means the
/// directory was missing, unreadable, or held no matching files.
pub fn pick_random_image(dir: &Path) -> Option<PathBuf> {
    let images = list_images(dir).ok()?;
    images.choose(&mut rand::thread_rng()).cloned()
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
