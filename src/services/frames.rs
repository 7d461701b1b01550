//! Loading still images as frames.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::ProcessError;

/// File extensions accepted as frames
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decode one image file.
pub fn load_image(path: &Path) -> Result<DynamicImage, ProcessError> {
    let bytes = fs::read(path).map_err(|source| ProcessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| ProcessError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Resolve an input path to an ordered list of image files.
///
/// A file is returned as is. A directory yields its image files sorted by
/// name, so numbered frame dumps replay in order.
pub fn collect_frame_paths(input: &Path) -> Result<Vec<PathBuf>, ProcessError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = fs::read_dir(input).map_err(|source| ProcessError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ProcessError::NoImages(input.to_path_buf()));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("frame_001.png")));
        assert!(is_image(Path::new("photo.JPG")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_image(Path::new("/nonexistent/frame.png")).unwrap_err();
        assert!(matches!(err, ProcessError::Io { .. }));
    }

    #[test]
    fn test_directory_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "c.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let paths = collect_frame_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            collect_frame_paths(dir.path()),
            Err(ProcessError::NoImages(_))
        ));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(matches!(
            load_image(&path),
            Err(ProcessError::Decode { .. })
        ));
    }
}
