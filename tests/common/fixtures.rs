//! Test fixtures: scratch directories with images and config files.

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference values used across tests
pub mod colors {
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GRAY_180: [u8; 4] = [180, 180, 180, 255];
    pub const GRAY_80: [u8; 4] = [80, 80, 80, 255];
}

/// The 5x5 grid with a bright center used for the blur scenario
pub fn blur_scenario() -> RgbaImage {
    RgbaImage::from_fn(5, 5, |x, y| {
        let v = match (x, y) {
            (2, 2) => 220,
            (1..=3, 1..=3) => 180,
            _ => 80,
        };
        Rgba([v, v, v, 255])
    })
}

/// A scratch directory that is removed when dropped
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Save an image as PNG under `name`
    pub fn write_image(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create image dir");
        }
        image.save(&path).expect("Failed to write PNG");
        path
    }

    /// Save a solid color image
    pub fn write_solid(&self, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
        self.write_image(name, &RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    /// Write a config file
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("config.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Write an arbitrary file
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
