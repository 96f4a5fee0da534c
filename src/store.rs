//! Sources of move images.
//!
//! Everything above this module asks for images by file stem (`R2`, `U'`)
//! and never sees a path.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError};
use tracing::debug;

use crate::error::AssetError;

/// Extension of move assets on disk.
pub const ASSET_EXTENSION: &str = "png";

/// Capability to look up a move image by its file stem.
pub trait ImageStore {
    fn get(&self, stem: &str) -> Result<DynamicImage, AssetError>;
}

/// Reads `<dir>/<stem>.png`, decoding each file at most once.
#[derive(Debug)]
pub struct DirImageStore {
    dir: PathBuf,
    decoded: RefCell<HashMap<String, DynamicImage>>,
}

impl DirImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            decoded: RefCell::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the asset backing `stem`.
    pub fn asset_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{ASSET_EXTENSION}"))
    }

    fn load(&self, stem: &str) -> Result<DynamicImage, AssetError> {
        let path = self.asset_path(stem);
        match image::open(&path) {
            Ok(image) => {
                debug!(path = %path.display(), "decoded move image");
                Ok(image)
            }
            Err(ImageError::IoError(err)) if err.kind() == io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path))
            }
            Err(source) => Err(AssetError::Decode { path, source }),
        }
    }
}

impl ImageStore for DirImageStore {
    fn get(&self, stem: &str) -> Result<DynamicImage, AssetError> {
        if let Some(image) = self.decoded.borrow().get(stem) {
            return Ok(image.clone());
        }
        let image = self.load(stem)?;
        self.decoded
            .borrow_mut()
            .insert(stem.to_string(), image.clone());
        Ok(image)
    }
}

/// In-memory store keyed by stem.
#[derive(Debug, Default, Clone)]
pub struct MemoryImageStore {
    images: HashMap<String, DynamicImage>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stem: impl Into<String>, image: DynamicImage) {
        self.images.insert(stem.into(), image);
    }

    pub fn with(mut self, stem: impl Into<String>, image: DynamicImage) -> Self {
        self.insert(stem, image);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&self, stem: &str) -> Result<DynamicImage, AssetError> {
        self.images
            .get(stem)
            .cloned()
            .ok_or_else(|| AssetError::Missing(stem.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn swatch(r: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([r, 0, 0])))
    }

    #[test]
    fn dir_store_reports_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DirImageStore::new(dir.path());
        let err = store.get("R").expect_err("missing");
        assert!(err.is_missing());
    }

    #[test]
    fn dir_store_decodes_and_memoises() {
        let dir = tempfile::tempdir().expect("tempdir");
        swatch(200).save(dir.path().join("U'.png")).expect("write");
        let store = DirImageStore::new(dir.path());

        let first = store.get("U'").expect("decoded");
        assert_eq!(first.to_rgb8().get_pixel(0, 0), &Rgb([200, 0, 0]));

        // Served from memory once the file is gone.
        std::fs::remove_file(store.asset_path("U'")).expect("remove");
        assert!(store.get("U'").is_ok());
    }

    #[test]
    fn dir_store_treats_garbage_as_decode_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("F.png"), b"not a png").expect("write");
        let store = DirImageStore::new(dir.path());
        let err = store.get("F").expect_err("garbage");
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(!err.is_missing());
    }

    #[test]
    fn memory_store_lookup() {
        let store = MemoryImageStore::new().with("R", swatch(1));
        assert_eq!(store.len(), 1);
        assert!(store.get("R").is_ok());
        assert!(matches!(store.get("R2"), Err(AssetError::Missing(_))));
    }
}
