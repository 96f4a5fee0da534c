use std::path::PathBuf;
use thiserror::Error;

/// Reasons a move image could not be produced.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("no image registered for '{0}'")]
    Missing(String),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// True when the asset simply does not exist, as opposed to being unreadable.
    pub fn is_missing(&self) -> bool {
        matches!(self, AssetError::NotFound(_) | AssetError::Missing(_))
    }
}

/// Rejected grid parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("tile size must be non-zero (got {width}x{height})")]
    EmptyTile { width: u32, height: u32 },
}
