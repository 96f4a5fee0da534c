//! Mapping move keys to renderable images.

use image::DynamicImage;
use tracing::{debug, warn};

use crate::error::AssetError;
use crate::moves::{self, MoveKey};
use crate::store::ImageStore;

/// Resolve a move key to an image.
///
/// A double turn without dedicated artwork falls back to the plain move
/// image. Nothing else falls back; a reverse move without its own image
/// resolves to `None`. Failures are logged, never propagated.
pub fn resolve<S: ImageStore + ?Sized>(store: &S, key: &MoveKey) -> Option<DynamicImage> {
    match lookup(store, key) {
        Ok(image) => Some(image),
        Err(err) => {
            warn!(key = %key, error = %err, "skipping move");
            None
        }
    }
}

fn lookup<S: ImageStore + ?Sized>(store: &S, key: &MoveKey) -> Result<DynamicImage, AssetError> {
    match store.get(&key.stem()) {
        Err(err) if err.is_missing() && key.is_double() => {
            debug!(key = %key, "no double-turn image, using plain move");
            store.get(&key.plain().stem())
        }
        other => other,
    }
}

/// Resolve every lookup of an algorithm in order, dropping unresolved ones.
pub fn resolve_algorithm<S: ImageStore + ?Sized>(store: &S, algorithm: &str) -> Vec<DynamicImage> {
    moves::lookups(algorithm)
        .filter_map(|key| resolve(store, &key))
        .collect()
}
