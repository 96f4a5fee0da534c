//! End-to-end conversion of an algorithms file into composite pictures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbImage;
use tracing::{info, warn};

use crate::graphics::{GridLayout, compose};
use crate::moves;
use crate::resolve::resolve_algorithm;
use crate::store::{DirImageStore, ImageStore};

pub const DEFAULT_INPUT: &str = "algorithms.txt";
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: GridLayout,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            output_dir: PathBuf::from("."),
            layout: GridLayout::default(),
        }
    }
}

/// A composed algorithm, with how many tiles made it onto the canvas.
#[derive(Debug)]
pub struct Rendered {
    pub canvas: RgbImage,
    pub requested: usize,
    pub tiles: usize,
}

/// Outcome of a whole run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Read every line of the input, blank lines included.
pub fn read_algorithms(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read algorithms from {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Output file name for the algorithm on 1-based line `number`.
pub fn output_file_name(number: usize) -> String {
    format!("combined_picture_{number}.png")
}

/// Resolve and compose a single algorithm line.
pub fn render_algorithm<S: ImageStore + ?Sized>(
    store: &S,
    layout: &GridLayout,
    algorithm: &str,
) -> Rendered {
    let images = resolve_algorithm(store, algorithm);
    Rendered {
        canvas: compose(layout, &images),
        requested: moves::lookups(algorithm).count(),
        tiles: images.len(),
    }
}

/// Render every algorithm in `algorithms` into `output_dir`.
///
/// A failed write is logged and does not stop the remaining algorithms.
pub fn render_all<S: ImageStore + ?Sized>(
    store: &S,
    layout: &GridLayout,
    algorithms: &[String],
    output_dir: &Path,
) -> ConversionSummary {
    let mut summary = ConversionSummary::default();
    for (idx, algorithm) in algorithms.iter().enumerate() {
        let target = output_dir.join(output_file_name(idx + 1));
        let rendered = render_algorithm(store, layout, algorithm);
        if rendered.tiles == 0 {
            warn!(line = idx + 1, "no move images resolved; writing blank strip");
        }
        match save(&rendered.canvas, &target) {
            Ok(()) => {
                info!(
                    line = idx + 1,
                    tiles = rendered.tiles,
                    skipped = rendered.requested - rendered.tiles,
                    "rendered algorithm"
                );
                println!("Saved picture: {}", target.display());
                summary.written.push(target);
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "error saving picture");
                summary.failed.push(target);
            }
        }
    }
    summary
}

fn save(canvas: &RgbImage, target: &Path) -> Result<()> {
    canvas
        .save(target)
        .with_context(|| format!("failed to write {}", target.display()))
}

/// Run a full conversion: read all algorithms, then render them one by one.
///
/// Failing to read the input aborts before anything is written.
pub fn convert(options: &ConvertOptions) -> Result<ConversionSummary> {
    let algorithms = read_algorithms(&options.input)?;
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            options.output_dir.display()
        )
    })?;
    let store = DirImageStore::new(&options.images_dir);
    info!(
        algorithms = algorithms.len(),
        images = %store.dir().display(),
        "converting"
    );
    Ok(render_all(
        &store,
        &options.layout,
        &algorithms,
        &options.output_dir,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryImageStore;
    use image::{DynamicImage, Rgb};
    use pretty_assertions::assert_eq;

    #[test]
    fn output_names_are_one_based() {
        assert_eq!(output_file_name(1), "combined_picture_1.png");
        assert_eq!(output_file_name(12), "combined_picture_12.png");
    }

    #[test]
    fn counts_requested_and_placed_tiles() {
        let store = MemoryImageStore::new().with(
            "R",
            DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([9, 9, 9]))),
        );
        let rendered = render_algorithm(&store, &GridLayout::default(), "R R2 U");
        assert_eq!(rendered.requested, 4);
        assert_eq!(rendered.tiles, 3);
        assert_eq!(rendered.canvas.dimensions(), (850, 220));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_algorithms(&dir.path().join("nope.txt")).expect_err("missing");
        assert!(format!("{err:#}").contains("failed to read algorithms"));
    }

    #[test]
    fn keeps_blank_lines_for_numbering() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("algorithms.txt");
        fs::write(&path, "R U\n\nF2\n").expect("write");
        let lines = read_algorithms(&path).expect("read");
        assert_eq!(lines, vec!["R U", "", "F2"]);
    }
}
