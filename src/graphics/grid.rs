use image::imageops::{FilterType, overlay, resize};
use image::{DynamicImage, ImageBuffer, RgbImage, Rgba};
use imageproc::rect::Rect;

use crate::error::LayoutError;

const TILES_PER_ROW: u32 = 4;
const TILE_WIDTH: u32 = 200;
const TILE_HEIGHT: u32 = 200;
const PADDING: u32 = 10;
const BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Fixed-column grid geometry for a composite canvas.
///
/// Tiles are placed row-major with `padding` on every side of every tile,
/// including the canvas edges. The canvas is always as wide as a full row.
/// Built only through [`GridLayout::new`] or `Default`, so `columns` and the
/// tile size are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    tile_width: u32,
    tile_height: u32,
    padding: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: TILES_PER_ROW,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            padding: PADDING,
        }
    }
}

impl GridLayout {
    pub fn new(
        columns: u32,
        tile_width: u32,
        tile_height: u32,
        padding: u32,
    ) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(LayoutError::EmptyTile {
                width: tile_width,
                height: tile_height,
            });
        }
        Ok(Self {
            columns,
            tile_width,
            tile_height,
            padding,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Horizontal distance between the left edges of neighbouring tiles.
    pub fn column_step(&self) -> u32 {
        self.tile_width + self.padding
    }

    /// Vertical distance between the top edges of neighbouring rows.
    pub fn row_step(&self) -> u32 {
        self.tile_height + self.padding
    }

    pub fn rows(&self, count: usize) -> u32 {
        count.div_ceil(self.columns as usize) as u32
    }

    /// Canvas `(width, height)` for `count` tiles.
    ///
    /// Zero tiles gives a strip that is only `padding` tall.
    pub fn canvas_size(&self, count: usize) -> (u32, u32) {
        let width = self.columns * self.column_step() + self.padding;
        let height = self.rows(count) * self.row_step() + self.padding;
        (width, height)
    }

    /// Placement of the tile at zero-based `index`.
    pub fn slot(&self, index: usize) -> Rect {
        let columns = self.columns as usize;
        let col = (index % columns) as u32;
        let row = (index / columns) as u32;
        let x = self.padding + col * self.column_step();
        let y = self.padding + row * self.row_step();
        Rect::at(x as i32, y as i32).of_size(self.tile_width, self.tile_height)
    }
}

/// Paint `images` onto a white canvas, each stretched to the tile size.
///
/// Transparent source pixels show the background; the result carries no
/// alpha channel.
pub fn compose(layout: &GridLayout, images: &[DynamicImage]) -> RgbImage {
    let (width, height) = layout.canvas_size(images.len());
    let mut canvas = ImageBuffer::from_pixel(width, height, BACKGROUND);

    for (idx, image) in images.iter().enumerate() {
        let slot = layout.slot(idx);
        let tile = resize(
            &image.to_rgba8(),
            slot.width(),
            slot.height(),
            FilterType::Triangle,
        );
        overlay(&mut canvas, &tile, slot.left() as i64, slot.top() as i64);
    }

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
