//! Render Rubik's Cube move algorithms as tiled pictures, one tile per move.

pub mod convert;
mod error;
mod graphics;
pub mod moves;
mod resolve;
mod store;

pub use convert::{
    ConversionSummary, ConvertOptions, Rendered, convert, output_file_name, read_algorithms,
    render_algorithm, render_all,
};
pub use error::{AssetError, LayoutError};
pub use graphics::{GridLayout, compose};
pub use moves::{Move, MoveKey, parse_algorithm};
pub use resolve::{resolve, resolve_algorithm};
pub use store::{DirImageStore, ImageStore, MemoryImageStore};
