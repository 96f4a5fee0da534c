//! Rendering helpers for producing the composite move strips.

mod grid;

pub use grid::{GridLayout, compose};
