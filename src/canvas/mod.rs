//! # ASCII canvas renderer
//!
//! Turns an ordered list of rectangle requests into a text drawing:
//!
//! ```text
//!   requests ──► validate ──► dimension ──► paint (in order) ──► to_text
//!                   │
//!                   └──► CanvasError (first offending rule)
//! ```
//!
//! Cells are painted last-writer-wins. Every rectangle must fit inside a
//! fixed 100x100 guard; the canvas itself is only as large as the bounding
//! box of the request.

mod canvas;
mod render;
mod shapes;

/// Maximum column extent (`col + width`) of any rectangle
pub const MAX_CANVAS_WIDTH: i64 = 100;
/// Maximum row extent (`row + height`) of any rectangle
pub const MAX_CANVAS_HEIGHT: i64 = 100;

pub use canvas::{Canvas, CanvasSize};
pub use render::{dimension, paint, render, render_batch, validate};
pub use shapes::{normalize_strokes, CellPos, RectangleSpec, Shape, Strokes, BLANK, NONE_SENTINEL};
