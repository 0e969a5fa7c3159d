//! # Canvas Render
//!
//! Renders ordered lists of rectangle requests into ASCII-art drawings.
//! Each rectangle has an outline and a fill character; rectangles are
//! composited in request order onto a canvas sized to their bounding box.

pub mod canvas;
pub mod config;
pub mod errors;
pub mod types;

pub use canvas::{render, render_batch, RectangleSpec};
pub use config::{load_config, OutputFormat, RenderConfig};
pub use errors::{CanvasError, ErrorKind, Result};
pub use types::{parse_request, CanvasCreateRequest, CanvasResponse, ErrorResponse};
