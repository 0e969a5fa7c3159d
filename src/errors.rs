use thiserror::Error;

use crate::canvas::{MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};

/// Errors that can occur while rendering a canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A rectangle's top-left corner has a negative coordinate
    #[error("Position of rectangle cannot be lower than 0")]
    InvalidPosition,

    /// A rectangle extends past the fixed canvas guard
    #[error("The Canvas size is {width}x{height}")]
    OutOfBounds { width: i64, height: i64 },

    /// Fill or outline contains a byte outside the ASCII range
    #[error("We only accept ASCII characters :)")]
    NonAscii,

    /// Width or height is zero or negative
    #[error("Width and Height must be greater than 0")]
    InvalidSize,

    /// Request body could not be decoded into a rectangle list
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Comparable tag for each [`CanvasError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPosition,
    OutOfBounds,
    NonAscii,
    InvalidSize,
    InvalidPayload,
    Configuration,
    Io,
}

impl CanvasError {
    /// Out-of-bounds error reporting the fixed canvas guard
    pub fn out_of_bounds() -> Self {
        CanvasError::OutOfBounds {
            width: MAX_CANVAS_WIDTH,
            height: MAX_CANVAS_HEIGHT,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CanvasError::InvalidPosition => ErrorKind::InvalidPosition,
            CanvasError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            CanvasError::NonAscii => ErrorKind::NonAscii,
            CanvasError::InvalidSize => ErrorKind::InvalidSize,
            CanvasError::InvalidPayload(_) => ErrorKind::InvalidPayload,
            CanvasError::Configuration(_) => ErrorKind::Configuration,
            CanvasError::Io(_) => ErrorKind::Io,
        }
    }

    /// True for the rectangle validation failures a caller can fix by
    /// changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidPosition
                | ErrorKind::OutOfBounds
                | ErrorKind::NonAscii
                | ErrorKind::InvalidSize
        )
    }
}

/// Type alias for Result with CanvasError
pub type Result<T> = std::result::Result<T, CanvasError>;
