//! Error types for the micro:bit emulator.

use thiserror::Error;

/// Errors surfaced to the emulated program.
///
/// `Io` and `Json` only occur while reading or writing state files and are
/// absorbed inside [`StateStore`](crate::StateStore); they never reach callers
/// of its public methods.
#[derive(Error, Debug)]
pub enum MbitError {
    #[error("Image must be 5x5, got {rows} rows with a row of {cols} columns")]
    Shape { rows: usize, cols: usize },

    #[error("Unknown image: {0}")]
    UnknownImage(String),

    #[error("Pixel index out of bounds: ({row}, {col})")]
    IndexOutOfBounds { row: usize, col: usize },

    #[error("Unexpected character in image definition: {0:?}")]
    InvalidLiteral(char),

    #[error("Brightness multiplier must not be negative: {0}")]
    NegativeBrightness(f32),

    #[error("Unknown state field: {0}")]
    UnknownField(String),

    #[error("Invalid value {value} for field {field}")]
    Validation { field: &'static str, value: String },

    #[error("Unknown button: {0}")]
    UnknownButton(String),

    #[error("Unknown pin: {0}")]
    UnknownPin(u8),

    #[error("Pin value out of range: {0}")]
    PinValue(i64),

    #[error("Malformed state file: {0}")]
    MalformedState(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for emulator operations.
pub type MbitResult<T> = Result<T, MbitError>;
