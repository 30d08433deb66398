use thiserror::Error;

use crate::state::{ColorCensus, FaceLabel};

// Main application error type

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Capture Error: {0}")]
    Capture(#[from] CaptureError),
    #[error("Structural Error: {0}")]
    Structural(#[from] StructuralError),
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Session Error: {0}")]
    Session(String),
    #[error("scan aborted by operator")]
    Aborted,
}

// Errors at the frame-acquisition boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("frame source closed")]
    SourceClosed,
    #[error("capture region ({x}, {y}) {size}x{size} exceeds frame bounds {width}x{height}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        size: u32,
        width: u32,
        height: u32,
    },
}

// Caller-misuse errors during cube-state assembly; surfaced, never retried
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("face {0} was already recorded")]
    DuplicateFace(FaceLabel),
    #[error("expected face {expected} next, got {got}")]
    OutOfOrder { expected: FaceLabel, got: FaceLabel },
    #[error("face {0} has not been recorded")]
    UnknownFace(FaceLabel),
    #[error("cell ({row}, {col}) is outside the 3x3 grid")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("unknown color name: {0}")]
    InvalidColor(String),
    #[error("cube state was already finalized")]
    AlreadyFinalized,
}

// Errors that block finalize; routed back to the correction workflow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("only {0} of 6 faces recorded")]
    IncompleteCube(usize),
    #[error("facelet counts are off: {0}")]
    ColorCountMismatch(ColorCensus),
}
