pub mod capture;
pub mod common;
pub mod config;
pub mod coordinator;
pub mod correction;
pub mod error;
pub mod solver;
pub mod state;
pub mod vision;

pub use capture::{ChannelFrameSource, FrameSource};
pub use common::Frame;
pub use config::{CaptureConfig, Configuration};
pub use coordinator::{Coordinator, CoordinatorBuilder, ScanOutcome};
pub use correction::{AutoConfirm, CellCorrection, CorrectionHandler, MismatchResolution, Review};
pub use error::{CaptureError, ScanError, StructuralError, ValidationError};
pub use solver::{MoveSequence, SolveError, Solver, FACELET_COUNT};
pub use state::{
    BuilderPhase, ColorCensus, CubeState, CubeStateBuilder, FaceGrid, FaceLabel, FACELET_FACE_ORDER,
};
pub use vision::{Classification, Color, ColorClassifier, ColorRange, FaceScan, FaceScanner};
