pub mod builder;
pub mod cube;
pub mod grid;

pub use builder::{BuilderPhase, ColorCensus, CubeStateBuilder};
pub use cube::{CubeState, FaceLabel, FACELET_FACE_ORDER};
pub use grid::FaceGrid;
