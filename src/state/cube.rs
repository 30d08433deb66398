use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::grid::FaceGrid;
use crate::vision::palette::Color;

/// The six faces in solver terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceLabel {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

/// Face order of the serialized facelet string. This is the wire contract
/// with the solver; faces are also acquired in this order.
pub const FACELET_FACE_ORDER: [FaceLabel; 6] = [
    FaceLabel::Up,
    FaceLabel::Right,
    FaceLabel::Front,
    FaceLabel::Down,
    FaceLabel::Left,
    FaceLabel::Back,
];

impl FaceLabel {
    /// Acquisition order for scanning, identical to the wire order.
    pub const SCAN_ORDER: [FaceLabel; 6] = FACELET_FACE_ORDER;

    pub fn index(self) -> usize {
        match self {
            FaceLabel::Up => 0,
            FaceLabel::Right => 1,
            FaceLabel::Front => 2,
            FaceLabel::Down => 3,
            FaceLabel::Left => 4,
            FaceLabel::Back => 5,
        }
    }

    /// Solver-term face letter. Doubles as the facelet symbol of the color
    /// on this face's center sticker.
    pub fn letter(self) -> char {
        match self {
            FaceLabel::Up => 'U',
            FaceLabel::Right => 'R',
            FaceLabel::Front => 'F',
            FaceLabel::Down => 'D',
            FaceLabel::Left => 'L',
            FaceLabel::Back => 'B',
        }
    }

    /// Color on this face's center sticker when the cube is held in the
    /// standard orientation. Drives the "show me the <color> face" prompt.
    pub fn center_color(self) -> Color {
        match self {
            FaceLabel::Up => Color::White,
            FaceLabel::Right => Color::Red,
            FaceLabel::Front => Color::Blue,
            FaceLabel::Down => Color::Yellow,
            FaceLabel::Left => Color::Orange,
            FaceLabel::Back => Color::Green,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceLabel::Up => "Up",
            FaceLabel::Right => "Right",
            FaceLabel::Front => "Front",
            FaceLabel::Down => "Down",
            FaceLabel::Left => "Left",
            FaceLabel::Back => "Back",
        }
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete, validated cube state. Only `CubeStateBuilder::finalize`
/// constructs one, so every instance satisfies the color-count invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl CubeState {
    pub(crate) fn new(faces: [FaceGrid; 6]) -> Self {
        Self { faces }
    }

    pub fn face(&self, label: FaceLabel) -> &FaceGrid {
        &self.faces[label.index()]
    }

    /// The 54-character facelet string: faces in `FACELET_FACE_ORDER`,
    /// cells row-major within each face, one solver symbol per sticker.
    pub fn serialize(&self) -> String {
        FACELET_FACE_ORDER
            .iter()
            .flat_map(|label| self.face(*label).cells())
            .map(Color::solver_symbol)
            .collect()
    }
}
