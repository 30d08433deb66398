use std::fmt;

use crate::error::{ScanError, StructuralError, ValidationError};
use crate::state::cube::{CubeState, FaceLabel};
use crate::state::grid::FaceGrid;
use crate::vision::palette::Color;

/// Where the builder sits in its lifecycle. Corrections are allowed until
/// `Finalized`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderPhase {
    Empty,
    Accumulating,
    Complete,
    Finalized,
}

/// Per-color facelet counts across the recorded faces. A complete valid
/// cube has every count at exactly 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCensus {
    counts: [u32; 6],
}

impl ColorCensus {
    pub fn count(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn is_balanced(&self) -> bool {
        self.counts.iter().all(|&c| c == 9)
    }

    /// Colors whose counts are off, with their counts.
    pub fn imbalances(&self) -> Vec<(Color, u32)> {
        Color::ALL
            .iter()
            .copied()
            .filter(|color| self.count(*color) != 9)
            .map(|color| (color, self.count(color)))
            .collect()
    }
}

impl fmt::Display for ColorCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in Color::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", color.name(), self.counts[i])?;
        }
        Ok(())
    }
}

/// Accumulates scanned faces, applies operator corrections, and validates
/// the assembled cube before it is handed to the solver.
pub struct CubeStateBuilder {
    faces: [Option<FaceGrid>; 6],
    finalized: bool,
}

impl CubeStateBuilder {
    pub fn new() -> Self {
        Self {
            faces: [None; 6],
            finalized: false,
        }
    }

    pub fn phase(&self) -> BuilderPhase {
        if self.finalized {
            return BuilderPhase::Finalized;
        }
        match self.recorded() {
            0 => BuilderPhase::Empty,
            6 => BuilderPhase::Complete,
            _ => BuilderPhase::Accumulating,
        }
    }

    fn recorded(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    /// Records the next face. Faces must arrive in `FaceLabel::SCAN_ORDER`;
    /// an append out of sequence is a caller bug, not an operator mistake.
    pub fn append(&mut self, label: FaceLabel, grid: FaceGrid) -> Result<(), StructuralError> {
        if self.finalized {
            return Err(StructuralError::AlreadyFinalized);
        }
        if self.faces[label.index()].is_some() {
            return Err(StructuralError::DuplicateFace(label));
        }
        let expected = FaceLabel::SCAN_ORDER[self.recorded()];
        if label != expected {
            return Err(StructuralError::OutOfOrder {
                expected,
                got: label,
            });
        }
        self.faces[label.index()] = Some(grid);
        tracing::info!(face = %label, recorded = self.recorded(), "face recorded");
        Ok(())
    }

    /// Overwrites one sticker on an already-recorded face.
    pub fn correct(
        &mut self,
        label: FaceLabel,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), StructuralError> {
        if self.finalized {
            return Err(StructuralError::AlreadyFinalized);
        }
        match self.faces[label.index()].as_mut() {
            Some(grid) => {
                grid.set(row, col, color)?;
                tracing::info!(face = %label, row, col, color = %color, "cell corrected");
                Ok(())
            }
            None => Err(StructuralError::UnknownFace(label)),
        }
    }

    /// Reads one sticker back, for the correction front end.
    pub fn cell(&self, label: FaceLabel, row: usize, col: usize) -> Result<Color, StructuralError> {
        match self.faces[label.index()] {
            Some(grid) => grid.get(row, col),
            None => Err(StructuralError::UnknownFace(label)),
        }
    }

    pub fn face(&self, label: FaceLabel) -> Option<&FaceGrid> {
        self.faces[label.index()].as_ref()
    }

    /// Counts over everything recorded so far.
    pub fn census(&self) -> ColorCensus {
        let mut counts = [0u32; 6];
        for grid in self.faces.iter().flatten() {
            for color in grid.cells() {
                counts[color.index()] += 1;
            }
        }
        ColorCensus { counts }
    }

    /// Validates and freezes the state. A failed validation leaves the
    /// builder mutable so the operator can fix the offending face and try
    /// again; success is terminal.
    pub fn finalize(&mut self) -> Result<CubeState, ScanError> {
        if self.finalized {
            return Err(StructuralError::AlreadyFinalized.into());
        }
        let recorded = self.recorded();
        if recorded < 6 {
            return Err(ValidationError::IncompleteCube(recorded).into());
        }
        let census = self.census();
        if !census.is_balanced() {
            return Err(ValidationError::ColorCountMismatch(census).into());
        }

        let mut faces = [FaceGrid::uniform(Color::White); 6];
        for (i, slot) in self.faces.iter().enumerate() {
            match slot {
                Some(grid) => faces[i] = *grid,
                None => return Err(ValidationError::IncompleteCube(recorded).into()),
            }
        }
        self.finalized = true;
        tracing::info!("cube state finalized");
        Ok(CubeState::new(faces))
    }
}

impl Default for CubeStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append_all(builder: &mut CubeStateBuilder) {
        for label in FaceLabel::SCAN_ORDER {
            builder
                .append(label, FaceGrid::uniform(label.center_color()))
                .unwrap();
        }
    }

    #[test]
    fn phase_walks_the_state_machine() {
        let mut builder = CubeStateBuilder::new();
        assert_eq!(builder.phase(), BuilderPhase::Empty);

        builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap();
        assert_eq!(builder.phase(), BuilderPhase::Accumulating);

        for label in &FaceLabel::SCAN_ORDER[1..] {
            builder
                .append(*label, FaceGrid::uniform(label.center_color()))
                .unwrap();
        }
        assert_eq!(builder.phase(), BuilderPhase::Complete);

        builder.finalize().unwrap();
        assert_eq!(builder.phase(), BuilderPhase::Finalized);
    }

    #[test]
    fn solved_scan_finalizes_and_serializes() {
        let mut builder = CubeStateBuilder::new();
        append_all(&mut builder);
        let state = builder.finalize().unwrap();
        assert_eq!(
            state.serialize(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn out_of_order_append_is_rejected() {
        let mut builder = CubeStateBuilder::new();
        let err = builder
            .append(FaceLabel::Front, FaceGrid::uniform(Color::Blue))
            .unwrap_err();
        assert_eq!(
            err,
            StructuralError::OutOfOrder {
                expected: FaceLabel::Up,
                got: FaceLabel::Front,
            }
        );
    }

    #[test]
    fn duplicate_append_is_rejected() {
        let mut builder = CubeStateBuilder::new();
        builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap();
        let err = builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap_err();
        assert_eq!(err, StructuralError::DuplicateFace(FaceLabel::Up));
    }

    #[test]
    fn incomplete_cube_cannot_finalize() {
        let mut builder = CubeStateBuilder::new();
        for label in &FaceLabel::SCAN_ORDER[..5] {
            builder
                .append(*label, FaceGrid::uniform(label.center_color()))
                .unwrap();
        }
        let err = builder.finalize().unwrap_err();
        assert!(matches!(
            err,
            ScanError::Validation(ValidationError::IncompleteCube(5))
        ));
        // Validation failure leaves the builder usable.
        assert_eq!(builder.phase(), BuilderPhase::Accumulating);
    }

    #[test]
    fn unbalanced_census_cannot_finalize() {
        let mut builder = CubeStateBuilder::new();
        append_all(&mut builder);
        // One white sticker misread as red: white=8, red=10.
        builder
            .correct(FaceLabel::Up, 0, 0, Color::Red)
            .unwrap();

        let err = builder.finalize().unwrap_err();
        match err {
            ScanError::Validation(ValidationError::ColorCountMismatch(census)) => {
                assert_eq!(census.count(Color::White), 8);
                assert_eq!(census.count(Color::Red), 10);
                assert_eq!(
                    census.imbalances(),
                    vec![(Color::White, 8), (Color::Red, 10)]
                );
            }
            other => panic!("expected ColorCountMismatch, got {other:?}"),
        }

        // The operator fixes the cell and finalize goes through.
        builder
            .correct(FaceLabel::Up, 0, 0, Color::White)
            .unwrap();
        assert!(builder.finalize().is_ok());
    }

    #[test]
    fn correct_then_read_back_returns_the_new_color() {
        let mut builder = CubeStateBuilder::new();
        builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap();
        builder
            .correct(FaceLabel::Up, 2, 1, Color::Orange)
            .unwrap();
        assert_eq!(builder.cell(FaceLabel::Up, 2, 1).unwrap(), Color::Orange);
    }

    #[test]
    fn correcting_an_unrecorded_face_is_rejected() {
        let mut builder = CubeStateBuilder::new();
        let err = builder
            .correct(FaceLabel::Back, 0, 0, Color::Green)
            .unwrap_err();
        assert_eq!(err, StructuralError::UnknownFace(FaceLabel::Back));
    }

    #[test]
    fn correcting_out_of_range_cell_is_rejected() {
        let mut builder = CubeStateBuilder::new();
        builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap();
        let err = builder.correct(FaceLabel::Up, 0, 3, Color::Red).unwrap_err();
        assert_eq!(err, StructuralError::IndexOutOfRange { row: 0, col: 3 });
    }

    #[test]
    fn finalized_builder_rejects_all_mutation() {
        let mut builder = CubeStateBuilder::new();
        append_all(&mut builder);
        builder.finalize().unwrap();

        assert_eq!(
            builder.append(FaceLabel::Up, FaceGrid::uniform(Color::White)),
            Err(StructuralError::AlreadyFinalized)
        );
        assert_eq!(
            builder.correct(FaceLabel::Up, 0, 0, Color::Red),
            Err(StructuralError::AlreadyFinalized)
        );
        assert!(matches!(
            builder.finalize(),
            Err(ScanError::Structural(StructuralError::AlreadyFinalized))
        ));
    }

    #[test]
    fn census_display_lists_every_color() {
        let mut builder = CubeStateBuilder::new();
        builder
            .append(FaceLabel::Up, FaceGrid::uniform(Color::White))
            .unwrap();
        let census = builder.census();
        assert_eq!(census.count(Color::White), 9);
        assert_eq!(
            census.to_string(),
            "white=9 red=0 blue=0 yellow=0 orange=0 green=0"
        );
    }
}
