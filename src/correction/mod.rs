use async_trait::async_trait;

use crate::error::ScanError;
use crate::state::{ColorCensus, FaceLabel};
use crate::vision::palette::Color;
use crate::vision::scanner::FaceScan;

/// A single-cell edit requested by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCorrection {
    pub row: usize,
    pub col: usize,
    pub color: Color,
}

/// Operator verdict on a freshly scanned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    /// The grid is right; commit it.
    Confirm,
    /// Fix one cell, then present the face again.
    Correct(CellCorrection),
    /// Discard this scan and capture the face again.
    Recapture,
    /// Stop the whole session.
    Abort,
}

/// Operator verdict when the assembled cube fails the color-count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchResolution {
    Correct {
        label: FaceLabel,
        correction: CellCorrection,
    },
    Abort,
}

/// Request/response seam to whatever front end talks to the operator. The
/// coordinator presents grids and applies the answers; how they are
/// rendered or collected is the front end's business.
#[async_trait]
pub trait CorrectionHandler: Send {
    /// Present one scanned face. Called again after every applied
    /// correction until the answer is Confirm, Recapture, or Abort.
    async fn review(&mut self, label: FaceLabel, scan: &FaceScan) -> Result<Review, ScanError>;

    /// The assembled cube failed the color-count check; let the operator
    /// fix a cell or give up.
    async fn resolve_mismatch(
        &mut self,
        census: &ColorCensus,
    ) -> Result<MismatchResolution, ScanError>;
}

/// Front end that accepts every scan as-is. Used by tests and unattended
/// runs.
pub struct AutoConfirm;

#[async_trait]
impl CorrectionHandler for AutoConfirm {
    async fn review(&mut self, _label: FaceLabel, _scan: &FaceScan) -> Result<Review, ScanError> {
        Ok(Review::Confirm)
    }

    async fn resolve_mismatch(
        &mut self,
        census: &ColorCensus,
    ) -> Result<MismatchResolution, ScanError> {
        tracing::warn!(%census, "no operator available to resolve the mismatch");
        Ok(MismatchResolution::Abort)
    }
}
