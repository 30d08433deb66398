use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tower::{Service, ServiceExt};

use crate::{
    capture::FrameSource,
    common::Frame,
    config::Configuration,
    correction::{CorrectionHandler, MismatchResolution, Review},
    error::{ScanError, ValidationError},
    solver::{MoveSequence, SolveError, Solver},
    state::{CubeState, CubeStateBuilder, FaceLabel},
    vision::scan_service::FaceScanService,
    vision::scanner::FaceScan,
};

/// How a completed scan session ended. A solver failure is an outcome to
/// report, not a scan error; the core never interprets or retries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanOutcome {
    Solved {
        facelets: String,
        solution: MoveSequence,
    },
    SolverFailed {
        facelets: String,
        error: SolveError,
    },
}

impl ScanOutcome {
    pub fn facelets(&self) -> &str {
        match self {
            ScanOutcome::Solved { facelets, .. } => facelets,
            ScanOutcome::SolverFailed { facelets, .. } => facelets,
        }
    }

    /// Machine-readable session report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Drives one scan session: capture each face, run the operator review
/// loop, assemble and validate the cube state, then hand it to the solver.
pub struct Coordinator {
    source: Box<dyn FrameSource>,
    handler: Box<dyn CorrectionHandler>,
    solver: Box<dyn Solver>,
    scan_service: FaceScanService,
    cancel_token: CancellationToken,
}

impl Coordinator {
    /// Token that aborts the session from outside. Cancelling mid-face
    /// discards only the pending scan; recorded faces are untouched.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub async fn run(&mut self) -> Result<ScanOutcome, ScanError> {
        let mut builder = CubeStateBuilder::new();

        for label in FaceLabel::SCAN_ORDER {
            tracing::info!(
                face = %label,
                center = %label.center_color(),
                "waiting for the {} face in the capture box",
                label.center_color()
            );
            let scan = self.capture_face(label).await?;
            builder.append(label, scan.grid)?;
        }

        let state = self.validate(&mut builder).await?;
        let facelets = state.serialize();
        tracing::info!(%facelets, "cube state assembled");

        match self.solver.solve(&facelets) {
            Ok(solution) => {
                tracing::info!(%solution, "solution found");
                Ok(ScanOutcome::Solved { facelets, solution })
            }
            Err(error) => {
                tracing::warn!(%error, "solver failed");
                Ok(ScanOutcome::SolverFailed { facelets, error })
            }
        }
    }

    /// Scans one face and runs the review loop until the operator confirms
    /// the grid. `Recapture` throws the pending scan away and starts the
    /// face over; nothing already recorded is touched.
    async fn capture_face(&mut self, label: FaceLabel) -> Result<FaceScan, ScanError> {
        'capture: loop {
            let frame = self.next_frame().await?;
            let mut scan = self.scan_service.ready().await?.call(frame).await?;
            tracing::debug!(
                face = %label,
                confidence = scan.min_confidence(),
                "face scanned"
            );

            loop {
                match self.handler.review(label, &scan).await? {
                    Review::Confirm => return Ok(scan),
                    Review::Correct(edit) => {
                        scan.grid.set(edit.row, edit.col, edit.color)?;
                    }
                    Review::Recapture => {
                        tracing::warn!(face = %label, "operator requested recapture");
                        continue 'capture;
                    }
                    Review::Abort => return Err(ScanError::Aborted),
                }
            }
        }
    }

    async fn next_frame(&mut self) -> Result<Frame, ScanError> {
        tokio::select! {
            // Cancellation wins over a frame that is already waiting.
            biased;
            _ = self.cancel_token.cancelled() => Err(ScanError::Aborted),
            frame = self.source.next_frame() => Ok(frame?),
        }
    }

    /// Finalizes the builder, looping validation failures back through the
    /// operator until the counts balance or the operator gives up.
    async fn validate(&mut self, builder: &mut CubeStateBuilder) -> Result<CubeState, ScanError> {
        loop {
            match builder.finalize() {
                Ok(state) => return Ok(state),
                Err(ScanError::Validation(ValidationError::ColorCountMismatch(census))) => {
                    tracing::warn!(%census, "cube state failed validation");
                    match self.handler.resolve_mismatch(&census).await? {
                        MismatchResolution::Correct { label, correction } => {
                            builder.correct(
                                label,
                                correction.row,
                                correction.col,
                                correction.color,
                            )?;
                        }
                        MismatchResolution::Abort => return Err(ScanError::Aborted),
                    }
                }
                Err(other) => return Err(other),
            }
        }
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    source: Option<Box<dyn FrameSource>>,
    handler: Option<Box<dyn CorrectionHandler>>,
    solver: Option<Box<dyn Solver>>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            source: None,
            handler: None,
            solver: None,
        }
    }

    pub fn source(mut self, source: Box<dyn FrameSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn handler(mut self, handler: Box<dyn CorrectionHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn solver(mut self, solver: Box<dyn Solver>) -> Self {
        self.solver = Some(solver);
        self
    }

    pub fn build(self) -> Result<Coordinator, ScanError> {
        let source = self
            .source
            .ok_or_else(|| ScanError::Session("frame source not set".to_string()))?;
        let handler = self
            .handler
            .ok_or_else(|| ScanError::Session("correction handler not set".to_string()))?;
        let solver = self
            .solver
            .ok_or_else(|| ScanError::Session("solver not set".to_string()))?;

        Ok(Coordinator {
            source,
            handler,
            solver,
            scan_service: FaceScanService::new(self.configuration.capture),
            cancel_token: CancellationToken::new(),
        })
    }
}
