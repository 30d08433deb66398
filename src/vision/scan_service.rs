use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower::Service;

use crate::common::Frame;
use crate::config::CaptureConfig;
use crate::error::{CaptureError, ScanError};
use crate::vision::scanner::{FaceScan, FaceScanner};

/// Crops the fixed capture box out of an incoming camera frame and scans
/// it as one cube face.
pub struct FaceScanService {
    scanner: FaceScanner,
    region: CaptureConfig,
}

impl FaceScanService {
    pub fn new(region: CaptureConfig) -> Self {
        Self {
            scanner: FaceScanner::new(),
            region,
        }
    }

    pub fn with_scanner(region: CaptureConfig, scanner: FaceScanner) -> Self {
        Self { scanner, region }
    }

    fn crop_and_scan(&self, frame: &Frame) -> Result<FaceScan, ScanError> {
        let (width, height) = frame.dimensions();
        let region = self.region;
        if region.x + region.size > width || region.y + region.size > height {
            return Err(CaptureError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                size: region.size,
                width,
                height,
            }
            .into());
        }

        let cropped = frame
            .image()
            .crop_imm(region.x, region.y, region.size, region.size)
            .to_rgb8();
        Ok(self.scanner.scan(&cropped))
    }
}

impl Service<Frame> for FaceScanService {
    type Response = FaceScan;
    type Error = ScanError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), ScanError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, frame: Frame) -> Self::Future {
        let scan = self.crop_and_scan(&frame);
        Box::pin(async move { scan })
    }
}
