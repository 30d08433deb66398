use async_trait::async_trait;
use tokio::sync::mpsc::Receiver;

use crate::common::Frame;
use crate::error::CaptureError;

/// Boundary to the image-acquisition collaborator: something that yields
/// successive camera frames on demand.
#[async_trait]
pub trait FrameSource: Send {
    async fn next_frame(&mut self) -> Result<Frame, CaptureError>;
}

/// Frame source backed by an mpsc channel. The acquisition side (camera
/// task, emulator, test harness) owns the sender and pushes frames at its
/// own pace.
pub struct ChannelFrameSource {
    frame_rx: Receiver<Frame>,
}

impl ChannelFrameSource {
    pub fn new(frame_rx: Receiver<Frame>) -> Self {
        Self { frame_rx }
    }
}

#[async_trait]
impl FrameSource for ChannelFrameSource {
    async fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        self.frame_rx.recv().await.ok_or(CaptureError::SourceClosed)
    }
}
