use std::fmt;
use vigil_infer::{Detection, InferError};
use vigil_video::{Frame, FrameSource, VideoError};

/// Outcome of one present step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// Stop after this cycle (window closed or Escape pressed).
    Stop,
}

/// Error escaping the frame processing loop. Detect and present failures
/// are fatal; the long-lived handles clean up through their own Drop.
#[derive(Debug)]
pub enum LoopError {
    Video(VideoError),
    Infer(InferError),
    Display(String),
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::Video(err) => write!(f, "video error: {err}"),
            LoopError::Infer(err) => write!(f, "inference error: {err}"),
            LoopError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for LoopError {}

impl From<VideoError> for LoopError {
    fn from(err: VideoError) -> Self {
        LoopError::Video(err)
    }
}

impl From<InferError> for LoopError {
    fn from(err: InferError) -> Self {
        LoopError::Infer(err)
    }
}

/// Drive the read → detect → annotate → display → check-exit cycle.
///
/// Pulls frames from `source` until end of stream, runs `detect` on each,
/// and hands frame + detections to `present`, which displays the annotated
/// frame and then polls for a stop request. A `Stop` answer ends the run
/// after the current cycle, so Escape observed at cycle k always leaves
/// exactly k frames displayed.
///
/// Returns the number of completed display cycles.
pub fn run_loop<S, D, P>(source: &mut S, mut detect: D, mut present: P) -> Result<u64, LoopError>
where
    S: FrameSource,
    D: FnMut(&Frame) -> Result<Vec<Detection>, InferError>,
    P: FnMut(Frame, &[Detection]) -> Result<LoopControl, LoopError>,
{
    let mut cycles = 0u64;

    while let Some(frame) = source.next_frame()? {
        let detections = detect(&frame)?;
        let control = present(frame, &detections)?;
        cycles += 1;

        if control == LoopControl::Stop {
            break;
        }
    }

    Ok(cycles)
}
