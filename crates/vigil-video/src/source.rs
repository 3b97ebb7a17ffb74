use crate::{Frame, VideoError};
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use ffmpeg_sidecar::iter::FfmpegIterator;
use std::path::Path;

/// Blocking sequential frame supplier.
///
/// `Ok(None)` means the stream has ended. Implementations absorb per-frame
/// read problems into end-of-stream; `Err` is reserved for failures that
/// leave the source unusable.
pub trait FrameSource {
    /// Receive the next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<Frame>, VideoError>;
}

/// Video file frame source backed by an ffmpeg child process.
///
/// The child decodes the file to rawvideo RGB24 on a pipe; frames are pulled
/// through the blocking event iterator. Dropping the source kills and reaps
/// the child, so the decoder is released exactly once on every exit path.
pub struct FileSource {
    child: FfmpegChild,
    events: FfmpegIterator,
    dimensions: Option<(u32, u32)>,
    finished: bool,
}

impl std::fmt::Debug for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSource")
            .field("dimensions", &self.dimensions)
            .field("finished", &self.finished)
            .finish()
    }
}

impl FileSource {
    /// Open a video file for sequential decoding.
    ///
    /// # Errors
    ///
    /// Returns `VideoError::Open` if the file does not exist or the ffmpeg
    /// binary cannot be spawned, and `VideoError::Stream` if the event
    /// stream cannot be attached. All of these are fatal: a source that
    /// cannot open never yields frames.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref();

        // ffmpeg spawns fine for a missing file and only fails on its log
        // channel; check up front so open failures are fatal before any
        // window exists.
        if !path.is_file() {
            return Err(VideoError::Open(format!(
                "no such video file: {}",
                path.display()
            )));
        }

        let mut child = FfmpegCommand::new()
            .input(path.to_string_lossy())
            .rawvideo()
            .spawn()
            .map_err(|e| VideoError::Open(format!("failed to spawn ffmpeg: {e}")))?;

        let events = child
            .iter()
            .map_err(|e| VideoError::Stream(e.to_string()))?;

        log::info!("opened video file: {}", path.display());

        Ok(Self {
            child,
            events,
            dimensions: None,
            finished: false,
        })
    }

    /// Dimensions of the stream, fixed by the first decoded frame.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

impl FrameSource for FileSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, VideoError> {
        if self.finished {
            return Ok(None);
        }

        for event in self.events.by_ref() {
            match event {
                FfmpegEvent::OutputFrame(raw) => {
                    if raw.pix_fmt != "rgb24" {
                        log::warn!("unexpected pixel format '{}', stopping", raw.pix_fmt);
                        self.finished = true;
                        return Ok(None);
                    }

                    match self.dimensions {
                        None => self.dimensions = Some((raw.width, raw.height)),
                        Some((w, h)) if (raw.width, raw.height) != (w, h) => {
                            log::warn!(
                                "frame dimensions changed from {}x{} to {}x{}, stopping",
                                w,
                                h,
                                raw.width,
                                raw.height
                            );
                            self.finished = true;
                            return Ok(None);
                        }
                        Some(_) => {}
                    }

                    match Frame::new(raw.width, raw.height, raw.data) {
                        Ok(frame) => return Ok(Some(frame)),
                        Err(e) => {
                            // A short buffer means a truncated read; treat it
                            // like end of stream.
                            log::warn!("unreadable frame: {}", e);
                            self.finished = true;
                            return Ok(None);
                        }
                    }
                }
                FfmpegEvent::Error(msg) => {
                    log::warn!("ffmpeg: {}", msg);
                }
                FfmpegEvent::Done => {
                    self.finished = true;
                    return Ok(None);
                }
                _ => {}
            }
        }

        self.finished = true;
        Ok(None)
    }
}

impl Drop for FileSource {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
