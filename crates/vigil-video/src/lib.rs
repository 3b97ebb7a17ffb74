//! Video frame supply for the vigil viewer.
//!
//! Frames are decoded by an ffmpeg child process (`ffmpeg-sidecar`) and
//! surfaced one at a time through the blocking [`FrameSource`] trait.
//! All frames use HWC layout: `[height, width, 3]`, RGB.

pub mod error;
pub mod frame;
pub mod source;

pub use error::VideoError;
pub use frame::Frame;
pub use source::{FileSource, FrameSource};
