use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vigil_base::{Rect, Vec2};
use vigil_infer::{Detection, InferError};
use vigil_video::{Frame, FrameSource, VideoError};

mod run {
    include!("../src/run.rs");
}

use run::{run_loop, LoopControl, LoopError};

/// Source serving a fixed number of identical frames, recording how often
/// it is released.
struct CountingSource {
    remaining: usize,
    released: Arc<AtomicUsize>,
}

impl CountingSource {
    fn new(frames: usize, released: Arc<AtomicUsize>) -> Self {
        Self {
            remaining: frames,
            released,
        }
    }
}

impl FrameSource for CountingSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, VideoError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(Frame::new(4, 4, vec![0u8; 4 * 4 * 3]).unwrap()))
    }
}

impl Drop for CountingSource {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

fn some_detection() -> Detection {
    Detection {
        bbox: Rect::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)),
        class_id: 0,
        confidence: 0.9,
    }
}

#[test]
fn test_n_frames_yield_n_cycles_and_one_release() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut detect_calls = 0;
    let mut present_calls = 0;

    {
        let mut source = CountingSource::new(3, Arc::clone(&released));

        let cycles = run_loop(
            &mut source,
            |_frame| {
                detect_calls += 1;
                Ok(vec![some_detection()])
            },
            |_frame, _detections| {
                present_calls += 1;
                Ok(LoopControl::Continue)
            },
        )
        .unwrap();

        assert_eq!(cycles, 3);
    }

    assert_eq!(detect_calls, 3);
    assert_eq!(present_calls, 3);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stop_at_cycle_k_completes_exactly_k_cycles() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut detect_calls = 0;
    let mut present_calls = 0;

    let mut source = CountingSource::new(100, Arc::clone(&released));

    let cycles = run_loop(
        &mut source,
        |_frame| {
            detect_calls += 1;
            Ok(Vec::new())
        },
        |_frame, _detections| {
            present_calls += 1;
            // Escape observed during cycle 42's poll
            if present_calls == 42 {
                Ok(LoopControl::Stop)
            } else {
                Ok(LoopControl::Continue)
            }
        },
    )
    .unwrap();

    // Cycle 42 completed its display step; cycle 43 never began
    assert_eq!(cycles, 42);
    assert_eq!(detect_calls, 42);
    assert_eq!(present_calls, 42);
}

#[test]
fn test_empty_stream_runs_zero_cycles() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut source = CountingSource::new(0, Arc::clone(&released));

    let cycles = run_loop(
        &mut source,
        |_frame| panic!("detect must not run on an empty stream"),
        |_frame, _detections| panic!("present must not run on an empty stream"),
    )
    .unwrap();

    assert_eq!(cycles, 0);
}

#[test]
fn test_zero_detections_reach_present_unchanged() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut source = CountingSource::new(1, Arc::clone(&released));

    run_loop(
        &mut source,
        |_frame| Ok(Vec::new()),
        |frame, detections| {
            assert!(detections.is_empty());
            // Nothing annotated anything; pixels are the source pixels
            assert_eq!(frame.data(), &[0u8; 4 * 4 * 3]);
            Ok(LoopControl::Continue)
        },
    )
    .unwrap();
}

#[test]
fn test_detect_error_is_fatal_and_still_releases_once() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut detect_calls = 0;

    {
        let mut source = CountingSource::new(10, Arc::clone(&released));

        let result = run_loop(
            &mut source,
            |_frame| {
                detect_calls += 1;
                if detect_calls == 2 {
                    Err(InferError::Backend("inference failed".to_string()))
                } else {
                    Ok(Vec::new())
                }
            },
            |_frame, _detections| Ok(LoopControl::Continue),
        );

        assert!(matches!(result, Err(LoopError::Infer(_))));
    }

    assert_eq!(detect_calls, 2);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_present_error_is_fatal() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut source = CountingSource::new(10, Arc::clone(&released));

    let result = run_loop(
        &mut source,
        |_frame| Ok(Vec::new()),
        |_frame, _detections| Err(LoopError::Display("window died".to_string())),
    );

    assert!(matches!(result, Err(LoopError::Display(_))));
}
