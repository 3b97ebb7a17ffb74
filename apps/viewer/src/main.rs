mod overlay;
mod run;

use minifb::{Key, Window, WindowOptions};
use overlay::{draw_detections, rgb_to_argb};
use run::{run_loop, LoopControl, LoopError};
use vigil_base::log;
use vigil_infer::{Device, ModelSource, ObjectDetector, Weights};
use vigil_video::FileSource;

const VIDEO_PATH: &str = "video.mp4";
const MODELS_DIR: &str = "models";
const WEIGHTS: Weights = Weights::Nano;
const WINDOW_TITLE: &str = "vigil - ESC to exit";
const CONF_THRESHOLD: f32 = 0.25;
const NMS_THRESHOLD: f32 = 0.45;
const TARGET_FPS: usize = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    vigil_base::init_stdout_logger();

    log::info!("video: {}", VIDEO_PATH);
    log::info!("weights: {}", WEIGHTS);

    // Acquire both long-lived handles before any window exists; failure
    // here is fatal and propagates out of main.
    let mut source = FileSource::open(VIDEO_PATH)?;
    let mut detector = ObjectDetector::new(
        ModelSource::File(WEIGHTS.path_in(MODELS_DIR)),
        Device::Cpu,
    )?
    .with_thresholds(CONF_THRESHOLD, NMS_THRESHOLD);
    log::info!("model loaded");

    // The window is created on the first frame, which fixes the stream
    // dimensions. Its update call pumps window events, paced by the target
    // fps, and doubles as the bounded-wait key poll.
    let mut window: Option<Window> = None;

    let shown = run_loop(
        &mut source,
        |frame| detector.detect(&frame.to_f32()),
        |mut frame, detections| {
            let (w, h) = (frame.width(), frame.height());

            draw_detections(frame.data_mut(), w, h, detections);
            let argb = rgb_to_argb(frame.data(), w, h);

            if window.is_none() {
                let mut win = Window::new(WINDOW_TITLE, w, h, WindowOptions::default())
                    .map_err(|e| LoopError::Display(e.to_string()))?;
                win.set_target_fps(TARGET_FPS);
                log::info!("window opened: {}x{}", w, h);
                window = Some(win);
            }
            let Some(win) = window.as_mut() else {
                return Err(LoopError::Display("window not initialized".to_string()));
            };

            win.update_with_buffer(&argb, w, h)
                .map_err(|e| LoopError::Display(e.to_string()))?;

            // Poll after presenting, so Escape during cycle k still shows k
            // frames.
            if !win.is_open() || win.is_key_down(Key::Escape) {
                Ok(LoopControl::Stop)
            } else {
                Ok(LoopControl::Continue)
            }
        },
    )?;

    log::info!("displayed {} frames, exiting", shown);
    Ok(())
}
