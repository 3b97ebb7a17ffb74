use crate::postprocess::postprocess;
use crate::preprocess::preprocess;
use crate::session::OnnxSession;
use crate::{Detection, Device, InferError, ModelSource};
use vigil_base::Tensor;

/// YOLO object detection pipeline.
///
/// Integrates preprocessing, ONNX inference, and post-processing into a
/// single `detect()` call. Handles letterbox resize, model inference, and
/// coordinate rescaling automatically.
pub struct ObjectDetector {
    session: OnnxSession,
    conf_threshold: f32,
    nms_threshold: f32,
}

impl ObjectDetector {
    /// Create a new object detector.
    ///
    /// # Arguments
    /// * `model` - Model source (file path or in-memory bytes)
    /// * `device` - Device to run inference on
    ///
    /// # Returns
    /// Detector with default thresholds (conf=0.25, nms=0.45)
    pub fn new(model: ModelSource, device: Device) -> Result<Self, InferError> {
        let session = OnnxSession::load(model, &device)?;

        Ok(Self {
            session,
            conf_threshold: 0.25,
            nms_threshold: 0.45,
        })
    }

    /// Set confidence and NMS thresholds (builder pattern).
    pub fn with_thresholds(mut self, conf: f32, nms: f32) -> Self {
        self.conf_threshold = conf;
        self.nms_threshold = nms;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn nms_threshold(&self) -> f32 {
        self.nms_threshold
    }

    /// Run object detection on one frame.
    ///
    /// # Arguments
    /// * `image` - Input image as `Tensor<f32>` with shape `[H, W, 3]` and
    ///   values in 0-255
    ///
    /// # Returns
    /// Detections in frame coordinates, sorted by confidence descending.
    pub fn detect(&mut self, image: &Tensor<f32>) -> Result<Vec<Detection>, InferError> {
        if image.shape.len() != 3 || image.shape[2] != 3 {
            return Err(InferError::Shape {
                expected: "[H, W, 3]".to_string(),
                got: format!("{:?}", image.shape),
            });
        }

        let (input, letterbox) = preprocess(image)?;
        let output = self.session.run(input)?;
        postprocess(&output, &letterbox, self.conf_threshold, self.nms_threshold)
    }
}
