use std::fmt;
use std::path::{Path, PathBuf};

/// The fixed family of interchangeable pretrained weight sets, from the
/// smallest/fastest to the largest/most accurate variant. Selection is an
/// edit-time constant in the viewer, not a runtime parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weights {
    Nano,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl Weights {
    /// File name of the exported ONNX weight set.
    pub fn filename(&self) -> &'static str {
        match self {
            Weights::Nano => "yolov8n.onnx",
            Weights::Small => "yolov8s.onnx",
            Weights::Medium => "yolov8m.onnx",
            Weights::Large => "yolov8l.onnx",
            Weights::Xlarge => "yolov8x.onnx",
        }
    }

    /// Resolve the weight file inside a models directory.
    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.filename())
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weights::Nano => "yolov8n",
            Weights::Small => "yolov8s",
            Weights::Medium => "yolov8m",
            Weights::Large => "yolov8l",
            Weights::Xlarge => "yolov8x",
        };
        write!(f, "{name}")
    }
}
