pub mod detector;
pub mod device;
pub mod error;
pub mod labels;
pub mod modelsource;
pub mod postprocess;
pub mod preprocess;
pub mod session;
pub mod types;
pub mod weights;

pub use detector::ObjectDetector;
pub use device::Device;
pub use error::InferError;
pub use labels::{class_name, COCO_CLASS_COUNT, COCO_CLASS_NAMES};
pub use modelsource::ModelSource;
pub use postprocess::{iou, postprocess};
pub use preprocess::{preprocess, INPUT_SIZE};
pub use session::OnnxSession;
pub use types::{Detection, LetterboxInfo};
pub use weights::Weights;
