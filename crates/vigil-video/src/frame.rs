use crate::VideoError;
use vigil_base::Tensor;

/// One decoded video frame: RGB pixels as a `Tensor<u8>` with shape
/// `[height, width, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    tensor: Tensor<u8>,
}

impl Frame {
    /// Create a frame from a raw RGB24 buffer.
    ///
    /// # Errors
    ///
    /// Returns `VideoError::Frame` if the buffer length does not match
    /// `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, VideoError> {
        let tensor = Tensor::new(vec![height as usize, width as usize, 3], data)?;
        Ok(Self { tensor })
    }

    pub fn width(&self) -> usize {
        self.tensor.shape[1]
    }

    pub fn height(&self) -> usize {
        self.tensor.shape[0]
    }

    pub fn data(&self) -> &[u8] {
        &self.tensor.data
    }

    /// Mutable pixel access for overlay rendering.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.tensor.data
    }

    /// Convert to a `Tensor<f32>` for model input. Values stay in the
    /// 0-255 range; the detector's preprocessing handles normalization.
    pub fn to_f32(&self) -> Tensor<f32> {
        self.tensor.map(|&v| v as f32)
    }
}
