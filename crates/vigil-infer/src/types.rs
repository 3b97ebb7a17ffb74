use vigil_base::Rect;

/// A detected object with class, confidence, and bounding box in original
/// frame coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub bbox: Rect<f32>,
    pub class_id: usize,
    /// Confidence score in [0.0, 1.0].
    pub confidence: f32,
}

impl Detection {
    /// Human-readable class name, or "unknown" for out-of-table ids.
    pub fn label(&self) -> &'static str {
        crate::labels::class_name(self.class_id).unwrap_or("unknown")
    }
}

/// Letterbox transformation parameters for coordinate rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxInfo {
    /// Scale factor applied to the image (min(640/H, 640/W)).
    pub scale: f32,
    /// Horizontal padding added (in pixels).
    pub pad_x: f32,
    /// Vertical padding added (in pixels).
    pub pad_y: f32,
}
