use crate::labels::COCO_CLASS_COUNT;
use crate::types::{Detection, LetterboxInfo};
use crate::InferError;
use vigil_base::{Rect, Tensor, Vec2};

/// Compute Intersection over Union (IoU) between two bounding boxes.
///
/// Returns 0.0 for non-overlapping boxes or zero-area boxes (no division by zero).
pub fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    if a.size.x <= 0.0 || a.size.y <= 0.0 || b.size.x <= 0.0 || b.size.y <= 0.0 {
        return 0.0;
    }

    let intersection_area = match a.intersection(*b) {
        Some(rect) => rect.area(),
        None => 0.0,
    };

    let union_area = a.area() + b.area() - intersection_area;
    if union_area <= 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Decode the raw YOLO detect head output.
///
/// The output tensor has shape `[1, 84, N]`: 4 box coordinates (center x,
/// center y, width, height in model space) followed by 80 per-class scores
/// for each of the N anchors. Per anchor the class is the score argmax;
/// anchors below the confidence threshold are dropped, boxes are rescaled
/// through the letterbox inverse into frame coordinates, and greedy
/// class-aware NMS removes same-class overlaps.
///
/// # Returns
/// Detections sorted by confidence descending, or `InferError::Shape` if
/// the output tensor has an unexpected shape.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<Detection>, InferError> {
    let rows = 4 + COCO_CLASS_COUNT;
    if output.shape.len() != 3 || output.shape[0] != 1 || output.shape[1] != rows {
        return Err(InferError::Shape {
            expected: format!("[1, {rows}, N]"),
            got: format!("{:?}", output.shape),
        });
    }

    let n = output.shape[2];
    if n == 0 {
        return Ok(Vec::new());
    }

    // In the flat data, element at [0, row, col] is at index: row * N + col
    let mut candidates = Vec::new();

    for i in 0..n {
        // Class = argmax over the score block
        let mut class_id = 0;
        let mut confidence = 0.0f32;
        for c in 0..COCO_CLASS_COUNT {
            let score = output.data[(4 + c) * n + i];
            if score > confidence {
                confidence = score;
                class_id = c;
            }
        }

        if confidence < conf_threshold {
            continue;
        }

        let cx = output.data[i];
        let cy = output.data[n + i];
        let w = output.data[2 * n + i];
        let h = output.data[3 * n + i];

        // Rescale from model space back to frame coordinates
        let rescaled_cx = (cx - letterbox.pad_x) / letterbox.scale;
        let rescaled_cy = (cy - letterbox.pad_y) / letterbox.scale;
        let rescaled_w = w / letterbox.scale;
        let rescaled_h = h / letterbox.scale;

        // Convert from center to top-left origin
        let bbox = Rect::new(
            Vec2::new(
                rescaled_cx - rescaled_w / 2.0,
                rescaled_cy - rescaled_h / 2.0,
            ),
            Vec2::new(rescaled_w, rescaled_h),
        );

        candidates.push(Detection {
            bbox,
            class_id,
            confidence,
        });
    }

    // Sort by confidence descending
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Greedy class-aware NMS: only boxes of the same class suppress each
    // other; cross-class overlap is legitimate.
    let mut keep: Vec<Detection> = Vec::new();
    let mut suppressed = vec![false; candidates.len()];

    for i in 0..candidates.len() {
        if suppressed[i] {
            continue;
        }

        for j in (i + 1)..candidates.len() {
            if suppressed[j] || candidates[j].class_id != candidates[i].class_id {
                continue;
            }
            if iou(&candidates[i].bbox, &candidates[j].bbox) > iou_threshold {
                suppressed[j] = true;
            }
        }

        keep.push(candidates[i].clone());
    }

    Ok(keep)
}
