use crate::types::LetterboxInfo;
use crate::InferError;
use vigil_base::Tensor;

/// Side length of the square model input.
pub const INPUT_SIZE: usize = 640;

const PAD_VALUE: f32 = 114.0 / 255.0; // Gray padding in normalized range

/// Preprocess an RGB frame for YOLO inference.
///
/// Takes an image tensor in HWC format (`[height, width, 3]`, values in
/// 0-255) and produces the NCHW model input (`[1, 3, 640, 640]`, values in
/// 0.0-1.0): letterbox resize preserving aspect ratio, gray padding,
/// channel-first transpose, and rescale — in a single pass that samples the
/// source with nearest-neighbor and writes straight into the padded NCHW
/// buffer.
///
/// Returns the input tensor and the letterbox parameters needed to map
/// detections back to frame coordinates.
pub fn preprocess(image: &Tensor<f32>) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    if image.shape.len() != 3 || image.shape[2] != 3 {
        return Err(InferError::Shape {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", image.shape),
        });
    }
    let (h, w) = (image.shape[0], image.shape[1]);
    if h == 0 || w == 0 {
        return Err(InferError::Shape {
            expected: "non-zero dimensions".to_string(),
            got: format!("{}x{}", h, w),
        });
    }

    let scale = (INPUT_SIZE as f32 / w as f32).min(INPUT_SIZE as f32 / h as f32);
    let new_w = (w as f32 * scale) as usize;
    let new_h = (h as f32 * scale) as usize;
    let pad_x = ((INPUT_SIZE - new_w) / 2) as f32;
    let pad_y = ((INPUT_SIZE - new_h) / 2) as f32;

    let pad_x_int = pad_x as usize;
    let pad_y_int = pad_y as usize;
    let plane = INPUT_SIZE * INPUT_SIZE;

    let mut nchw = vec![PAD_VALUE; 3 * plane];

    for out_y in 0..new_h {
        let src_y = ((out_y as f32 / scale) as usize).min(h - 1);
        let dst_y = out_y + pad_y_int;

        for out_x in 0..new_w {
            let src_x = ((out_x as f32 / scale) as usize).min(w - 1);
            let dst_x = out_x + pad_x_int;

            let src_idx = (src_y * w + src_x) * 3;
            let dst_idx = dst_y * INPUT_SIZE + dst_x;

            for ch in 0..3 {
                nchw[ch * plane + dst_idx] = image.data[src_idx + ch] / 255.0;
            }
        }
    }

    let input = Tensor::new(vec![1, 3, INPUT_SIZE, INPUT_SIZE], nchw)
        .map_err(|e| InferError::Backend(format!("failed to create tensor: {}", e)))?;

    let letterbox = LetterboxInfo {
        scale,
        pad_x,
        pad_y,
    };

    Ok((input, letterbox))
}
