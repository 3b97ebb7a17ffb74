use vigil_base::Rect;
use vigil_infer::Detection;

/// Box outline colors cycled by class id.
const PALETTE: [[u8; 3]; 6] = [
    [0, 255, 255],   // cyan
    [0, 255, 0],     // green
    [255, 255, 0],   // yellow
    [255, 0, 255],   // magenta
    [255, 128, 0],   // orange
    [255, 255, 255], // white
];

const BOX_THICKNESS: usize = 2;

pub fn class_color(class_id: usize) -> [u8; 3] {
    PALETTE[class_id % PALETTE.len()]
}

/// Burn detection bounding boxes into an RGB frame buffer.
///
/// An empty detection list writes nothing, so the annotated frame is the
/// input frame.
pub fn draw_detections(buf: &mut [u8], width: usize, height: usize, detections: &[Detection]) {
    for detection in detections {
        draw_rect_outline(
            buf,
            width,
            height,
            &detection.bbox,
            BOX_THICKNESS,
            class_color(detection.class_id),
        );
    }
}

/// Draw an axis-aligned rectangle outline, clipped to the frame bounds.
pub fn draw_rect_outline(
    buf: &mut [u8],
    width: usize,
    height: usize,
    rect: &Rect<f32>,
    thickness: usize,
    color: [u8; 3],
) {
    let x0 = rect.min().x.floor() as i64;
    let y0 = rect.min().y.floor() as i64;
    let x1 = rect.max().x.ceil() as i64;
    let y1 = rect.max().y.ceil() as i64;

    for t in 0..thickness as i64 {
        // Top and bottom edges
        hline(buf, width, height, y0 + t, x0, x1, color);
        hline(buf, width, height, y1 - 1 - t, x0, x1, color);
        // Left and right edges
        vline(buf, width, height, x0 + t, y0, y1, color);
        vline(buf, width, height, x1 - 1 - t, y0, y1, color);
    }
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    let mut argb = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 3;
            let r = buf[idx] as u32;
            let g = buf[idx + 1] as u32;
            let b = buf[idx + 2] as u32;

            // Pack as 0x00RRGGBB
            argb.push((r << 16) | (g << 8) | b);
        }
    }

    argb
}

// Helper functions

fn hline(buf: &mut [u8], width: usize, height: usize, y: i64, x0: i64, x1: i64, color: [u8; 3]) {
    if y < 0 || y >= height as i64 {
        return;
    }
    let start = x0.max(0);
    let end = x1.min(width as i64);
    for x in start..end {
        set_pixel(buf, width, x as usize, y as usize, color);
    }
}

fn vline(buf: &mut [u8], width: usize, height: usize, x: i64, y0: i64, y1: i64, color: [u8; 3]) {
    if x < 0 || x >= width as i64 {
        return;
    }
    let start = y0.max(0);
    let end = y1.min(height as i64);
    for y in start..end {
        set_pixel(buf, width, x as usize, y as usize, color);
    }
}

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let idx = (y * width + x) * 3;
    buf[idx] = color[0];
    buf[idx + 1] = color[1];
    buf[idx + 2] = color[2];
}
