use vigil_video::{Frame, VideoError};

#[test]
fn test_frame_new_valid() {
    let frame = Frame::new(3, 2, vec![0u8; 3 * 2 * 3]).unwrap();
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.data().len(), 18);
}

#[test]
fn test_frame_new_rejects_short_buffer() {
    let result = Frame::new(640, 480, vec![0u8; 100]);
    assert!(matches!(result, Err(VideoError::Frame(_))));
}

#[test]
fn test_frame_new_rejects_long_buffer() {
    let result = Frame::new(2, 2, vec![0u8; 2 * 2 * 3 + 1]);
    assert!(matches!(result, Err(VideoError::Frame(_))));
}

#[test]
fn test_frame_to_f32_preserves_shape_and_values() {
    let frame = Frame::new(3, 2, vec![
        255, 0, 0,    128, 128, 128,  0, 255, 0,
        100, 50, 25,  200, 150, 100,  50, 100, 150,
    ])
    .unwrap();

    let tensor = frame.to_f32();

    assert_eq!(tensor.shape, vec![2, 3, 3]);
    assert_eq!(tensor.data.len(), 18);

    // First pixel (255, 0, 0) → (255.0, 0.0, 0.0)
    assert_eq!(tensor.data[0], 255.0);
    assert_eq!(tensor.data[1], 0.0);
    assert_eq!(tensor.data[2], 0.0);

    // A middle pixel (200, 150, 100)
    assert_eq!(tensor.data[12], 200.0);
    assert_eq!(tensor.data[13], 150.0);
    assert_eq!(tensor.data[14], 100.0);

    // Values stay in [0, 255]; normalization is the detector's job
    for &val in &tensor.data {
        assert!((0.0..=255.0).contains(&val), "value {} out of range", val);
    }
}

#[test]
fn test_frame_data_mut_writes_pixels() {
    let mut frame = Frame::new(2, 2, vec![0u8; 12]).unwrap();

    frame.data_mut()[0] = 255;
    frame.data_mut()[11] = 7;

    assert_eq!(frame.data()[0], 255);
    assert_eq!(frame.data()[11], 7);
}
