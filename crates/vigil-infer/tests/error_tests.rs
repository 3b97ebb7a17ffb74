use vigil_infer::InferError;

#[test]
fn test_model_load_display() {
    let err = InferError::ModelLoad("failed to load model from memory".to_string());
    assert_eq!(
        err.to_string(),
        "model load error: failed to load model from memory"
    );
}

#[test]
fn test_backend_display() {
    let err = InferError::Backend("inference failed".to_string());
    assert_eq!(err.to_string(), "backend error: inference failed");
}

#[test]
fn test_shape_display() {
    let err = InferError::Shape {
        expected: "[H, W, 3]".to_string(),
        got: "[640, 480]".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "shape mismatch: expected [H, W, 3], got [640, 480]"
    );
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = InferError::from(io);
    assert!(matches!(err, InferError::Io(_)));
    assert!(err.to_string().starts_with("io error:"));
}
