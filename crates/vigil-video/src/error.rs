use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Open(String),
    Stream(String),
    Frame(vigil_base::TensorError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Open(msg) => write!(f, "open error: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Frame(err) => write!(f, "frame error: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Open(err.to_string())
    }
}

impl From<vigil_base::TensorError> for VideoError {
    fn from(err: vigil_base::TensorError) -> Self {
        VideoError::Frame(err)
    }
}
