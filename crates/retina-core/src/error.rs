use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetinaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(usize),

    #[error("Invalid Gaussian sigma: {0}")]
    InvalidSigma(f32),

    #[error("Shape mismatch: {left:?} vs {right:?} (height, width)")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Output retrieval failed: {0}")]
    Retrieval(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RetinaError>;
