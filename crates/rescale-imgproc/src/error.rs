use rescale_image::ImageError;

/// An error type for the resampling engine.
#[derive(thiserror::Error, Debug)]
pub enum ResizeError {
    /// The requested output dimensions are invalid.
    #[error("Output dimensions must be non-zero, got {0}x{1}")]
    InvalidImageSize(usize, usize),

    /// The source image is too small for the requested kernel.
    ///
    /// The bicubic kernel needs 4 support points per axis.
    #[error("Source image {0}x{1} is smaller than the 4x4 minimum required by the bicubic kernel")]
    SourceTooSmall(usize, usize),

    /// The interpolation method string is not recognized.
    #[error("Unknown interpolation method: {0} (expected nearestneighbor, bilinear or bicubic)")]
    UnknownInterpolation(String),

    /// The requested worker count is invalid.
    #[error("Worker count must be > 0, got {0}")]
    InvalidWorkerCount(usize),

    /// The local thread pool failed to build.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    /// Error when creating the output image.
    #[error("Failed to create image. {0}")]
    Image(#[from] ImageError),
}
