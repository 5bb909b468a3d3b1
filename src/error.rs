use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("pixel ({x}, {y}) is outside of the {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("pixel buffer has the wrong size (expected {expected} bytes, found {found})")]
    BufferSize { expected: usize, found: usize },

    #[error("resampler produced {found:?}, expected {expected:?}")]
    ResampleSize {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("brightness factor must lie in (0, 1), found {0}")]
    InvalidFactor(f64),

    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}
