use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    #[error("bucket size must be a positive, finite pixel count (got {0})")]
    InvalidBucketSize(f32),
    #[error("spring {field} must be positive and finite (got {value})")]
    InvalidSpring { field: &'static str, value: f32 },
    #[error("camera zoom must be positive and finite (got {0})")]
    InvalidZoom(f32),
    #[error("share fragment is missing the `wheel=` key: {0:?}")]
    MissingShareKey(String),
    #[error("share fragment index is not an integer: {0:?}")]
    InvalidShareIndex(String),
}
