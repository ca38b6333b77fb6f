use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A rectangle or size was negative or not finite
    #[error("invalid {what}: {width}x{height}")]
    InvalidGeometry {
        what: &'static str,
        width: f32,
        height: f32,
    },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
