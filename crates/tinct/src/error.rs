use thiserror::Error;

#[derive(Debug, Error)]
pub enum TinctError {
    #[error(transparent)]
    Theme(#[from] tinct_theme::ThemeError),

    #[error(transparent)]
    Geometry(#[from] tinct_overlay::GeometryError),
}

pub type Result<T> = std::result::Result<T, TinctError>;
