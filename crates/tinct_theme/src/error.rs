use thiserror::Error;

use crate::tokens::ColorName;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// Color name is not part of the palette, or missing from a theme
    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("accent color `{0}` is not defined in the theme palette")]
    MissingAccent(ColorName),

    #[error("invalid color for `{name}` step {step}: {source}")]
    InvalidColor {
        name: String,
        step: usize,
        #[source]
        source: tinct_core::ColorParseError,
    },

    #[error("scale `{name}` has {len} steps, expected 12")]
    InvalidStep { name: String, len: usize },

    #[error(transparent)]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
