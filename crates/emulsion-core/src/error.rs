use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmulsionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Color planes have mismatched dimensions")]
    MismatchedPlanes,

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid preset catalog: {0}")]
    CatalogInvalid(String),
}

pub type Result<T> = std::result::Result<T, EmulsionError>;
