use thiserror::Error;

/// Errors that can occur while exporting or printing the surface.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
