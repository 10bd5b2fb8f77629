//! Error types for skycycle

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Texture encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
