use thiserror::Error;

/// Errors surfaced by cave generation and its I/O helpers.
#[derive(Debug, Error)]
pub enum CaveError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parameter file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl CaveError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CaveError::InvalidParameter { name, reason: reason.into() }
    }
}
