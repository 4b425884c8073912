//! Layout document error types.
//!
//! The geometry engines are total; errors only arise when loading or
//! validating a declarative layout document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-finite value in {field}: {value}")]
    NonFinite { field: String, value: f32 },

    #[error("invalid document: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
