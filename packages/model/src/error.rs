use thiserror::Error;

/// Errors raised at the persistence edge, while turning stored note data into
/// typed components
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid component data: {0}")]
    InvalidShape(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
