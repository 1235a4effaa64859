use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Reference to undefined style '{0}'")]
    UnknownStyle(String),
    #[error("Style '{0}' is defined more than once")]
    DuplicateStyle(String),
    #[error("Style '{0}' is based on itself")]
    StyleCycle(String),
}
