use thiserror::Error;

/// Errors raised while parsing textual attribute values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid length: {0}")]
    InvalidLength(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
