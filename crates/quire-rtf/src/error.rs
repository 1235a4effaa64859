use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Style '{0}' is not defined in the stylesheet")]
    MissingStyle(String),
    #[error("Invalid writer configuration: {0}")]
    Config(#[from] serde_json::Error),
}
