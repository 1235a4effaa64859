// src/error.rs
use quire_model::ModelError;
use quire_rtf::RenderError;
use thiserror::Error;

/// Errors from loading a document or writing its control words.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Document model error: {0}")]
    Model(#[from] ModelError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A document is required before building a session")]
    MissingDocument,
}
