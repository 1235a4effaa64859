pub mod fixtures;

use quire::{QuireError, Session};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Build a session from a JSON document with the default configuration
pub fn session_from_json(document: &Value) -> Result<Session, QuireError> {
    let source = serde_json::to_string(document).map_err(quire::model::ModelError::from)?;
    Session::builder().with_document_source(&source)?.build()
}

/// Build a session from a JSON document and a JSON writer configuration
pub fn session_with_config(document: &Value, config: &Value) -> Result<Session, QuireError> {
    let source = serde_json::to_string(document).map_err(quire::model::ModelError::from)?;
    let config = serde_json::to_string(config).map_err(quire::model::ModelError::from)?;
    Session::builder()
        .with_document_source(&source)?
        .with_config_source(&config)?
        .build()
}
