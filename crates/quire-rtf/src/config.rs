use crate::error::RenderError;
use quire_model::{Resolution, NORMAL_STYLE};
use serde::{Deserialize, Serialize};

/// Settings shared by every renderer of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterConfig {
    /// Resolution policy translators start with.
    pub resolution: Resolution,
    /// Style whose paragraph format closes a document that does not end in a paragraph.
    pub normal_style: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::Effective,
            normal_style: NORMAL_STYLE.to_string(),
        }
    }
}

impl WriterConfig {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }
}
