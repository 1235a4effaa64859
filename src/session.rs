// src/session.rs
use crate::error::QuireError;
use quire_model::{AttributeSource, Document, DocumentElement};
use quire_rtf::{
    ColorTable, ControlWordSink, StandardParagraphFormat, StructuralCloser, Translator,
    WriterConfig,
};
use std::fs;
use std::io;
use std::path::Path;

/// One loaded document together with the collaborators its renderers share.
pub struct Session {
    document: Document,
    colors: ColorTable,
    config: WriterConfig,
    paragraph_format: StandardParagraphFormat,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// A translator over `source` using this session's colors and resolution policy.
    pub fn translator<'a>(
        &'a self,
        source: &'a dyn AttributeSource,
        sink: &'a mut dyn ControlWordSink,
    ) -> Translator<'a> {
        Translator::new(source, sink, &self.colors).with_resolution(self.config.resolution)
    }

    pub fn closer(&self) -> StructuralCloser<'_> {
        StructuralCloser::new(&self.document.stylesheet, &self.paragraph_format)
            .with_config(&self.config)
    }

    /// Closes `container`'s children with a normal paragraph if they need one.
    pub fn ensure_trailing_paragraph(
        &self,
        container: &DocumentElement,
        sink: &mut dyn ControlWordSink,
    ) -> Result<(), QuireError> {
        let mut translator = self.translator(container, sink);
        self.closer()
            .ensure_trailing_paragraph(container.children(), &mut translator)?;
        Ok(())
    }
}

/// A builder for creating a [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    document: Option<Document>,
    config: WriterConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Loads the document from its JSON description.
    pub fn with_document_source(self, json: &str) -> Result<Self, QuireError> {
        Ok(self.with_document(Document::from_json(json)?))
    }

    pub fn with_document_file<P: AsRef<Path>>(self, path: P) -> Result<Self, QuireError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            QuireError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_document_source(&source)
    }

    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_source(self, json: &str) -> Result<Self, QuireError> {
        Ok(self.with_config(WriterConfig::from_json(json)?))
    }

    pub fn build(self) -> Result<Session, QuireError> {
        let document = self.document.ok_or(QuireError::MissingDocument)?;
        let colors = ColorTable::from_document(&document);
        log::debug!(
            "Session ready: {} styles, {} colors, {:?} resolution",
            document.stylesheet.len(),
            colors.len(),
            self.config.resolution
        );
        Ok(Session {
            document,
            colors,
            config: self.config,
            paragraph_format: StandardParagraphFormat,
        })
    }
}
