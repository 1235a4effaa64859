//! Guarantees a rendered element sequence ends on a paragraph boundary.
//!
//! RTF readers expect the body of a section, cell or footnote to close with a
//! paragraph; a sequence ending in a table or shape is followed by an empty
//! paragraph in the normal style.

use crate::collab::StyleIndexResolver;
use crate::config::WriterConfig;
use crate::control_word::ControlWord;
use crate::error::RenderError;
use crate::paragraph_format::ParagraphFormatRenderer;
use crate::translator::Translator;
use quire_model::{DocumentElement, NORMAL_STYLE};

pub struct StructuralCloser<'a> {
    styles: &'a dyn StyleIndexResolver,
    paragraph_format: &'a dyn ParagraphFormatRenderer,
    normal_style: &'a str,
}

impl<'a> StructuralCloser<'a> {
    pub fn new(
        styles: &'a dyn StyleIndexResolver,
        paragraph_format: &'a dyn ParagraphFormatRenderer,
    ) -> Self {
        Self {
            styles,
            paragraph_format,
            normal_style: NORMAL_STYLE,
        }
    }

    pub fn with_config(mut self, config: &'a WriterConfig) -> Self {
        self.normal_style = &config.normal_style;
        self
    }

    /// Emits `\pard\s<n>`, the normal style's paragraph format and `\par`
    /// unless `elements` already ends in a paragraph.
    pub fn ensure_trailing_paragraph(
        &self,
        elements: &[DocumentElement],
        translator: &mut Translator<'_>,
    ) -> Result<(), RenderError> {
        if elements.last().is_some_and(|last| last.kind.is_paragraph()) {
            return Ok(());
        }

        let missing = || RenderError::MissingStyle(self.normal_style.to_string());
        let index = self.styles.style_index(self.normal_style).ok_or_else(missing)?;
        let style = self.styles.style(self.normal_style).ok_or_else(missing)?;
        log::debug!(
            "Closing {} elements with a '{}' paragraph",
            elements.len(),
            self.normal_style
        );

        translator.write(ControlWord::bare("pard"))?;
        translator.write(ControlWord::with_arg("s", index as i64, false))?;
        self.paragraph_format.render(&mut translator.with_source(style))?;
        translator.write(ControlWord::bare("par"))
    }
}
