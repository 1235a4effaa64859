//! The in-memory document tree the RTF writer walks.

use crate::attribute::{AttributeMap, AttributeValue};
use crate::kind::ElementKind;
use crate::resolve::AttributeSource;
use crate::style::Style;
use std::sync::Arc;

/// A node in the document hierarchy.
///
/// The writer treats elements as read-only: it resolves attributes and walks
/// children but never modifies a node.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentElement {
    pub kind: ElementKind,
    /// Attributes set on this element itself.
    pub attributes: AttributeMap,
    /// The style effective values cascade from.
    pub style: Option<Arc<Style>>,
    pub children: Vec<DocumentElement>,
}

impl DocumentElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: AttributeMap::new(),
            style: None,
            children: Vec::new(),
        }
    }

    pub fn paragraph() -> Self {
        Self::new(ElementKind::Paragraph)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_style(mut self, style: Arc<Style>) -> Self {
        self.style = Some(style);
        self
    }

    pub fn child(mut self, child: DocumentElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn children(&self) -> &[DocumentElement] {
        &self.children
    }

    /// Depth-first iterator over this element and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

impl AttributeSource for DocumentElement {
    fn direct(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    fn effective(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .get(name)
            .or_else(|| self.style.as_deref().and_then(|s| s.effective(name)))
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a DocumentElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DocumentElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
