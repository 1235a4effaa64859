use serde::{Deserialize, Serialize};

/// The runtime kind of a document element.
///
/// Kinds form a small derivation hierarchy rooted at `DocumentObject`;
/// drawing objects (images, text frames, charts, barcodes) all derive from
/// `Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    DocumentObject,
    Document,
    Section,
    Paragraph,
    Text,
    FormattedText,
    Hyperlink,
    Footnote,
    PageBreak,
    Table,
    Row,
    Column,
    Cell,
    Shape,
    Image,
    TextFrame,
    Chart,
    Barcode,
}

impl ElementKind {
    /// The kind this kind directly derives from; `None` only for the root.
    pub fn parent(&self) -> Option<ElementKind> {
        match self {
            ElementKind::DocumentObject => None,
            ElementKind::Image
            | ElementKind::TextFrame
            | ElementKind::Chart
            | ElementKind::Barcode => Some(ElementKind::Shape),
            _ => Some(ElementKind::DocumentObject),
        }
    }

    /// Walks from this kind up to the root, starting with `self`.
    pub fn ancestry(&self) -> impl Iterator<Item = ElementKind> {
        std::iter::successors(Some(*self), ElementKind::parent)
    }

    /// True if `self` is `target` or derives from it.
    pub fn is_assignable_to(&self, target: ElementKind) -> bool {
        self.ancestry().any(|kind| kind == target)
    }

    pub fn is_paragraph(&self) -> bool {
        self.is_assignable_to(ElementKind::Paragraph)
    }
}
