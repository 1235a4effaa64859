use quire_model::{DocumentElement, ElementKind};

/// True if any element's kind is, or derives from, one of `kinds`.
///
/// Renderers use this to branch on the presence of a child kind, e.g. whether
/// a paragraph contains an image.
pub fn any_assignable_to<'e, I>(elements: I, kinds: &[ElementKind]) -> bool
where
    I: IntoIterator<Item = &'e DocumentElement>,
{
    elements
        .into_iter()
        .any(|element| kinds.iter().any(|&kind| element.kind.is_assignable_to(kind)))
}
