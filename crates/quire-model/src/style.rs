//! Named styles and the stylesheet that indexes them.

use crate::attribute::{AttributeMap, AttributeValue};
use crate::resolve::AttributeSource;
use std::collections::HashMap;
use std::sync::Arc;

/// The style every document defines and that plain paragraphs fall back to.
pub const NORMAL_STYLE: &str = "Normal";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub name: String,
    pub attributes: AttributeMap,
    pub based_on: Option<Arc<Style>>,
}

impl Style {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn based_on(mut self, base: Arc<Style>) -> Self {
        self.based_on = Some(base);
        self
    }
}

impl AttributeSource for Style {
    fn direct(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    fn effective(&self, name: &str) -> Option<&AttributeValue> {
        let mut style = Some(self);
        while let Some(current) = style {
            if let Some(value) = current.attributes.get(name) {
                return Some(value);
            }
            style = current.based_on.as_deref();
        }
        None
    }
}

/// All styles of a document, in style-table order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    styles: Vec<Arc<Style>>,
    by_name: HashMap<String, usize>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a style and returns its index. A style with the same name replaces
    /// the earlier one in place and keeps its index.
    pub fn add(&mut self, style: Arc<Style>) -> usize {
        if let Some(&index) = self.by_name.get(&style.name) {
            self.styles[index] = style;
            return index;
        }
        let index = self.styles.len();
        self.by_name.insert(style.name.clone(), index);
        self.styles.push(style);
        index
    }

    /// Looks up a style by its name.
    pub fn get(&self, name: &str) -> Option<&Arc<Style>> {
        self.index_of(name).map(|i| &self.styles[i])
    }

    /// Position of the style in the style table.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Style>> {
        self.styles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{resolve, Resolution};
    use quire_types::{Alignment, Length};

    #[test]
    fn effective_walks_based_on_chain() {
        let normal = Arc::new(
            Style::new(NORMAL_STYLE)
                .with("SpaceAfter", Length::pt(6.0))
                .with("Alignment", quire_types::EnumValue::from(Alignment::Left)),
        );
        let heading = Style::new("Heading1")
            .with("Alignment", quire_types::EnumValue::from(Alignment::Center))
            .based_on(normal);

        assert_eq!(
            resolve(&heading, "SpaceAfter", Resolution::Effective),
            AttributeValue::Length(Length::pt(6.0))
        );
        assert_eq!(
            resolve(&heading, "SpaceAfter", Resolution::Direct),
            AttributeValue::Absent
        );
        assert_eq!(
            resolve(&heading, "Alignment", Resolution::Effective),
            AttributeValue::Enum(Alignment::Center.into())
        );
    }

    #[test]
    fn stylesheet_indexes_in_insertion_order() {
        let mut sheet = Stylesheet::new();
        assert_eq!(sheet.add(Arc::new(Style::new(NORMAL_STYLE))), 0);
        assert_eq!(sheet.add(Arc::new(Style::new("Heading1"))), 1);
        assert_eq!(sheet.add(Arc::new(Style::new(NORMAL_STYLE).with("Bold", true))), 0);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.index_of("Heading1"), Some(1));
        assert!(sheet.get(NORMAL_STYLE).is_some_and(|s| s.attributes.len() == 1));
        assert!(sheet.get("Missing").is_none());
    }
}
