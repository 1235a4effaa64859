//! Lookups the translator and closer delegate to: color and style indices.

use quire_model::{AttributeValue, Document, DocumentElement, Style, Stylesheet};
use quire_types::Color;
use std::collections::HashMap;

/// Maps a color to its position in the document's color table.
pub trait ColorIndexResolver {
    fn color_index(&self, color: &Color) -> i64;
}

/// Maps style names to style-table positions and their definitions.
pub trait StyleIndexResolver {
    fn style_index(&self, name: &str) -> Option<usize>;
    fn style(&self, name: &str) -> Option<&Style>;
}

impl StyleIndexResolver for Stylesheet {
    fn style_index(&self, name: &str) -> Option<usize> {
        self.index_of(name)
    }

    fn style(&self, name: &str) -> Option<&Style> {
        self.get(name).map(|s| s.as_ref())
    }
}

/// A color table in registration order.
///
/// Index 0 is the reader's automatic color; registered colors start at 1.
#[derive(Debug, Default, Clone)]
pub struct ColorTable {
    colors: Vec<Color>,
    positions: HashMap<Color, usize>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every color attribute used by the document's styles and body.
    pub fn from_document(document: &Document) -> Self {
        let mut table = Self::new();
        for style in document.stylesheet.iter() {
            table.register_attributes(style.attributes.iter().map(|(_, v)| v));
        }
        for element in &document.body {
            table.register_tree(element);
        }
        table
    }

    /// Adds `color` if it is new and returns its index.
    pub fn register(&mut self, color: Color) -> i64 {
        let next = self.colors.len();
        let position = *self.positions.entry(color).or_insert_with(|| next);
        if position == next {
            self.colors.push(color);
        }
        position as i64 + 1
    }

    pub fn register_tree(&mut self, element: &DocumentElement) {
        for node in element.descendants() {
            self.register_attributes(node.attributes.iter().map(|(_, v)| v));
        }
    }

    fn register_attributes<'a>(&mut self, values: impl Iterator<Item = &'a AttributeValue>) {
        for value in values {
            if let AttributeValue::Color(color) = value {
                self.register(*color);
            }
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorIndexResolver for ColorTable {
    fn color_index(&self, color: &Color) -> i64 {
        match self.positions.get(color) {
            Some(&position) => position as i64 + 1,
            None => {
                log::warn!("Color {} not in color table, using automatic color", color.to_hex());
                0
            }
        }
    }
}
