//! Turns resolved attribute values into control words.
//!
//! Element renderers name an attribute and the control word it maps to; the
//! translator resolves the value, converts it into the RTF representation for
//! its kind (scaled integer, color index, enum token, ...) and emits the
//! command. Commands reach the sink in exactly the order calls are made.

use crate::collab::ColorIndexResolver;
use crate::control_word::ControlWord;
use crate::enum_table;
use crate::error::RenderError;
use crate::sink::ControlWordSink;
use quire_model::{resolve, AttributeSource, AttributeValue, Resolution};
use quire_types::{Length, Scale};

pub struct Translator<'a> {
    source: &'a dyn AttributeSource,
    sink: &'a mut dyn ControlWordSink,
    colors: &'a dyn ColorIndexResolver,
    resolution: Resolution,
}

impl<'a> Translator<'a> {
    pub fn new(
        source: &'a dyn AttributeSource,
        sink: &'a mut dyn ControlWordSink,
        colors: &'a dyn ColorIndexResolver,
    ) -> Self {
        Self {
            source,
            sink,
            colors,
            resolution: Resolution::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    /// A translator over another source that writes to the same sink.
    pub fn with_source<'b>(&'b mut self, source: &'b dyn AttributeSource) -> Translator<'b> {
        Translator {
            source,
            sink: &mut *self.sink,
            colors: self.colors,
            resolution: self.resolution,
        }
    }

    pub fn resolve(&self, attribute: &str) -> AttributeValue {
        resolve(self.source, attribute, self.resolution)
    }

    /// Emits `ctrl` for the value of `attribute`.
    ///
    /// An absent attribute emits `ctrl` with `default` as a literal argument, or
    /// nothing when there is no default. A `false` boolean emits nothing; use
    /// [`Translator::translate_bool`] when the format needs an explicit off switch.
    pub fn translate(
        &mut self,
        attribute: &str,
        ctrl: &str,
        scale: Scale,
        default: Option<&str>,
        emphasize: bool,
    ) -> Result<(), RenderError> {
        let word = match self.resolve(attribute) {
            AttributeValue::Absent => match default {
                Some(literal) => ControlWord::with_arg(ctrl, literal, emphasize),
                None => return Ok(()),
            },
            AttributeValue::Length(length) => {
                ControlWord::with_arg(ctrl, i64::from(length.to_scale(scale)), emphasize)
            }
            AttributeValue::Boolean(true) => ControlWord {
                name: ctrl.to_string(),
                arg: None,
                emphasize,
            },
            AttributeValue::Boolean(false) => return Ok(()),
            AttributeValue::Color(color) => {
                ControlWord::with_arg(ctrl, self.colors.color_index(&color), emphasize)
            }
            AttributeValue::Enum(value) => {
                ControlWord::with_arg(ctrl, enum_table::lookup(value), emphasize)
            }
            AttributeValue::Integer(n) => ControlWord::with_arg(ctrl, n, emphasize),
        };
        self.emit(attribute, word)
    }

    /// Like [`Translator::translate`] in twips, falling back to `default` converted to twips.
    pub fn translate_with_length_default(
        &mut self,
        attribute: &str,
        ctrl: &str,
        default: Length,
    ) -> Result<(), RenderError> {
        let literal = default.to_scale(Scale::Twips).to_string();
        self.translate(attribute, ctrl, Scale::Twips, Some(&literal), false)
    }

    /// Twips, no default, no emphasis.
    pub fn translate_twips(&mut self, attribute: &str, ctrl: &str) -> Result<(), RenderError> {
        self.translate(attribute, ctrl, Scale::Twips, None, false)
    }

    /// Emits `true_token` or `false_token` for a boolean attribute.
    ///
    /// Absent attributes emit nothing, as does `false` without a `false_token`.
    ///
    /// # Panics
    ///
    /// Panics if the attribute resolves to a non-boolean value.
    pub fn translate_bool(
        &mut self,
        attribute: &str,
        true_token: &str,
        false_token: Option<&str>,
        emphasize: bool,
    ) -> Result<(), RenderError> {
        let token = match self.resolve(attribute) {
            AttributeValue::Boolean(true) => true_token,
            AttributeValue::Boolean(false) => match false_token {
                Some(token) => token,
                None => return Ok(()),
            },
            AttributeValue::Absent => return Ok(()),
            other => panic!(
                "'{}' resolved to {} where a boolean is required",
                attribute,
                other.kind_name()
            ),
        };
        let word = ControlWord {
            name: token.to_string(),
            arg: None,
            emphasize,
        };
        self.emit(attribute, word)
    }

    /// Writes a literal control word through the sink.
    pub fn write(&mut self, word: ControlWord) -> Result<(), RenderError> {
        log::trace!("emit {}", word);
        self.sink.write_control(word)
    }

    fn emit(&mut self, attribute: &str, word: ControlWord) -> Result<(), RenderError> {
        log::trace!("{} -> {}", attribute, word);
        self.sink.write_control(word)
    }
}
