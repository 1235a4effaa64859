//! Attribute translation core of the RTF writer.
//!
//! This crate provides the pieces every element renderer shares:
//! - `Translator` for resolving attributes and emitting their control words
//! - the process-wide enumeration-to-token table
//! - `StructuralCloser`, which keeps element sequences ending on a paragraph
//! - `any_assignable_to` for branching on child element kinds
//! - sinks that record or serialize the emitted control words

pub mod closer;
pub mod collab;
pub mod config;
pub mod control_word;
pub mod enum_table;
mod error;
pub mod membership;
pub mod paragraph_format;
pub mod sink;
pub mod translator;

pub use closer::StructuralCloser;
pub use collab::{ColorIndexResolver, ColorTable, StyleIndexResolver};
pub use config::WriterConfig;
pub use control_word::{ControlArg, ControlWord};
pub use enum_table::{lookup, EnumTranslationTable, Token};
pub use error::RenderError;
pub use membership::any_assignable_to;
pub use paragraph_format::{ParagraphFormatRenderer, StandardParagraphFormat};
pub use sink::{ControlWordSink, RecordingSink, RtfTextSink};
pub use translator::Translator;
