//! quire translates attribute-bearing document models into RTF control words.
//!
//! The work is split across three crates, re-exported here:
//! - `quire_types`: lengths and unit scales, colors, domain enumerations
//! - `quire_model`: document elements, styles and attribute resolution
//! - `quire_rtf`: the translator, enum token table, structural closer and sinks
//!
//! [`Session`] wires the collaborators of one loaded document together.

pub mod error;
pub mod session;

pub use error::QuireError;
pub use session::{Session, SessionBuilder};

pub use quire_model as model;
pub use quire_rtf as rtf;
pub use quire_types as types;
