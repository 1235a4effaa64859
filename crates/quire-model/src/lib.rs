//! Document model consumed by the RTF writer.
//!
//! Elements carry string-keyed attributes, either set directly or inherited
//! through their style's `based_on` chain. Resolution always produces the
//! closed [`AttributeValue`] variant so everything downstream is statically
//! typed.

pub mod attribute;
pub mod document;
pub mod element;
pub mod error;
pub mod kind;
pub mod resolve;
pub mod style;

pub use attribute::{AttributeMap, AttributeValue};
pub use document::Document;
pub use element::DocumentElement;
pub use error::ModelError;
pub use kind::ElementKind;
pub use resolve::{resolve, AttributeSource, Resolution};
pub use style::{Style, Stylesheet, NORMAL_STYLE};
