//! Foundation value types shared by the document model and the RTF writer.
pub mod color;
pub mod enums;
pub mod error;
pub mod units;

pub use color::Color;
pub use enums::{
    Alignment, BorderStyle, DashStyle, EnumValue, FootnoteLocation, FootnoteNumberStyle,
    FootnoteNumberingRule, LineSpacingRule, LineStyle, ListType, OutlineLevel, RelativeHorizontal,
    RelativeVertical, RowAlignment, SectionBreakType, TabAlignment, TabLeader, TextOrientation,
    Underline, VerticalAlignment, WrapStyle,
};
pub use error::ParseError;
pub use units::{to_target_unit, Length, Scale};
