//! Domain enumerations carried by document-model attributes.
//!
//! Each family lists every value the model can hold, including the few that
//! RTF expresses by leaving a control word out (see
//! [`EnumValue::is_rendered_by_omission`]).
use serde::{Deserialize, Serialize};

macro_rules! domain_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value of this family, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }
    };
}

domain_enum!(
    /// Horizontal paragraph alignment.
    Alignment { Left, Center, Right, Justify }
);
domain_enum!(LineSpacingRule { Single, OnePtFive, Double, AtLeast, Exactly, Multiple });
domain_enum!(
    /// Outline level of a paragraph; `BodyText` means "not part of the outline".
    OutlineLevel {
        BodyText, Level1, Level2, Level3, Level4, Level5, Level6, Level7, Level8, Level9,
    }
);
domain_enum!(Underline { None, Single, Words, Dotted, Dash, DotDash, DotDotDash });
domain_enum!(BorderStyle { None, Single, Dot, DashSmallGap, DashLargeGap, DashDot, DashDotDot });
domain_enum!(TabLeader { Spaces, Dots, Dashes, Lines, Heavy, MiddleDot });
domain_enum!(TabAlignment { Left, Center, Right, Decimal });
domain_enum!(FootnoteNumberStyle {
    Arabic, LowercaseLetter, UppercaseLetter, LowercaseRoman, UppercaseRoman,
});
domain_enum!(FootnoteNumberingRule { RestartContinuous, RestartSection, RestartPage });
domain_enum!(FootnoteLocation { BottomOfPage, BeneathText });
domain_enum!(SectionBreakType { BreakNextPage, BreakEvenPage, BreakOddPage });
domain_enum!(ListType {
    BulletList1, BulletList2, BulletList3, NumberList1, NumberList2, NumberList3,
});
domain_enum!(RowAlignment { Left, Center, Right });
domain_enum!(VerticalAlignment { Top, Center, Bottom });
domain_enum!(
    /// What a shape's horizontal position is measured from.
    RelativeHorizontal { Character, Column, Margin, Page }
);
domain_enum!(
    /// What a shape's vertical position is measured from.
    RelativeVertical { Line, Margin, Page, Paragraph }
);
domain_enum!(WrapStyle { TopBottom, None, Through });
domain_enum!(LineStyle { Single });
domain_enum!(DashStyle { Solid, Dash, DashDot, DashDotDot, SquareDot });
domain_enum!(TextOrientation {
    Horizontal, HorizontalRotatedFarEast, Upward, Vertical, VerticalFarEast, Downward,
});

macro_rules! enum_value {
    ($($variant:ident($family:ident)),+ $(,)?) => {
        /// A value from any of the domain enumeration families.
        ///
        /// Serialized externally tagged by family, e.g. `{"alignment": "center"}`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum EnumValue {
            $($variant($family)),+
        }

        impl EnumValue {
            /// Every value of every family.
            pub fn all() -> impl Iterator<Item = EnumValue> {
                std::iter::empty()
                    $(.chain($family::ALL.iter().copied().map(EnumValue::$variant)))+
            }

            /// The family name, used in diagnostics.
            pub fn family(&self) -> &'static str {
                match self {
                    $(EnumValue::$variant(_) => stringify!($family)),+
                }
            }
        }

        $(
            impl From<$family> for EnumValue {
                fn from(value: $family) -> Self {
                    EnumValue::$variant(value)
                }
            }
        )+
    };
}

enum_value!(
    Alignment(Alignment),
    LineSpacingRule(LineSpacingRule),
    OutlineLevel(OutlineLevel),
    Underline(Underline),
    BorderStyle(BorderStyle),
    TabLeader(TabLeader),
    TabAlignment(TabAlignment),
    FootnoteNumberStyle(FootnoteNumberStyle),
    FootnoteNumberingRule(FootnoteNumberingRule),
    FootnoteLocation(FootnoteLocation),
    SectionBreakType(SectionBreakType),
    ListType(ListType),
    RowAlignment(RowAlignment),
    VerticalAlignment(VerticalAlignment),
    RelativeHorizontal(RelativeHorizontal),
    RelativeVertical(RelativeVertical),
    WrapStyle(WrapStyle),
    LineStyle(LineStyle),
    DashStyle(DashStyle),
    TextOrientation(TextOrientation),
);

impl EnumValue {
    /// Values that renderers express by emitting no control word at all.
    ///
    /// These never reach the translation table.
    pub fn is_rendered_by_omission(&self) -> bool {
        matches!(
            self,
            EnumValue::OutlineLevel(OutlineLevel::BodyText)
                | EnumValue::BorderStyle(BorderStyle::None)
                | EnumValue::TabLeader(TabLeader::Spaces)
        )
    }
}
