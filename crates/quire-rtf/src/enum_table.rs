//! Mapping from domain enumeration values to RTF tokens.
//!
//! The table is built once per process on first use and never changes
//! afterwards. Every value a renderer can hand to the translator must have an
//! entry; a missing entry means the table and the domain model are out of sync
//! and is treated as a bug, not as a runtime condition.

use crate::control_word::ControlArg;
use once_cell::sync::Lazy;
use quire_types::enums::*;
use quire_types::EnumValue;
use std::collections::HashMap;

/// The RTF representation of an enumeration value: either text appended to the
/// control word (`\ql`, `\uldash`) or a numeric argument (`\slmult1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Text(&'static str),
    Code(i32),
}

impl From<Token> for ControlArg {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(s) => ControlArg::Text(s.to_string()),
            Token::Code(n) => ControlArg::Int(n.into()),
        }
    }
}

static TABLE: Lazy<EnumTranslationTable> = Lazy::new(EnumTranslationTable::build);

pub struct EnumTranslationTable {
    entries: HashMap<EnumValue, Token>,
}

impl EnumTranslationTable {
    /// The process-wide table.
    pub fn global() -> &'static EnumTranslationTable {
        &TABLE
    }

    pub fn get(&self, value: EnumValue) -> Option<Token> {
        self.entries.get(&value).copied()
    }

    /// Looks up `value`, panicking when it has no entry.
    pub fn lookup(&self, value: EnumValue) -> Token {
        self.get(value).unwrap_or_else(|| {
            panic!(
                "no RTF token for {}::{:?}; the translation table is out of sync with the model",
                value.family(),
                value
            )
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build() -> Self {
        use Token::{Code, Text};

        let mut table = Builder::default();

        table.add(Alignment::Left, Text("l"));
        table.add(Alignment::Right, Text("r"));
        table.add(Alignment::Center, Text("c"));
        table.add(Alignment::Justify, Text("j"));

        table.add(LineSpacingRule::AtLeast, Code(0));
        table.add(LineSpacingRule::Exactly, Code(0));
        table.add(LineSpacingRule::Double, Code(1));
        table.add(LineSpacingRule::OnePtFive, Code(1));
        table.add(LineSpacingRule::Multiple, Code(1));
        table.add(LineSpacingRule::Single, Code(1));

        // BodyText is rendered by omitting \outlinelevel.
        let levels = [
            OutlineLevel::Level1,
            OutlineLevel::Level2,
            OutlineLevel::Level3,
            OutlineLevel::Level4,
            OutlineLevel::Level5,
            OutlineLevel::Level6,
            OutlineLevel::Level7,
            OutlineLevel::Level8,
            OutlineLevel::Level9,
        ];
        for (code, level) in (0..).zip(levels) {
            table.add(level, Code(code));
        }

        table.add(Underline::Dash, Text("dash"));
        table.add(Underline::DotDash, Text("dashd"));
        table.add(Underline::DotDotDash, Text("dashdd"));
        table.add(Underline::Dotted, Text("d"));
        table.add(Underline::None, Text("none"));
        table.add(Underline::Single, Text(""));
        table.add(Underline::Words, Text("w"));

        table.add(BorderStyle::DashDot, Text("dashd"));
        table.add(BorderStyle::DashDotDot, Text("dashdd"));
        table.add(BorderStyle::DashLargeGap, Text("dash"));
        table.add(BorderStyle::DashSmallGap, Text("dashsm"));
        table.add(BorderStyle::Dot, Text("dot"));
        table.add(BorderStyle::Single, Text("s"));

        table.add(TabLeader::Dashes, Text("hyph"));
        table.add(TabLeader::Dots, Text("dot"));
        table.add(TabLeader::Heavy, Text("th"));
        table.add(TabLeader::Lines, Text("ul"));
        table.add(TabLeader::MiddleDot, Text("mdot"));

        table.add(TabAlignment::Center, Text("c"));
        table.add(TabAlignment::Decimal, Text("dec"));
        table.add(TabAlignment::Right, Text("r"));
        table.add(TabAlignment::Left, Text("l"));

        table.add(FootnoteNumberStyle::Arabic, Text("ar"));
        table.add(FootnoteNumberStyle::LowercaseLetter, Text("alc"));
        table.add(FootnoteNumberStyle::LowercaseRoman, Text("rlc"));
        table.add(FootnoteNumberStyle::UppercaseLetter, Text("auc"));
        table.add(FootnoteNumberStyle::UppercaseRoman, Text("ruc"));

        table.add(FootnoteNumberingRule::RestartContinuous, Text("rstcont"));
        table.add(FootnoteNumberingRule::RestartPage, Text("rstpg"));
        table.add(FootnoteNumberingRule::RestartSection, Text("restart"));

        table.add(FootnoteLocation::BeneathText, Text("tj"));
        table.add(FootnoteLocation::BottomOfPage, Text("bj"));

        table.add(SectionBreakType::BreakEvenPage, Text("even"));
        table.add(SectionBreakType::BreakOddPage, Text("odd"));
        table.add(SectionBreakType::BreakNextPage, Text("page"));

        table.add(ListType::BulletList1, Code(23));
        table.add(ListType::BulletList2, Code(23));
        table.add(ListType::BulletList3, Code(23));
        table.add(ListType::NumberList1, Code(0));
        table.add(ListType::NumberList2, Code(0));
        table.add(ListType::NumberList3, Code(4));

        table.add(RowAlignment::Center, Text("c"));
        table.add(RowAlignment::Left, Text("l"));
        table.add(RowAlignment::Right, Text("r"));

        table.add(VerticalAlignment::Top, Text("t"));
        table.add(VerticalAlignment::Center, Text("c"));
        table.add(VerticalAlignment::Bottom, Text("b"));

        table.add(RelativeHorizontal::Character, Text("margin"));
        table.add(RelativeHorizontal::Column, Text("margin"));
        table.add(RelativeHorizontal::Margin, Text("margin"));
        table.add(RelativeHorizontal::Page, Text("page"));

        table.add(RelativeVertical::Line, Text("para"));
        table.add(RelativeVertical::Margin, Text("margin"));
        table.add(RelativeVertical::Page, Text("page"));
        table.add(RelativeVertical::Paragraph, Text("para"));

        table.add(WrapStyle::None, Code(3));
        table.add(WrapStyle::Through, Code(3));
        table.add(WrapStyle::TopBottom, Code(1));

        table.add(LineStyle::Single, Code(0));

        table.add(DashStyle::Solid, Code(0));
        table.add(DashStyle::Dash, Code(1));
        table.add(DashStyle::SquareDot, Code(2));
        table.add(DashStyle::DashDot, Code(3));
        table.add(DashStyle::DashDotDot, Code(4));

        table.add(TextOrientation::Downward, Code(3));
        table.add(TextOrientation::Horizontal, Code(0));
        table.add(TextOrientation::HorizontalRotatedFarEast, Code(0));
        table.add(TextOrientation::Upward, Code(2));
        table.add(TextOrientation::Vertical, Code(3));
        table.add(TextOrientation::VerticalFarEast, Code(3));

        log::debug!("Built enum translation table with {} entries", table.entries.len());
        EnumTranslationTable {
            entries: table.entries,
        }
    }
}

#[derive(Default)]
struct Builder {
    entries: HashMap<EnumValue, Token>,
}

impl Builder {
    fn add(&mut self, value: impl Into<EnumValue>, token: Token) {
        let value = value.into();
        let previous = self.entries.insert(value, token);
        debug_assert!(previous.is_none(), "duplicate table entry for {:?}", value);
    }
}

/// Looks up `value` in the process-wide table. Panics on a missing entry.
pub fn lookup(value: EnumValue) -> Token {
    EnumTranslationTable::global().lookup(value)
}
