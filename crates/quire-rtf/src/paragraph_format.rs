//! Paragraph-format control words for a style or paragraph.

use crate::control_word::ControlWord;
use crate::error::RenderError;
use crate::translator::Translator;
use quire_model::AttributeValue;
use quire_types::{EnumValue, LineSpacingRule, OutlineLevel, Scale};

/// Emits the paragraph-format control words of the translator's source.
pub trait ParagraphFormatRenderer {
    fn render(&self, translator: &mut Translator<'_>) -> Result<(), RenderError>;
}

/// The paragraph properties every style and paragraph can carry.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardParagraphFormat;

impl ParagraphFormatRenderer for StandardParagraphFormat {
    fn render(&self, t: &mut Translator<'_>) -> Result<(), RenderError> {
        t.translate("Alignment", "q", Scale::Twips, None, false)?;
        t.translate_twips("SpaceBefore", "sb")?;
        t.translate_twips("SpaceAfter", "sa")?;
        t.translate_bool("WidowControl", "widctlpar", Some("nowidctlpar"), false)?;
        t.translate_bool("PageBreakBefore", "pagebb", None, false)?;
        t.translate_bool("KeepTogether", "keep", None, false)?;
        t.translate_bool("KeepWithNext", "keepn", None, false)?;
        t.translate_twips("FirstLineIndent", "fi")?;
        t.translate_twips("LeftIndent", "li")?;
        t.translate_twips("RightIndent", "ri")?;
        render_outline_level(t)?;
        render_line_spacing(t)
    }
}

fn render_outline_level(t: &mut Translator<'_>) -> Result<(), RenderError> {
    match t.resolve("OutlineLevel") {
        AttributeValue::Enum(EnumValue::OutlineLevel(OutlineLevel::BodyText)) => Ok(()),
        _ => t.translate("OutlineLevel", "outlinelevel", Scale::Twips, None, false),
    }
}

/// `\sl` holds the spacing in twips (negative for an exact height) or, for a
/// multiple, the factor in 240ths; `\slmult` says which of the two it is.
///
/// For [`LineSpacingRule::Multiple`], `LineSpacing` is a factor stored as a
/// length of that many points.
fn render_line_spacing(t: &mut Translator<'_>) -> Result<(), RenderError> {
    let rule = match t.resolve("LineSpacingRule") {
        AttributeValue::Enum(EnumValue::LineSpacingRule(rule)) => rule,
        AttributeValue::Absent => return Ok(()),
        other => {
            log::warn!("LineSpacingRule has a {} value, skipping line spacing", other.kind_name());
            return Ok(());
        }
    };

    let spacing = match t.resolve("LineSpacing") {
        AttributeValue::Length(length) => Some(length),
        _ => None,
    };

    let sl = match rule {
        LineSpacingRule::Single => Some(240),
        LineSpacingRule::OnePtFive => Some(360),
        LineSpacingRule::Double => Some(480),
        LineSpacingRule::AtLeast => spacing.map(|l| l.to_scale(Scale::Twips)),
        LineSpacingRule::Exactly => spacing.map(|l| -l.to_scale(Scale::Twips)),
        LineSpacingRule::Multiple => spacing.map(|l| l.to_scale(Scale::Lines)),
    };

    match sl {
        Some(sl) => {
            t.write(ControlWord::with_arg("sl", i64::from(sl), false))?;
            t.translate("LineSpacingRule", "slmult", Scale::Twips, None, false)
        }
        None => {
            log::debug!("LineSpacingRule {:?} without a LineSpacing length", rule);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::ColorTable;
    use crate::sink::RecordingSink;
    use quire_model::{DocumentElement, Style};
    use quire_types::{Alignment, Length};

    fn render(source: &dyn quire_model::AttributeSource) -> String {
        let colors = ColorTable::new();
        let mut sink = RecordingSink::new();
        let mut translator = Translator::new(source, &mut sink, &colors);
        StandardParagraphFormat.render(&mut translator).unwrap();
        sink.to_rtf()
    }

    #[test]
    fn empty_format_emits_nothing() {
        assert_eq!(render(&Style::new("Normal")), "");
    }

    #[test]
    fn renders_in_fixed_order() {
        let style = Style::new("Heading1")
            .with("KeepWithNext", true)
            .with("SpaceAfter", Length::pt(6.0))
            .with("SpaceBefore", Length::pt(12.0))
            .with("Alignment", EnumValue::from(Alignment::Center))
            .with("WidowControl", false)
            .with("OutlineLevel", EnumValue::from(OutlineLevel::Level1))
            .with("FirstLineIndent", Length::pt(-18.0));
        assert_eq!(
            render(&style),
            "\\qc\\sb240\\sa120\\nowidctlpar\\keepn\\fi-360\\outlinelevel0"
        );
    }

    #[test]
    fn body_text_outline_level_is_omitted() {
        let para = DocumentElement::paragraph()
            .with("OutlineLevel", EnumValue::from(OutlineLevel::BodyText));
        assert_eq!(render(&para), "");
    }

    #[test]
    fn line_spacing_rules() {
        let single = Style::new("s").with("LineSpacingRule", EnumValue::from(LineSpacingRule::Single));
        assert_eq!(render(&single), "\\sl240\\slmult1");

        let exactly = Style::new("e")
            .with("LineSpacingRule", EnumValue::from(LineSpacingRule::Exactly))
            .with("LineSpacing", Length::pt(14.0));
        assert_eq!(render(&exactly), "\\sl-280\\slmult0");

        let at_least = Style::new("a")
            .with("LineSpacingRule", EnumValue::from(LineSpacingRule::AtLeast))
            .with("LineSpacing", Length::pt(14.0));
        assert_eq!(render(&at_least), "\\sl280\\slmult0");

        let multiple = Style::new("m")
            .with("LineSpacingRule", EnumValue::from(LineSpacingRule::Multiple))
            .with("LineSpacing", Length::pt(1.5));
        assert_eq!(render(&multiple), "\\sl360\\slmult1");

        let missing = Style::new("x").with("LineSpacingRule", EnumValue::from(LineSpacingRule::Exactly));
        assert_eq!(render(&missing), "");
    }
}
