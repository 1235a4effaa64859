mod common;

use common::fixtures::*;
use common::{session_from_json, session_with_config, TestResult};
use quire::rtf::{
    ControlWord, ParagraphFormatRenderer, RecordingSink, RtfTextSink, StandardParagraphFormat,
};
use quire::types::Scale;
use serde_json::json;

#[test]
fn test_alignment_center_emits_token() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph(json!({
        "Alignment": { "enum": { "alignment": "center" } }
    }))]);
    let session = session_from_json(&doc)?;
    let para = &session.document().body[0];

    let mut sink = RecordingSink::new();
    session
        .translator(para, &mut sink)
        .translate("Alignment", "ctrl", Scale::Twips, None, false)?;
    assert_eq!(sink.commands(), &[ControlWord::with_arg("ctrl", "c", false)]);
    Ok(())
}

#[test]
fn test_absent_space_before_uses_literal_default() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let session = session_from_json(&document(vec![paragraph(json!({}))]))?;
    let para = &session.document().body[0];

    let mut sink = RecordingSink::new();
    session
        .translator(para, &mut sink)
        .translate("SpaceBefore", "ctrl", Scale::Twips, Some("0"), false)?;
    assert_eq!(sink.to_rtf(), "\\ctrl0");
    Ok(())
}

#[test]
fn test_shape_width_in_emu() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![json!({
        "kind": "Image",
        "attributes": { "Width": { "length": "72pt" } }
    })]);
    let session = session_from_json(&doc)?;
    let image = &session.document().body[0];

    let mut sink = RecordingSink::new();
    session
        .translator(image, &mut sink)
        .translate("Width", "shpwr", Scale::Emu, None, false)?;
    assert_eq!(sink.commands(), &[ControlWord::with_arg("shpwr", 914_400i64, false)]);
    Ok(())
}

#[test]
fn test_heading_format_cascades_from_styles() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let session = session_from_json(&document(vec![styled_paragraph("Heading1", json!({}))]))?;
    let heading = &session.document().body[0];

    let mut sink = RecordingSink::new();
    StandardParagraphFormat.render(&mut session.translator(heading, &mut sink))?;
    assert_eq!(
        sink.to_rtf(),
        "\\sb240\\sa120\\widctlpar\\keepn\\outlinelevel0"
    );
    Ok(())
}

#[test]
fn test_direct_resolution_ignores_styles() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![styled_paragraph(
        "Heading1",
        json!({ "Alignment": { "enum": { "alignment": "justify" } } }),
    )]);
    let session = session_with_config(&doc, &json!({ "resolution": "direct" }))?;
    let heading = &session.document().body[0];

    let mut sink = RecordingSink::new();
    StandardParagraphFormat.render(&mut session.translator(heading, &mut sink))?;
    assert_eq!(sink.to_rtf(), "\\qj");
    Ok(())
}

#[test]
fn test_style_colors_use_the_session_color_table() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![json!({
        "kind": "FormattedText",
        "style": "Emphasis",
        "attributes": { "Highlight": { "color": "#ffff00" } }
    })]);
    let session = session_from_json(&doc)?;
    let text = &session.document().body[0];

    let mut sink = RecordingSink::new();
    let mut translator = session.translator(text, &mut sink);
    translator.translate("Color", "cf", Scale::Points, None, false)?;
    translator.translate("Highlight", "highlight", Scale::Points, None, false)?;
    // Styles register before body elements.
    assert_eq!(sink.to_rtf(), "\\cf1\\highlight2");
    assert_eq!(session.colors().len(), 2);
    Ok(())
}

#[test]
fn test_bool_pairs() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![
        paragraph(json!({ "Bold": { "boolean": true } })),
        paragraph(json!({ "Bold": { "boolean": false } })),
        paragraph(json!({})),
    ]);
    let session = session_from_json(&doc)?;

    let mut sink = RecordingSink::new();
    for para in &session.document().body {
        session
            .translator(para, &mut sink)
            .translate_bool("Bold", "b", Some("b0"), false)?;
    }
    assert_eq!(sink.to_rtf(), "\\b\\b0");

    let mut sink = RecordingSink::new();
    for para in &session.document().body {
        session
            .translator(para, &mut sink)
            .translate_bool("Bold", "b", None, false)?;
    }
    assert_eq!(sink.to_rtf(), "\\b");
    Ok(())
}

#[test]
fn test_text_sink_serializes_in_call_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = document(vec![paragraph(json!({
        "LeftIndent": { "length": "1in" },
        "Underline": { "enum": { "underline": "dot-dash" } },
        "Wrap": { "enum": { "wrapStyle": "top-bottom" } }
    }))]);
    let session = session_from_json(&doc)?;
    let para = &session.document().body[0];

    let mut sink = RtfTextSink::new(Vec::new());
    {
        let mut t = session.translator(para, &mut sink);
        t.translate_twips("LeftIndent", "li")?;
        t.translate("Underline", "ul", Scale::Twips, None, false)?;
        t.translate("Wrap", "shpwr", Scale::Twips, None, true)?;
        t.translate_with_length_default("RightIndent", "ri", quire::types::Length::cm(1.0))?;
    }
    assert_eq!(sink.written(), 4);
    let rtf = String::from_utf8(sink.into_inner())?;
    assert_eq!(rtf, "\\li1440\\uldashd\\*\\shpwr1\\ri567");
    Ok(())
}
