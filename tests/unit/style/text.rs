use serde_json::json;

use super::*;
use crate::{
    document::model::{LayerKind, Style, TextLayer},
    foundation::core::Frame,
};

fn text_layer(text_behaviour: i64) -> Layer {
    Layer::new(
        LayerKind::Text(TextLayer {
            text_behaviour,
            ..TextLayer::default()
        }),
        Frame::new(0.0, 0.0, 120.4, 20.0),
    )
}

fn text_style(alignment: Option<i64>) -> TextStyle {
    let mut paragraph = serde_json::Map::new();
    if let Some(a) = alignment {
        paragraph.insert("NSAlignment".to_owned(), json!(a));
    }
    serde_json::from_value(json!({
        "_class": "textStyle",
        "encodedAttributes": {
            "NSParagraphStyle": paragraph,
            "MSAttributedStringFontAttribute": {
                "NSFontDescriptorAttributes": {"NSFontSizeAttribute": 16, "NSFontNameAttribute": "Inter"}
            },
            "NSColor": {"red": 0.5, "green": 0, "blue": 1, "alpha": 0.5}
        }
    }))
    .unwrap()
}

#[test]
fn left_alignment_is_never_emitted() {
    for raw in [None, Some(4), Some(0), Some(42)] {
        let d = resolve_text_style(&text_style(raw), &text_layer(0));
        assert!(!d.contains(StyleKey::TextAlign), "{raw:?}");
    }
}

#[test]
fn other_alignments_map_to_keywords() {
    for (raw, css) in [(2, "center"), (1, "right"), (3, "justify")] {
        let d = resolve_text_style(&text_style(Some(raw)), &text_layer(0));
        assert_eq!(d.get_str(StyleKey::TextAlign), Some(css));
    }
}

#[test]
fn fixed_width_text_gets_width_instead_of_nowrap() {
    let d = resolve_text_style(&text_style(None), &text_layer(1));
    assert_eq!(d.get_f64(StyleKey::Width), Some(120.0));
    assert!(!d.contains(StyleKey::WhiteSpace));

    let d = resolve_text_style(&text_style(None), &text_layer(0));
    assert_eq!(d.get_str(StyleKey::WhiteSpace), Some("nowrap"));
    assert!(!d.contains(StyleKey::Width));
}

#[test]
fn font_size_and_color_are_always_set() {
    let d = resolve_text_style(&text_style(None), &text_layer(0));
    assert_eq!(d.get_f64(StyleKey::FontSize), Some(16.0));
    assert_eq!(d.get_str(StyleKey::Color), Some("rgba(128,0,255,0.5)"));
}

#[test]
fn layer_text_style_comes_from_the_layer() {
    let mut layer = text_layer(0);
    assert!(resolve_layer_text_style(&layer).is_none());

    layer.style = Some(Style {
        text_style: Some(text_style(Some(2))),
        ..Style::default()
    });
    let d = resolve_layer_text_style(&layer).unwrap();
    assert_eq!(d.get_str(StyleKey::TextAlign), Some("center"));
}
