use serde_json::json;

use super::*;

#[test]
fn style_marks_inner_shadows_inset() {
    let style: Style = serde_json::from_value(json!({
        "_class": "style",
        "shadows": [{"_class": "shadow", "isEnabled": true, "offsetY": 2}],
        "innerShadows": [{"_class": "innerShadow", "isEnabled": true, "blurRadius": 3}]
    }))
    .unwrap();

    assert!(!style.shadows[0].inset);
    assert_eq!(style.shadows[0].offset_y, 2.0);
    assert!(style.inner_shadows[0].inset);
    assert_eq!(style.inner_shadows[0].blur_radius, 3.0);
    assert!(style.fills.is_empty());
    assert!(style.context_settings.is_none());
}

#[test]
fn fill_and_gradient_types_keep_unknown_values() {
    let fill: Fill = serde_json::from_value(json!({
        "_class": "fill",
        "isEnabled": true,
        "fillType": 4,
        "gradient": {"_class": "gradient", "gradientType": 1, "from": "{0.5, 0}", "to": "{0.5, 1}", "stops": []}
    }))
    .unwrap();

    assert_eq!(fill.fill_type, FillType::Other(4));
    assert_eq!(
        fill.gradient.unwrap().gradient_type,
        GradientType::Other(1)
    );
}

#[test]
fn shape_kinds_come_from_the_class_tag() {
    for (tag, kind) in [
        ("shapePath", ShapeKind::Path),
        ("rectangle", ShapeKind::Rectangle),
        ("oval", ShapeKind::Oval),
        ("star", ShapeKind::Star),
        ("polygon", ShapeKind::Polygon),
        ("triangle", ShapeKind::Triangle),
    ] {
        let layer: Layer = serde_json::from_value(json!({
            "_class": tag,
            "frame": {"_class": "rect", "x": 0, "y": 0, "width": 10, "height": 10},
            "path": {"_class": "path", "isClosed": true, "points": []}
        }))
        .unwrap();
        assert_eq!(layer.as_shape().unwrap().kind, kind, "{tag}");
    }
}

#[test]
fn shape_accepts_inline_points() {
    let layer: Layer = serde_json::from_value(json!({
        "_class": "rectangle",
        "edited": true,
        "isClosed": true,
        "points": [
            {"_class": "curvePoint", "point": "{0, 0}", "cornerRadius": 4}
        ]
    }))
    .unwrap();

    let shape = layer.as_shape().unwrap();
    assert!(shape.edited);
    assert!(shape.path.is_closed);
    let p = shape.path.points[0];
    assert_eq!(p.corner_radius, 4.0);
    assert_eq!(p.curve_from, p.point);
    assert_eq!(p.curve_to, p.point);
}

#[test]
fn layer_defaults_are_visible_and_unlocked() {
    let layer: Layer = serde_json::from_value(json!({"_class": "group"})).unwrap();
    assert!(layer.is_visible);
    assert!(!layer.is_locked);
    assert!(!layer.has_click_through);
    assert!(layer.children().is_empty());
    assert_eq!(layer.text_behaviour(), 0);
}

#[test]
fn nested_layers_deserialize_recursively() {
    let layer: Layer = serde_json::from_value(json!({
        "_class": "page",
        "layers": [{
            "_class": "shapeGroup",
            "isLocked": true,
            "layers": [{"_class": "oval", "path": {"points": []}}]
        }, {
            "_class": "slice"
        }]
    }))
    .unwrap();

    let children = layer.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].is_shape_group());
    assert!(children[0].is_locked);
    assert_eq!(
        children[0].children()[0].as_shape().unwrap().kind,
        ShapeKind::Oval
    );
    assert_eq!(children[1].kind, LayerKind::Unknown);
}

#[test]
fn references_decode_known_classes() {
    let r: AssetReference = serde_json::from_value(json!({
        "_class": "MSJSONFileReference",
        "_ref_class": "MSImageData",
        "_ref": "images/abc"
    }))
    .unwrap();
    assert_eq!(r, AssetReference::image("images/abc"));

    let r: AssetReference = serde_json::from_value(json!({
        "_ref_class": "MSFontData",
        "_ref": "fonts/x"
    }))
    .unwrap();
    assert_eq!(r.ref_class, RefClass::Other("MSFontData".to_string()));
    assert_eq!(r.ref_class.as_str(), "MSFontData");
}

#[test]
fn text_style_reads_legacy_and_current_keys() {
    let legacy: TextStyle = serde_json::from_value(json!({
        "encodedAttributes": {
            "NSParagraphStyle": {"NSAlignment": 2},
            "MSAttributedStringFontAttribute": {"NSFontDescriptorAttributes": {"NSFontSizeAttribute": 14}},
            "NSColor": {"red": 1, "green": 0, "blue": 0, "alpha": 1}
        }
    }))
    .unwrap();
    let attrs = &legacy.encoded_attributes;
    assert_eq!(attrs.paragraph_style.alignment, Some(2));
    assert_eq!(attrs.font.descriptor.size, Some(14.0));
    assert_eq!(attrs.color, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let current: TextStyle = serde_json::from_value(json!({
        "encodedAttributes": {
            "paragraphStyle": {"alignment": 1},
            "MSAttributedStringFontAttribute": {"_class": "fontDescriptor", "attributes": {"name": "Inter", "size": 12}},
            "MSAttributedStringColorAttribute": {"red": 0, "green": 0, "blue": 1}
        }
    }))
    .unwrap();
    let attrs = &current.encoded_attributes;
    assert_eq!(attrs.paragraph_style.alignment, Some(1));
    assert_eq!(attrs.font.descriptor.name.as_deref(), Some("Inter"));
    assert_eq!(attrs.color.alpha, None);
}
