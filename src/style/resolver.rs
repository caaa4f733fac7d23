use crate::{
    document::model::{BlendMode, Border, Layer, ShapeKind, Shadow, Style},
    foundation::core::format_number,
    style::blend::blend_mode_to_string,
    style::color::color_to_string,
    style::descriptor::{StyleDescriptor, StyleKey},
};

/// Resolve the presentation style of `layer` from `style`.
///
/// `is_vector` selects attributes for vector output (fill and stroke attributes) instead of
/// box styling. Rules run in a fixed order and later rules overwrite keys set by earlier
/// ones. Missing optional data never fails; it simply leaves keys unset.
pub fn resolve_style(style: &Style, layer: &Layer, is_vector: bool) -> StyleDescriptor {
    let mut out = StyleDescriptor::new();

    if let Some(radius) = corner_radius(layer) {
        out.set(StyleKey::BorderRadius, radius);
    }

    if is_vector {
        out.set(StyleKey::FillRule, "evenodd");
        // Last-declared fill paints on top.
        match style.fills.iter().rev().find(|f| f.is_enabled) {
            Some(top) => out.set(StyleKey::Fill, color_to_string(&top.color, None)),
            None => out.set(StyleKey::Fill, "none"),
        }
    }

    if let Some(border) = style.borders.iter().find(|b| b.is_enabled) {
        out.set(StyleKey::BoxSizing, "border-box");
        apply_border(&mut out, border, is_vector);
    }

    let shadows = style
        .shadows
        .iter()
        .chain(&style.inner_shadows)
        .filter(|s| s.is_enabled)
        .map(shadow_to_string)
        .collect::<Vec<_>>();
    if !shadows.is_empty() {
        out.set(StyleKey::BoxShadow, shadows.join(", "));
    }

    if layer.is_locked {
        out.set(StyleKey::PointerEvents, "none");
    } else if !layer.has_click_through {
        out.set(StyleKey::PointerEvents, "auto");
    }

    if !layer.is_visible {
        out.set(StyleKey::Display, "none");
    }

    if let Some(transform) = transform(layer) {
        out.set(StyleKey::Transform, transform);
    }

    if let Some(ctx) = &style.context_settings {
        if ctx.opacity != 1.0 {
            out.set(StyleKey::Opacity, ctx.opacity);
        }
        if ctx.blend_mode != BlendMode::NORMAL {
            out.set(StyleKey::MixBlendMode, blend_mode_to_string(ctx.blend_mode));
        }
    }

    out
}

/// Resolve a layer with its own style; layers without one get an empty style.
#[tracing::instrument(level = "trace", skip(layer), fields(layer = %layer.object_id))]
pub fn resolve_layer_style(layer: &Layer, is_vector: bool) -> StyleDescriptor {
    match &layer.style {
        Some(style) => resolve_style(style, layer, is_vector),
        None => resolve_style(&Style::default(), layer, is_vector),
    }
}

/// Box style of a bitmap layer: an absolutely positioned block sized to the frame, plus the
/// layer's own (raster) style.
pub fn resolve_bitmap_style(layer: &Layer) -> StyleDescriptor {
    let mut out = StyleDescriptor::new();
    out.set(StyleKey::Display, "block");
    out.set(StyleKey::Position, "absolute");
    out.set(StyleKey::Height, layer.frame.height());
    out.set(StyleKey::Width, layer.frame.width());
    out.set(StyleKey::Top, layer.frame.y());
    out.set(StyleKey::Left, layer.frame.x());
    out.merge(resolve_layer_style(layer, false));
    out
}

/// Render a shadow as a `box-shadow` entry.
pub fn shadow_to_string(shadow: &Shadow) -> String {
    let body = format!(
        "{}px {}px {}px {}px {}",
        format_number(shadow.offset_x),
        format_number(shadow.offset_y),
        format_number(shadow.blur_radius),
        format_number(shadow.spread),
        color_to_string(&shadow.color, None),
    );
    if shadow.inset {
        format!("inset {body}")
    } else {
        body
    }
}

/// Render a border as a `border` shorthand.
pub fn border_to_string(border: &Border) -> String {
    format!(
        "{}px solid {}",
        format_number(border.thickness),
        color_to_string(&border.color, None)
    )
}

fn apply_border(out: &mut StyleDescriptor, border: &Border, is_vector: bool) {
    if is_vector {
        out.set(StyleKey::Stroke, color_to_string(&border.color, None));
        out.set(StyleKey::StrokeWidth, border.thickness);
    } else {
        out.set(StyleKey::Border, border_to_string(border));
    }
}

/// A shape group wrapping one untouched primitive can be drawn as a rounded box.
fn corner_radius(layer: &Layer) -> Option<String> {
    if !layer.is_shape_group() {
        return None;
    }
    let [child] = layer.children() else {
        return None;
    };
    let shape = child.as_shape()?;
    if shape.edited {
        return None;
    }

    match shape.kind {
        ShapeKind::Oval if layer.frame.is_square() => Some("50%".to_owned()),
        ShapeKind::Rectangle => {
            // Only the first point's radius is sampled; all four corners repeat it.
            let r = shape.path.points.first()?.corner_radius;
            let corner = format!("{}px", format_number(r));
            Some([corner.as_str(); 4].join(" "))
        }
        _ => None,
    }
}

fn transform(layer: &Layer) -> Option<String> {
    let flipped = layer.is_flipped_horizontal || layer.is_flipped_vertical;
    if layer.rotation == 0.0 && !flipped {
        return None;
    }

    let mut parts = Vec::with_capacity(2);
    if layer.rotation != 0.0 {
        parts.push(format!("rotate({}deg)", format_number(-layer.rotation)));
    }
    if flipped {
        let a = if layer.is_flipped_horizontal { -1 } else { 1 };
        let d = if layer.is_flipped_vertical { -1 } else { 1 };
        parts.push(format!("matrix({a}, 0, 0, {d}, 0, 0)"));
    }
    Some(parts.join(" "))
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolver.rs"]
mod tests;
