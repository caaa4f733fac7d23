use std::f64::consts::PI;

use serde::Serialize;

use crate::{
    document::model::{BlendMode, Fill, FillType, Gradient, GradientStop, GradientType},
    foundation::core::{Frame, format_number},
    style::blend::blend_mode_to_string,
    style::color::color_to_string,
};

/// Paint emitted for gradients that cannot be expressed (radial, angular).
pub const UNSUPPORTED_PAINT: &str = "none";

/// Paint and blending of a single fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FillStyle {
    /// Background paint string; empty for fill types that are not rendered.
    pub background: String,
    /// Blend mode name, `"normal"` by default.
    pub mix_blend_mode: &'static str,
}

/// Render one stop as `<color> <percent>%`.
pub fn gradient_stop_to_string(stop: &GradientStop) -> String {
    format!(
        "{} {}%",
        color_to_string(&stop.color, None),
        format_number(stop.position * 100.0)
    )
}

/// Render a gradient as a CSS `linear-gradient(...)`, measured against `frame`.
///
/// The start and end points are scaled by the frame's width and height independently, so the
/// angle follows the gradient line as drawn on a non-square layer.
pub fn gradient_to_string(gradient: &Gradient, frame: &Frame) -> String {
    match gradient.gradient_type {
        GradientType::Linear => {
            let (x1, y1) = (gradient.from.x * frame.width(), gradient.from.y * frame.height());
            let (x2, y2) = (gradient.to.x * frame.width(), gradient.to.y * frame.height());
            let angle = 90.0 + (y2 - y1).atan2(x2 - x1) * 180.0 / PI;
            let stops = gradient
                .stops
                .iter()
                .map(gradient_stop_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("linear-gradient({}deg, {stops})", format_number(angle))
        }
        GradientType::Other(kind) => {
            tracing::warn!(gradient_type = kind, "unsupported gradient type, painting nothing");
            UNSUPPORTED_PAINT.to_owned()
        }
    }
}

/// Render a fill as a background paint string.
///
/// Flat colors become a two-stop gradient of the same color, so flat and gradient fills
/// share one representation.
pub fn fill_to_string(fill: &Fill, frame: &Frame) -> String {
    match fill.fill_type {
        FillType::Flat => {
            let c = color_to_string(&fill.color, None);
            format!("linear-gradient(0deg, {c},{c})")
        }
        FillType::Gradient => match &fill.gradient {
            Some(gradient) => gradient_to_string(gradient, frame),
            None => {
                tracing::warn!("gradient fill without a gradient, painting nothing");
                UNSUPPORTED_PAINT.to_owned()
            }
        },
        FillType::Other(kind) => {
            tracing::debug!(fill_type = kind, "fill type is not rendered");
            String::new()
        }
    }
}

/// Blend mode name of a fill; `"normal"` when the fill has no context settings.
pub fn fill_blend_mode(fill: &Fill) -> &'static str {
    let mode = fill
        .context_settings
        .map_or(BlendMode::NORMAL, |c| c.blend_mode);
    blend_mode_to_string(mode)
}

/// Background paint plus blend mode of a fill.
pub fn fill_to_style(fill: &Fill, frame: &Frame) -> FillStyle {
    FillStyle {
        background: fill_to_string(fill, frame),
        mix_blend_mode: fill_blend_mode(fill),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/paint.rs"]
mod tests;
