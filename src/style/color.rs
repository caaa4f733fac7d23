use std::fmt;

use crate::{
    document::model::{Color, GraphicsContextSettings},
    foundation::core::{format_number, round_half_up},
};

/// Render a color as `rgba(R,G,B,A)`.
///
/// Channels scale to `0..=255` and round; a missing or NaN channel is `0`. Alpha defaults to
/// `1` and is multiplied by the context opacity when a context is given.
pub fn color_to_string(color: &Color, context: Option<&GraphicsContextSettings>) -> String {
    fn channel(v: Option<f64>) -> f64 {
        match v {
            Some(v) if !v.is_nan() => round_half_up(v * 255.0),
            _ => 0.0,
        }
    }

    let alpha = color.alpha.filter(|a| !a.is_nan()).unwrap_or(1.0);
    let opacity = context.map_or(1.0, |c| c.opacity);
    format!(
        "rgba({},{},{},{})",
        format_number(channel(color.red)),
        format_number(channel(color.green)),
        format_number(channel(color.blue)),
        format_number(alpha * opacity),
    )
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_string(self, None))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
