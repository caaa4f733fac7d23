use crate::{
    document::model::{Layer, TextStyle},
    style::color::color_to_string,
    style::descriptor::{StyleDescriptor, StyleKey},
};

/// Horizontal paragraph alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Left (natural); never emitted.
    Left,
    /// Centered.
    Center,
    /// Right.
    Right,
    /// Justified.
    Justify,
}

impl TextAlignment {
    /// Decode an archived alignment value.
    ///
    /// `4` (natural) and `0` both render left-aligned; unknown values yield `None`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 | 4 => Some(Self::Left),
            2 => Some(Self::Center),
            1 => Some(Self::Right),
            3 => Some(Self::Justify),
            _ => None,
        }
    }

    /// CSS `text-align` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Resolve the text attributes of a text layer.
pub fn resolve_text_style(text_style: &TextStyle, layer: &Layer) -> StyleDescriptor {
    let attrs = &text_style.encoded_attributes;
    let mut out = StyleDescriptor::new();

    let alignment = attrs
        .paragraph_style
        .alignment
        .map_or(Some(TextAlignment::Left), TextAlignment::from_raw);
    if let Some(alignment) = alignment.filter(|a| *a != TextAlignment::Left) {
        out.set(StyleKey::TextAlign, alignment.as_css());
    }

    if layer.text_behaviour() != 0 {
        out.set(StyleKey::Width, layer.frame.width());
    } else {
        out.set(StyleKey::WhiteSpace, "nowrap");
    }

    if let Some(size) = attrs.font.descriptor.size {
        out.set(StyleKey::FontSize, size);
    }
    out.set(StyleKey::Color, color_to_string(&attrs.color, None));
    out
}

/// Resolve the text attributes of a layer from its own style; `None` for layers without a
/// text style.
pub fn resolve_layer_text_style(layer: &Layer) -> Option<StyleDescriptor> {
    let text_style = layer.style.as_ref()?.text_style.as_ref()?;
    Some(resolve_text_style(text_style, layer))
}

#[cfg(test)]
#[path = "../../tests/unit/style/text.rs"]
mod tests;
