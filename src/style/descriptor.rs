use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::foundation::core::format_number;

/// Presentation attribute names produced by the resolvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum StyleKey {
    BorderRadius,
    FillRule,
    Fill,
    BoxSizing,
    Border,
    Stroke,
    StrokeWidth,
    BoxShadow,
    PointerEvents,
    Display,
    Transform,
    Opacity,
    MixBlendMode,
    TextAlign,
    WhiteSpace,
    FontSize,
    Color,
    Position,
    Top,
    Left,
    Width,
    Height,
}

impl StyleKey {
    /// CSS property name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BorderRadius => "border-radius",
            Self::FillRule => "fill-rule",
            Self::Fill => "fill",
            Self::BoxSizing => "box-sizing",
            Self::Border => "border",
            Self::Stroke => "stroke",
            Self::StrokeWidth => "stroke-width",
            Self::BoxShadow => "box-shadow",
            Self::PointerEvents => "pointer-events",
            Self::Display => "display",
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::MixBlendMode => "mix-blend-mode",
            Self::TextAlign => "text-align",
            Self::WhiteSpace => "white-space",
            Self::FontSize => "font-size",
            Self::Color => "color",
            Self::Position => "position",
            Self::Top => "top",
            Self::Left => "left",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    // Numbers on these keys are lengths and need a unit in CSS text.
    fn is_length(self) -> bool {
        matches!(
            self,
            Self::FontSize | Self::Top | Self::Left | Self::Width | Self::Height
        )
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presentation attribute value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Keyword or composite string.
    Text(String),
    /// Bare number (unitless, or pixels for lengths).
    Number(f64),
}

impl StyleValue {
    /// String content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric content, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Flat key/value description of how a node is presented.
///
/// Setting a key twice keeps the last value. Iteration order is stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDescriptor {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl StyleDescriptor {
    /// Empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.entries.insert(key, value.into());
    }

    /// Value of `key`.
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.entries.get(&key)
    }

    /// Text value of `key`.
    pub fn get_str(&self, key: StyleKey) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Numeric value of `key`.
    pub fn get_f64(&self, key: StyleKey) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_f64)
    }

    /// Whether `key` is set.
    pub fn contains(&self, key: StyleKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Copy every entry of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: StyleDescriptor) {
        self.entries.extend(other.entries);
    }

    /// Inline CSS declaration list, e.g. `display: none; opacity: 0.5`.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| match v {
                StyleValue::Number(n) if k.is_length() => {
                    format!("{k}: {}px", format_number(*n))
                }
                _ => format!("{k}: {v}"),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k.as_str(), v)?;
        }
        map.end()
    }
}
