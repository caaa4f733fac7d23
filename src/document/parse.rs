use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    document::class::NodeClass,
    document::model::{
        AssetReference, AttributedString, Border, Color, CurvePoint, Document, Fill, Gradient,
        GradientStop, GraphicsContextSettings, Layer, Path, Shadow, Style, TextStyle,
    },
    foundation::core::Frame,
    foundation::error::{SketchError, SketchResult},
};

/// Any node the factory can build, keyed by its [`NodeClass`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Document root.
    Document(Document),
    /// A layer and, recursively, its children.
    Layer(Box<Layer>),
    /// A bare frame (`rect`).
    Rect(Frame),
    /// A color.
    Color(Color),
    /// A gradient.
    Gradient(Gradient),
    /// A gradient stop.
    GradientStop(GradientStop),
    /// A style.
    Style(Box<Style>),
    /// Opacity and blending settings.
    GraphicsContextSettings(GraphicsContextSettings),
    /// A fill.
    Fill(Fill),
    /// A shadow; inner shadows have `inset` set.
    Shadow(Shadow),
    /// A border.
    Border(Border),
    /// A lazy archive reference.
    ExternalReference(AssetReference),
    /// A text style.
    TextStyle(TextStyle),
    /// A path.
    Path(Path),
    /// A curve point.
    CurvePoint(CurvePoint),
    /// An attributed string.
    AttributedString(AttributedString),
}

impl Node {
    /// The layer, if this node is one.
    pub fn as_layer(&self) -> Option<&Layer> {
        match self {
            Self::Layer(l) => Some(l),
            _ => None,
        }
    }

    /// Take the layer out of this node, if it is one.
    pub fn into_layer(self) -> Option<Layer> {
        match self {
            Self::Layer(l) => Some(*l),
            _ => None,
        }
    }
}

/// Read the `_class` discriminant of a JSON object.
pub fn node_class_of(value: &Value) -> SketchResult<NodeClass> {
    let tag = value
        .get("_class")
        .and_then(Value::as_str)
        .ok_or_else(|| SketchError::validation("node is missing a string \"_class\" tag"))?;
    NodeClass::from_tag(tag)
        .ok_or_else(|| SketchError::validation(format!("unknown node class \"{tag}\"")))
}

/// Build a typed node graph from document JSON.
///
/// Dispatch happens once on the root's `_class`; nested nodes are built by the same typed
/// deserializers, so layer trees of any depth come back fully constructed.
pub fn parse_node(value: Value) -> SketchResult<Node> {
    let class = node_class_of(&value)?;
    let node = match class {
        NodeClass::Document => Node::Document(build(class, value)?),
        NodeClass::Rect => Node::Rect(build(class, value)?),
        NodeClass::Color => Node::Color(build(class, value)?),
        NodeClass::Gradient => Node::Gradient(build(class, value)?),
        NodeClass::GradientStop => Node::GradientStop(build(class, value)?),
        NodeClass::Style => Node::Style(Box::new(build(class, value)?)),
        NodeClass::GraphicsContextSettings => Node::GraphicsContextSettings(build(class, value)?),
        NodeClass::Fill => Node::Fill(build(class, value)?),
        NodeClass::Shadow => Node::Shadow(build(class, value)?),
        NodeClass::InnerShadow => {
            let shadow: Shadow = build(class, value)?;
            Node::Shadow(Shadow {
                inset: true,
                ..shadow
            })
        }
        NodeClass::Border => Node::Border(build(class, value)?),
        NodeClass::ExternalReference => Node::ExternalReference(build(class, value)?),
        NodeClass::TextStyle => Node::TextStyle(build(class, value)?),
        NodeClass::Path => Node::Path(build(class, value)?),
        NodeClass::CurvePoint => Node::CurvePoint(build(class, value)?),
        NodeClass::AttributedString => Node::AttributedString(build(class, value)?),
        NodeClass::Page
        | NodeClass::Artboard
        | NodeClass::ShapeGroup
        | NodeClass::Group
        | NodeClass::SymbolMaster
        | NodeClass::SymbolInstance
        | NodeClass::Bitmap
        | NodeClass::ShapePath
        | NodeClass::Rectangle
        | NodeClass::Oval
        | NodeClass::Star
        | NodeClass::Polygon
        | NodeClass::Triangle
        | NodeClass::Text => Node::Layer(Box::new(build(class, value)?)),
    };
    Ok(node)
}

/// Parse document JSON text and build its node graph.
pub fn parse_node_str(json: &str) -> SketchResult<Node> {
    let value: Value = serde_json::from_str(json)?;
    parse_node(value)
}

fn build<T: DeserializeOwned>(class: NodeClass, value: Value) -> SketchResult<T> {
    serde_json::from_value(value)
        .map_err(|e| SketchError::serde(format!("invalid {class} node: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
