use std::fmt;

/// Discriminant of every node class found in document JSON (`_class`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum NodeClass {
    Page,
    Artboard,
    Rect,
    ShapeGroup,
    Group,
    Color,
    Gradient,
    GradientStop,
    Style,
    GraphicsContextSettings,
    Fill,
    Shadow,
    InnerShadow,
    Border,
    SymbolMaster,
    SymbolInstance,
    Document,
    ExternalReference,
    TextStyle,
    Bitmap,
    ShapePath,
    Rectangle,
    Oval,
    Star,
    Polygon,
    Triangle,
    Path,
    CurvePoint,
    Text,
    AttributedString,
}

/// Canonical tag of every class. Lookup in both directions goes through this table.
const TAGS: &[(NodeClass, &str)] = &[
    (NodeClass::Page, "page"),
    (NodeClass::Artboard, "artboard"),
    (NodeClass::Rect, "rect"),
    (NodeClass::ShapeGroup, "shapeGroup"),
    (NodeClass::Group, "group"),
    (NodeClass::Color, "color"),
    (NodeClass::Gradient, "gradient"),
    (NodeClass::GradientStop, "gradientStop"),
    (NodeClass::Style, "style"),
    (NodeClass::GraphicsContextSettings, "graphicsContextSettings"),
    (NodeClass::Fill, "fill"),
    (NodeClass::Shadow, "shadow"),
    (NodeClass::InnerShadow, "innerShadow"),
    (NodeClass::Border, "border"),
    (NodeClass::SymbolMaster, "symbolMaster"),
    (NodeClass::SymbolInstance, "symbolInstance"),
    (NodeClass::Document, "document"),
    (NodeClass::ExternalReference, "MSJSONFileReference"),
    (NodeClass::TextStyle, "textStyle"),
    (NodeClass::Bitmap, "bitmap"),
    (NodeClass::ShapePath, "shapePath"),
    (NodeClass::Rectangle, "rectangle"),
    (NodeClass::Oval, "oval"),
    (NodeClass::Star, "star"),
    (NodeClass::Polygon, "polygon"),
    (NodeClass::Triangle, "triangle"),
    (NodeClass::Path, "path"),
    (NodeClass::CurvePoint, "curvePoint"),
    (NodeClass::Text, "text"),
    (NodeClass::AttributedString, "attributedString"),
];

/// Tags written by older document versions.
const LEGACY_TAGS: &[(NodeClass, &str)] = &[
    (NodeClass::AttributedString, "MSAttributedString"),
    (NodeClass::ExternalReference, "externalReference"),
];

impl NodeClass {
    /// Every class, in table order.
    pub fn all() -> impl Iterator<Item = NodeClass> {
        TAGS.iter().map(|(c, _)| *c)
    }

    /// Look up a class by its `_class` tag, accepting legacy spellings.
    pub fn from_tag(tag: &str) -> Option<Self> {
        TAGS.iter()
            .chain(LEGACY_TAGS)
            .find(|(_, t)| *t == tag)
            .map(|(c, _)| *c)
    }

    /// Canonical `_class` tag.
    pub fn as_tag(self) -> &'static str {
        TAGS.iter()
            .find(|(c, _)| *c == self)
            .map(|(_, t)| *t)
            .unwrap_or_default()
    }

    /// Whether nodes of this class are layers (carry a frame and layer flags).
    pub fn is_layer(self) -> bool {
        matches!(
            self,
            Self::Page
                | Self::Artboard
                | Self::ShapeGroup
                | Self::Group
                | Self::SymbolMaster
                | Self::SymbolInstance
                | Self::Bitmap
                | Self::ShapePath
                | Self::Rectangle
                | Self::Oval
                | Self::Star
                | Self::Polygon
                | Self::Triangle
                | Self::Text
        )
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
