use serde::Deserialize;

use crate::foundation::core::{Frame, NormPoint};

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

/// RGBA color with channels in `[0, 1]`. Any channel may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Color {
    /// Red channel.
    #[serde(default)]
    pub red: Option<f64>,
    /// Green channel.
    #[serde(default)]
    pub green: Option<f64>,
    /// Blue channel.
    #[serde(default)]
    pub blue: Option<f64>,
    /// Alpha channel; missing means opaque.
    #[serde(default)]
    pub alpha: Option<f64>,
}

impl Color {
    /// Fully specified color.
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: Some(alpha),
        }
    }
}

/// Raw blend-mode enumerant as stored in documents.
///
/// Values outside the known set are preserved; they render as an empty name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct BlendMode(pub i64);

#[allow(missing_docs)]
impl BlendMode {
    pub const NORMAL: Self = Self(0);
    pub const DARKEN: Self = Self(1);
    pub const MULTIPLY: Self = Self(2);
    pub const COLOR_BURN: Self = Self(3);
    pub const LIGHTEN: Self = Self(4);
    pub const SCREEN: Self = Self(5);
    pub const COLOR_DODGE: Self = Self(6);
    pub const OVERLAY: Self = Self(7);
    pub const SOFT_LIGHT: Self = Self(8);
    pub const HARD_LIGHT: Self = Self(9);
    pub const DIFFERENCE: Self = Self(10);
    pub const EXCLUSION: Self = Self(11);
    pub const HUE: Self = Self(12);
    pub const SATURATION: Self = Self(13);
    pub const COLOR: Self = Self(14);
    pub const LUMINOSITY: Self = Self(15);
    pub const PLUS_DARKER: Self = Self(16);
    pub const PLUS_LIGHTER: Self = Self(17);
}

/// Opacity and blending applied to a style or a single fill.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsContextSettings {
    /// Blend mode against the backdrop.
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Opacity in `[0, 1]`.
    #[serde(default = "default_one")]
    pub opacity: f64,
}

impl Default for GraphicsContextSettings {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::NORMAL,
            opacity: 1.0,
        }
    }
}

/// How a fill or border is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum FillType {
    /// Solid color (`0`).
    #[default]
    Flat,
    /// Gradient (`1`).
    Gradient,
    /// Patterns, noise and anything newer; not rendered.
    Other(i64),
}

impl From<i64> for FillType {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::Flat,
            1 => Self::Gradient,
            other => Self::Other(other),
        }
    }
}

/// Gradient geometry kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum GradientType {
    /// Linear gradient (`0`).
    #[default]
    Linear,
    /// Radial, angular and unknown kinds.
    Other(i64),
}

impl From<i64> for GradientType {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::Linear,
            other => Self::Other(other),
        }
    }
}

/// One color stop of a gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct GradientStop {
    /// Stop color.
    #[serde(default)]
    pub color: Color,
    /// Position along the gradient line in `[0, 1]`.
    #[serde(default)]
    pub position: f64,
}

/// Gradient definition. Stops are kept in authored order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    /// Gradient kind.
    #[serde(default)]
    pub gradient_type: GradientType,
    /// Start point, normalized to the owning layer's frame.
    #[serde(default)]
    pub from: NormPoint,
    /// End point, normalized to the owning layer's frame.
    #[serde(default)]
    pub to: NormPoint,
    /// Color stops in render order.
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

/// A fill entry of a style.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Disabled fills are kept in the document but not rendered.
    #[serde(default)]
    pub is_enabled: bool,
    /// Paint kind.
    #[serde(default)]
    pub fill_type: FillType,
    /// Flat color (also present, but ignored, on gradient fills).
    #[serde(default)]
    pub color: Color,
    /// Gradient for [`FillType::Gradient`].
    #[serde(default)]
    pub gradient: Option<Gradient>,
    /// Per-fill opacity and blending.
    #[serde(default)]
    pub context_settings: Option<GraphicsContextSettings>,
    /// Archived image for pattern fills.
    #[serde(default)]
    pub image: Option<AssetReference>,
}

/// A border entry of a style.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Disabled borders are not rendered.
    #[serde(default)]
    pub is_enabled: bool,
    /// Border color.
    #[serde(default)]
    pub color: Color,
    /// Stroke width in points.
    #[serde(default = "default_one")]
    pub thickness: f64,
    /// Paint kind; only the flat color is rendered.
    #[serde(default)]
    pub fill_type: FillType,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            is_enabled: false,
            color: Color::default(),
            thickness: 1.0,
            fill_type: FillType::Flat,
        }
    }
}

/// Drop shadow or inner shadow; `inset` tells them apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Disabled shadows are not rendered.
    #[serde(default)]
    pub is_enabled: bool,
    /// Horizontal offset.
    #[serde(default)]
    pub offset_x: f64,
    /// Vertical offset.
    #[serde(default)]
    pub offset_y: f64,
    /// Blur radius.
    #[serde(default)]
    pub blur_radius: f64,
    /// Spread.
    #[serde(default)]
    pub spread: f64,
    /// Shadow color.
    #[serde(default)]
    pub color: Color,
    /// Set for entries of `innerShadows`.
    #[serde(skip)]
    pub inset: bool,
}

/// Full visual style of a layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Fills in declaration order; later entries paint on top.
    pub fills: Vec<Fill>,
    /// Borders in declaration order.
    pub borders: Vec<Border>,
    /// Outer shadows.
    pub shadows: Vec<Shadow>,
    /// Inner shadows, all with `inset` set.
    pub inner_shadows: Vec<Shadow>,
    /// Layer-wide opacity and blending.
    pub context_settings: Option<GraphicsContextSettings>,
    /// Text attributes for text layers.
    pub text_style: Option<TextStyle>,
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            #[serde(default)]
            fills: Option<Vec<Fill>>,
            #[serde(default)]
            borders: Option<Vec<Border>>,
            #[serde(default)]
            shadows: Option<Vec<Shadow>>,
            #[serde(default)]
            inner_shadows: Option<Vec<Shadow>>,
            #[serde(default)]
            context_settings: Option<GraphicsContextSettings>,
            #[serde(default)]
            text_style: Option<TextStyle>,
        }

        let r = Repr::deserialize(deserializer)?;
        let mut inner_shadows = r.inner_shadows.unwrap_or_default();
        for s in &mut inner_shadows {
            s.inset = true;
        }
        Ok(Self {
            fills: r.fills.unwrap_or_default(),
            borders: r.borders.unwrap_or_default(),
            shadows: r.shadows.unwrap_or_default(),
            inner_shadows,
            context_settings: r.context_settings,
            text_style: r.text_style,
        })
    }
}

/// Text attributes archived with a text style.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Encoded attribute dictionary.
    #[serde(default)]
    pub encoded_attributes: EncodedAttributes,
}

/// The attribute dictionary of a [`TextStyle`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EncodedAttributes {
    /// Paragraph settings.
    #[serde(rename = "NSParagraphStyle", alias = "paragraphStyle", default)]
    pub paragraph_style: ParagraphStyle,
    /// Font attribute.
    #[serde(rename = "MSAttributedStringFontAttribute", default)]
    pub font: FontAttribute,
    /// Text color.
    #[serde(
        rename = "NSColor",
        alias = "MSAttributedStringColorAttribute",
        default
    )]
    pub color: Color,
}

/// Paragraph settings of a text style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct ParagraphStyle {
    /// Raw alignment value; see [`crate::TextAlignment::from_raw`].
    #[serde(rename = "NSAlignment", alias = "alignment", default)]
    pub alignment: Option<i64>,
}

/// Font attribute of a text style.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FontAttribute {
    /// Font descriptor values.
    #[serde(rename = "NSFontDescriptorAttributes", alias = "attributes", default)]
    pub descriptor: FontDescriptor,
}

/// Font name and size.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FontDescriptor {
    /// Point size.
    #[serde(rename = "NSFontSizeAttribute", alias = "size", default)]
    pub size: Option<f64>,
    /// PostScript font name.
    #[serde(rename = "NSFontNameAttribute", alias = "name", default)]
    pub name: Option<String>,
}

/// One vertex of a shape outline. All positions are normalized to the shape frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurvePoint {
    /// Anchor position.
    pub point: NormPoint,
    /// Outgoing handle.
    pub curve_from: NormPoint,
    /// Incoming handle.
    pub curve_to: NormPoint,
    /// Corner radius in points.
    pub corner_radius: f64,
}

impl<'de> Deserialize<'de> for CurvePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            point: NormPoint,
            #[serde(default)]
            curve_from: Option<NormPoint>,
            #[serde(default)]
            curve_to: Option<NormPoint>,
            #[serde(default)]
            corner_radius: f64,
        }

        // A missing handle sits on its anchor, which makes that side of the segment straight.
        let r = Repr::deserialize(deserializer)?;
        Ok(Self {
            point: r.point,
            curve_from: r.curve_from.unwrap_or(r.point),
            curve_to: r.curve_to.unwrap_or(r.point),
            corner_radius: r.corner_radius,
        })
    }
}

/// Outline of a shape.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Whether the last point connects back to the first.
    #[serde(default)]
    pub is_closed: bool,
    /// Vertices in drawing order.
    #[serde(default)]
    pub points: Vec<CurvePoint>,
}

/// Which primitive a shape layer was drawn as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Free-form vector path.
    #[default]
    Path,
    /// Rectangle (corner radius lives on its points).
    Rectangle,
    /// Ellipse.
    Oval,
    /// Star.
    Star,
    /// Regular polygon.
    Polygon,
    /// Triangle.
    Triangle,
}

/// A shape layer's geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapePath {
    /// Primitive the shape was drawn as.
    pub kind: ShapeKind,
    /// Set once the user has edited the primitive's points by hand.
    pub edited: bool,
    /// The outline.
    pub path: Path,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapePathRepr {
    #[serde(default)]
    edited: bool,
    // Older documents nest the outline in `path`; newer ones inline `points`/`isClosed`.
    #[serde(default)]
    path: Option<Path>,
    #[serde(default)]
    is_closed: bool,
    #[serde(default)]
    points: Vec<CurvePoint>,
}

impl ShapePathRepr {
    fn into_shape(self, kind: ShapeKind) -> ShapePath {
        let path = self.path.unwrap_or(Path {
            is_closed: self.is_closed,
            points: self.points,
        });
        ShapePath {
            kind,
            edited: self.edited,
            path,
        }
    }
}

/// Reference class of an archived asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RefClass {
    /// A page stored as its own JSON entry (`MSImmutablePage`).
    NestedPage,
    /// Raw image bytes (`MSImageData`).
    ImageData,
    /// Anything else; resolution fails with an unsupported-reference error.
    Other(String),
}

impl From<String> for RefClass {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "MSImmutablePage" => Self::NestedPage,
            "MSImageData" => Self::ImageData,
            _ => Self::Other(raw),
        }
    }
}

impl RefClass {
    /// The class name as written in documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NestedPage => "MSImmutablePage",
            Self::ImageData => "MSImageData",
            Self::Other(raw) => raw,
        }
    }
}

/// Lazy reference to an entry of the enclosing archive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AssetReference {
    /// What kind of asset the entry holds.
    #[serde(rename = "_ref_class")]
    pub ref_class: RefClass,
    /// Entry name without (or with) its extension.
    #[serde(rename = "_ref")]
    pub ref_id: String,
}

impl AssetReference {
    /// Reference to a nested page.
    pub fn page(ref_id: impl Into<String>) -> Self {
        Self {
            ref_class: RefClass::NestedPage,
            ref_id: ref_id.into(),
        }
    }

    /// Reference to archived image data.
    pub fn image(ref_id: impl Into<String>) -> Self {
        Self {
            ref_class: RefClass::ImageData,
            ref_id: ref_id.into(),
        }
    }
}

/// Text content of a text layer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AttributedString {
    /// Plain string content.
    #[serde(default)]
    pub string: String,
}

/// Layer kinds that only hold children.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Container {
    /// Child layers, bottom-most first.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// A reusable symbol definition.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SymbolMaster {
    /// Identifier instances refer to.
    #[serde(rename = "symbolID", default)]
    pub symbol_id: String,
    /// Child layers.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// A placed copy of a symbol.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SymbolInstance {
    /// Identifier of the master.
    #[serde(rename = "symbolID", default)]
    pub symbol_id: String,
}

/// Text layer payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    /// `0` grows with its content; anything else wraps to the frame width.
    #[serde(default)]
    pub text_behaviour: i64,
    /// Text content.
    #[serde(default)]
    pub attributed_string: AttributedString,
}

/// Bitmap layer payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BitmapLayer {
    /// Archived image.
    pub image: AssetReference,
}

/// Closed set of layer kinds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "LayerKindRepr")]
pub enum LayerKind {
    /// Top-level page.
    Page(Container),
    /// Artboard.
    Artboard(Container),
    /// Plain group.
    Group(Container),
    /// Group of shapes combined into one shape.
    ShapeGroup(Container),
    /// Symbol definition.
    SymbolMaster(SymbolMaster),
    /// Symbol instance.
    SymbolInstance(SymbolInstance),
    /// Text.
    Text(TextLayer),
    /// Bitmap.
    Bitmap(BitmapLayer),
    /// Vector shape of any primitive kind.
    Shape(ShapePath),
    /// Slices, hotspots and other layers with nothing to render.
    Unknown,
}

#[derive(Deserialize)]
#[serde(tag = "_class", rename_all = "camelCase")]
enum LayerKindRepr {
    Page(Container),
    Artboard(Container),
    Group(Container),
    ShapeGroup(Container),
    SymbolMaster(SymbolMaster),
    SymbolInstance(SymbolInstance),
    Text(TextLayer),
    Bitmap(BitmapLayer),
    ShapePath(ShapePathRepr),
    Rectangle(ShapePathRepr),
    Oval(ShapePathRepr),
    Star(ShapePathRepr),
    Polygon(ShapePathRepr),
    Triangle(ShapePathRepr),
    #[serde(other)]
    Unknown,
}

impl From<LayerKindRepr> for LayerKind {
    fn from(repr: LayerKindRepr) -> Self {
        match repr {
            LayerKindRepr::Page(c) => Self::Page(c),
            LayerKindRepr::Artboard(c) => Self::Artboard(c),
            LayerKindRepr::Group(c) => Self::Group(c),
            LayerKindRepr::ShapeGroup(c) => Self::ShapeGroup(c),
            LayerKindRepr::SymbolMaster(m) => Self::SymbolMaster(m),
            LayerKindRepr::SymbolInstance(i) => Self::SymbolInstance(i),
            LayerKindRepr::Text(t) => Self::Text(t),
            LayerKindRepr::Bitmap(b) => Self::Bitmap(b),
            LayerKindRepr::ShapePath(s) => Self::Shape(s.into_shape(ShapeKind::Path)),
            LayerKindRepr::Rectangle(s) => Self::Shape(s.into_shape(ShapeKind::Rectangle)),
            LayerKindRepr::Oval(s) => Self::Shape(s.into_shape(ShapeKind::Oval)),
            LayerKindRepr::Star(s) => Self::Shape(s.into_shape(ShapeKind::Star)),
            LayerKindRepr::Polygon(s) => Self::Shape(s.into_shape(ShapeKind::Polygon)),
            LayerKindRepr::Triangle(s) => Self::Shape(s.into_shape(ShapeKind::Triangle)),
            LayerKindRepr::Unknown => Self::Unknown,
        }
    }
}

/// A node of the layer tree: common attributes plus a kind-specific payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Stable object identifier.
    #[serde(rename = "do_objectID", default)]
    pub object_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Bounding box in parent coordinates.
    #[serde(default)]
    pub frame: Frame,
    /// Counter-clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Mirrored left to right.
    #[serde(default)]
    pub is_flipped_horizontal: bool,
    /// Mirrored top to bottom.
    #[serde(default)]
    pub is_flipped_vertical: bool,
    /// Locked layers ignore pointer input.
    #[serde(default)]
    pub is_locked: bool,
    /// Hidden layers are not displayed.
    #[serde(default = "default_true")]
    pub is_visible: bool,
    /// Groups that let clicks through to their children.
    #[serde(default)]
    pub has_click_through: bool,
    /// Visual style.
    #[serde(default)]
    pub style: Option<Style>,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    /// A visible, unlocked layer with default attributes.
    pub fn new(kind: LayerKind, frame: Frame) -> Self {
        Self {
            object_id: String::new(),
            name: String::new(),
            frame,
            rotation: 0.0,
            is_flipped_horizontal: false,
            is_flipped_vertical: false,
            is_locked: false,
            is_visible: true,
            has_click_through: false,
            style: None,
            kind,
        }
    }

    /// Child layers of container kinds; empty for leaves.
    pub fn children(&self) -> &[Layer] {
        match &self.kind {
            LayerKind::Page(c)
            | LayerKind::Artboard(c)
            | LayerKind::Group(c)
            | LayerKind::ShapeGroup(c) => &c.layers,
            LayerKind::SymbolMaster(m) => &m.layers,
            _ => &[],
        }
    }

    /// Shape payload, if this is a shape layer.
    pub fn as_shape(&self) -> Option<&ShapePath> {
        match &self.kind {
            LayerKind::Shape(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this layer is a shape group.
    pub fn is_shape_group(&self) -> bool {
        matches!(self.kind, LayerKind::ShapeGroup(_))
    }

    /// Text behaviour of text layers; `0` for everything else.
    pub fn text_behaviour(&self) -> i64 {
        match &self.kind {
            LayerKind::Text(t) => t.text_behaviour,
            _ => 0,
        }
    }
}

/// Document root: references to the archived pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Stable object identifier.
    #[serde(rename = "do_objectID", default)]
    pub object_id: String,
    /// Pages in display order.
    #[serde(default)]
    pub pages: Vec<AssetReference>,
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
