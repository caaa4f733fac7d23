//! Sketchweave turns a parsed vector design document into presentation-ready styles and paths.
//!
//! A document archive holds a graph of JSON objects discriminated by `_class`. Sketchweave
//! builds that graph into typed nodes and resolves each node into what a renderer needs.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: archive JSON -> [`Node`] via [`parse_node`] (layers, styles, paths, references)
//! 2. **Style**: [`Layer`] -> [`StyleDescriptor`] via [`resolve_layer_style`] and
//!    [`resolve_layer_text_style`]
//! 3. **Geometry**: shape outline -> absolute [`BezPath`] via [`shape_geometry`], or SVG path
//!    data via [`shape_path_data`]
//! 4. **Assets**: lazy [`AssetReference`] -> nested page or image handle via
//!    [`AssetResolver::resolve`]
//!
//! Style and geometry resolution are pure and never touch the archive. Asset resolution is the
//! only async and fallible IO step.
//!
//! Unsupported features degrade instead of failing: unknown blend modes are omitted, and
//! gradients other than linear paint as [`UNSUPPORTED_PAINT`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod document;
mod foundation;
mod geometry;
mod style;

pub use assets::archive::{Archive, DirArchive, MemoryArchive, normalize_entry_name};
pub use assets::image_source::{ImageBlob, ImageRegistry, ImageSource};
pub use assets::resolver::{AssetResolver, ResolvedAsset, ResolverOpts, entry_name};
pub use document::class::NodeClass;
pub use document::model::{
    AssetReference, AttributedString, BitmapLayer, BlendMode, Border, Color, Container,
    CurvePoint, Document, EncodedAttributes, Fill, FillType, FontAttribute, FontDescriptor,
    Gradient, GradientStop, GradientType, GraphicsContextSettings, Layer, LayerKind,
    ParagraphStyle, Path, RefClass, Shadow, ShapeKind, ShapePath, Style, SymbolInstance,
    SymbolMaster, TextLayer, TextStyle,
};
pub use document::parse::{Node, node_class_of, parse_node, parse_node_str};
pub use foundation::core::{
    BezPath, Frame, NormPoint, PathEl, Point, Size, Vec2, format_number, round_half_up,
};
pub use foundation::error::{AssetResolutionError, SketchError, SketchResult};
pub use geometry::path::{GeometrySource, path_data, project_path, shape_geometry, shape_path_data};
pub use style::blend::{blend_mode_from_name, blend_mode_to_string};
pub use style::color::color_to_string;
pub use style::descriptor::{StyleDescriptor, StyleKey, StyleValue};
pub use style::paint::{
    FillStyle, UNSUPPORTED_PAINT, fill_blend_mode, fill_to_string, fill_to_style,
    gradient_stop_to_string, gradient_to_string,
};
pub use style::resolver::{
    border_to_string, resolve_bitmap_style, resolve_layer_style, resolve_style, shadow_to_string,
};
pub use style::text::{TextAlignment, resolve_layer_text_style, resolve_text_style};
