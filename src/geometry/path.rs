use std::fmt::Write as _;

use crate::{
    document::model::{Layer, Path, ShapeKind},
    foundation::core::{BezPath, Frame, PathEl, Point, format_number},
    foundation::error::{SketchError, SketchResult},
};

/// Anything that can hand out an outline together with the frame it is normalized to.
pub trait GeometrySource {
    /// Frame the outline's points are normalized to.
    fn frame(&self) -> &Frame;

    /// The outline, if the source has one.
    fn outline(&self) -> Option<&Path>;

    /// Primitive the outline was drawn as.
    fn shape_kind(&self) -> Option<ShapeKind> {
        None
    }
}

impl GeometrySource for Layer {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn outline(&self) -> Option<&Path> {
        self.as_shape().map(|s| &s.path)
    }

    fn shape_kind(&self) -> Option<ShapeKind> {
        self.as_shape().map(|s| s.kind)
    }
}

/// Project a normalized outline into absolute coordinates.
///
/// Every segment is emitted as a cubic curve from the previous point's outgoing handle to the
/// next point's incoming handle. Closed outlines get a wrap-around segment back to the first
/// point and a close command.
pub fn project_path(frame: &Frame, path: &Path) -> SketchResult<BezPath> {
    let points = &path.points;
    let Some(first) = points.first() else {
        return Err(SketchError::malformed_geometry("path has no points"));
    };

    let mut out = BezPath::new();
    out.move_to(frame.project(first.point));

    let n = if path.is_closed {
        points.len() + 1
    } else {
        points.len()
    };
    for i in 1..n {
        let prev = &points[i - 1];
        let next = &points[i % points.len()];
        out.curve_to(
            frame.project(prev.curve_from),
            frame.project(next.curve_to),
            frame.project(next.point),
        );
    }

    if path.is_closed {
        out.close_path();
    }
    Ok(out)
}

/// Project the outline of a geometry source.
pub fn shape_geometry(source: &impl GeometrySource) -> SketchResult<BezPath> {
    let path = source
        .outline()
        .ok_or_else(|| SketchError::malformed_geometry("source has no outline"))?;
    project_path(source.frame(), path)
}

/// Serialize a path as compact SVG path data: `M{x},{y}C{x1},{y1} {x2},{y2} {x},{y}…Z`.
pub fn path_data(path: &BezPath) -> String {
    fn pt(out: &mut String, p: Point) {
        let _ = write!(out, "{},{}", format_number(p.x), format_number(p.y));
    }

    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                out.push('M');
                pt(&mut out, p);
            }
            PathEl::LineTo(p) => {
                out.push('L');
                pt(&mut out, p);
            }
            PathEl::QuadTo(p1, p2) => {
                out.push('Q');
                pt(&mut out, p1);
                out.push(' ');
                pt(&mut out, p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                out.push('C');
                pt(&mut out, p1);
                out.push(' ');
                pt(&mut out, p2);
                out.push(' ');
                pt(&mut out, p3);
            }
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

/// Project a geometry source straight to SVG path data.
pub fn shape_path_data(source: &impl GeometrySource) -> SketchResult<String> {
    shape_geometry(source).map(|p| path_data(&p))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
