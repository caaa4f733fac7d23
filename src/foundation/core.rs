use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::foundation::error::{SketchError, SketchResult};

pub use kurbo::{BezPath, PathEl, Point, Size, Vec2};

/// Round half-way cases toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// This is the rounding the design tool uses for frame coordinates, and it differs from
/// [`f64::round`] on negative half-way values.
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Format a number the way style strings expect it: shortest round-trip form, no trailing
/// `.0`, and no negative zero.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    format!("{v}")
}

/// Axis-aligned bounding box of a layer in its parent's coordinate space.
///
/// Rounding is applied once, at construction: `x()`, `y()`, `width()` and `height()` always
/// return whole numbers. The values as authored stay available through [`Frame::origin`] and
/// [`Frame::size`] for curve projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    origin: Point,
    size: Size,
}

impl Frame {
    /// Build a frame from authored (possibly fractional) values.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: round_half_up(x),
            y: round_half_up(y),
            width: round_half_up(width),
            height: round_half_up(height),
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rounded left edge.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Rounded top edge.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rounded width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Rounded height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Unrounded top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unrounded size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether the rounded width equals the rounded height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Project a point normalized to this frame into parent coordinates.
    pub fn project(&self, p: NormPoint) -> Point {
        Point::new(
            self.origin.x + self.size.width * p.x,
            self.origin.y + self.size.height * p.y,
        )
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            #[serde(default)]
            x: f64,
            #[serde(default)]
            y: f64,
            #[serde(default)]
            width: f64,
            #[serde(default)]
            height: f64,
        }

        let r = Repr::deserialize(deserializer)?;
        Ok(Self::new(r.x, r.y, r.width, r.height))
    }
}

/// A point normalized to a frame's unit square, authored as `"{x, y}"`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormPoint {
    /// Horizontal fraction of the frame width.
    pub x: f64,
    /// Vertical fraction of the frame height.
    pub y: f64,
}

impl NormPoint {
    /// Build a normalized point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl FromStr for NormPoint {
    type Err = SketchError;

    fn from_str(s: &str) -> SketchResult<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| SketchError::validation(format!("point \"{s}\" must be braced")))?;

        let mut parts = inner.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SketchError::validation(format!(
                "point \"{s}\" must have exactly two components"
            )));
        };

        fn component(raw: &str, whole: &str) -> SketchResult<f64> {
            raw.trim().parse::<f64>().map_err(|_| {
                SketchError::validation(format!("invalid point component \"{raw}\" in \"{whole}\""))
            })
        }

        Ok(Self {
            x: component(x, s)?,
            y: component(y, s)?,
        })
    }
}

impl fmt::Display for NormPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", format_number(self.x), format_number(self.y))
    }
}

impl<'de> Deserialize<'de> for NormPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
