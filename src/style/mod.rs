//! Style resolution: colors, blend modes, paints, and the per-layer style descriptors.

pub(crate) mod blend;
pub(crate) mod color;
pub(crate) mod descriptor;
pub(crate) mod paint;
pub(crate) mod resolver;
pub(crate) mod text;
